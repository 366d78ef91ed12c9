use std::sync::Arc;

use crate::action::Action;

use super::models::{Kind, KindFields, Question, QuestionMap};

pub(super) fn reduce(questions: &Arc<QuestionMap>, action: &Action) -> Arc<QuestionMap> {
    match action {
        Action::AddQuestion {
            id,
            kind,
            title,
            required,
            min,
            max,
            max_selection,
        } => {
            // Kind-specific fields are always populated, so an action that
            // omits them still yields a fully-formed record.
            let fields = match kind {
                Kind::Scale => KindFields::Scale {
                    min: min.unwrap_or(0),
                    max: max.unwrap_or(0),
                },
                Kind::Text => KindFields::Text {
                    max: max.unwrap_or(0),
                },
                Kind::Select => KindFields::Select {
                    max_selection: max_selection.unwrap_or(0),
                },
            };
            let mut next = QuestionMap::clone(questions);
            next.insert(
                id.clone(),
                Arc::new(Question {
                    id: id.clone(),
                    title: title.clone().unwrap_or_default(),
                    required: required.unwrap_or(false),
                    fields,
                }),
            );
            Arc::new(next)
        }

        Action::RemoveQuestion { id, .. } => {
            if !questions.contains_key(id) {
                return Arc::clone(questions);
            }
            let mut next = QuestionMap::clone(questions);
            next.remove(id);
            Arc::new(next)
        }

        Action::EditQuestion { id, data, .. } => {
            let Some(prev) = questions.get(id) else {
                tracing::debug!(%id, "edit for unknown question ignored");
                return Arc::clone(questions);
            };
            let mut record = Question::clone(prev);
            if let Some(title) = &data.title {
                record.title = title.clone();
            }
            if let Some(required) = data.required {
                record.required = required;
            }
            // A patch only lands on the fields the stored kind actually has;
            // the kind itself never changes.
            match &mut record.fields {
                KindFields::Scale { min, max } => {
                    if let Some(v) = data.min {
                        *min = v;
                    }
                    if let Some(v) = data.max {
                        *max = v;
                    }
                }
                KindFields::Text { max } => {
                    if let Some(v) = data.max {
                        *max = v;
                    }
                }
                KindFields::Select { max_selection } => {
                    if let Some(v) = data.max_selection {
                        *max_selection = v;
                    }
                }
            }
            let mut next = QuestionMap::clone(questions);
            next.insert(id.clone(), Arc::new(record));
            Arc::new(next)
        }

        Action::UpdateSurvey { questions, .. } => Arc::clone(questions),

        _ => Arc::clone(questions),
    }
}
