//! Flattens nested survey/response documents into the id-keyed mappings the
//! reducers operate on, and back again for export.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde_json::Value;

use crate::models::{AnswerDoc, OptionDoc, QuestionDoc, SurveyDoc};
use crate::state::models::{
    Answer, AnswerMap, Kind, KindFields, OptionGroups, OptionMap, Question, QuestionMap,
    QuestionOption, Survey, SurveyMap,
};

/// The question and option mappings extracted from one survey document.
pub struct NormalizedSurvey {
    pub questions: Arc<QuestionMap>,
    pub options: Arc<OptionGroups>,
}

/// Survey-level fields only; embedded questions and options are stripped.
pub fn normalize_surveys(docs: &[SurveyDoc]) -> Arc<SurveyMap> {
    let surveys = docs
        .iter()
        .map(|doc| {
            (
                doc.id.clone(),
                Arc::new(Survey {
                    id: doc.id.clone(),
                    title: doc.title.clone(),
                    description: doc.description.clone(),
                }),
            )
        })
        .collect();

    Arc::new(surveys)
}

/// Extracts the embedded questions and options of one survey. Missing fields
/// fill with explicit defaults; a question whose kind is not Scale/Text/Select
/// is skipped entirely, leaving no partial record behind.
pub fn normalize_survey(doc: &SurveyDoc) -> NormalizedSurvey {
    let mut questions = QuestionMap::new();
    let mut groups = OptionGroups::new();

    for q in &doc.questions {
        let fields = match q.kind.as_str() {
            "Scale" => KindFields::Scale {
                min: q.min.unwrap_or(0),
                max: q.max.unwrap_or(0),
            },
            "Text" => KindFields::Text {
                max: q.max.unwrap_or(0),
            },
            "Select" => KindFields::Select {
                max_selection: q.max_selection.unwrap_or(0),
            },
            kind => {
                tracing::warn!(%kind, id = %q.id, "skipping question with unsupported kind");
                continue;
            }
        };

        // Every Select question gets an option group, possibly empty.
        if let KindFields::Select { .. } = fields {
            let group: OptionMap = q
                .options
                .iter()
                .map(|o| {
                    (
                        o.id.clone(),
                        Arc::new(QuestionOption {
                            id: o.id.clone(),
                            label: o.label.clone(),
                        }),
                    )
                })
                .collect();
            groups.insert(q.id.clone(), Arc::new(group));
        }

        questions.insert(
            q.id.clone(),
            Arc::new(Question {
                id: q.id.clone(),
                title: q.title.clone().unwrap_or_default(),
                required: q.required.unwrap_or(false),
                fields,
            }),
        );
    }

    NormalizedSurvey {
        questions: Arc::new(questions),
        options: Arc::new(groups),
    }
}

/// Raw answer documents keyed by question id. Select answers accumulate into
/// a set across documents for the same question; scalar kinds overwrite. A
/// document without a kind is classified by its value shape, so normalizing
/// already-normalized data is a no-op.
pub fn normalize_responses(docs: &[AnswerDoc]) -> Arc<AnswerMap> {
    let mut answers = AnswerMap::new();

    for doc in docs {
        let selection = match doc.kind.as_deref() {
            Some("Select") => true,
            Some("Scale") | Some("Text") => false,
            Some(kind) => {
                tracing::warn!(%kind, question_id = %doc.question_id, "skipping answer with unsupported kind");
                continue;
            }
            None => doc.value.is_array(),
        };

        if selection {
            let mut set = match answers.get(&doc.question_id).map(Arc::as_ref) {
                Some(Answer::Selection { value, .. }) => value.clone(),
                _ => BTreeSet::new(),
            };
            match &doc.value {
                Value::Array(items) => {
                    for item in items {
                        if let Some(id) = selection_id(item) {
                            set.insert(id);
                        }
                    }
                }
                other => {
                    if let Some(id) = selection_id(other) {
                        set.insert(id);
                    }
                }
            }
            // A document that yields no usable option id leaves no record,
            // same as the reducer's treatment of such an answer.
            if set.is_empty() {
                tracing::debug!(question_id = %doc.question_id, "skipping select answer without usable option ids");
                continue;
            }
            answers.insert(
                doc.question_id.clone(),
                Arc::new(Answer::Selection {
                    question_id: doc.question_id.clone(),
                    value: set,
                }),
            );
        } else {
            answers.insert(
                doc.question_id.clone(),
                Arc::new(Answer::Scalar {
                    question_id: doc.question_id.clone(),
                    value: doc.value.clone(),
                }),
            );
        }
    }

    Arc::new(answers)
}

/// Inverse of [`normalize_survey`], for export. Questions and options are
/// emitted sorted by id so output is deterministic.
pub fn denormalize_survey(
    survey: &Survey,
    questions: &QuestionMap,
    options: &OptionGroups,
) -> SurveyDoc {
    let mut qdocs: Vec<QuestionDoc> = questions
        .values()
        .map(|q| {
            let (min, max, max_selection) = match q.fields {
                KindFields::Scale { min, max } => (Some(min), Some(max), None),
                KindFields::Text { max } => (None, Some(max), None),
                KindFields::Select { max_selection } => (None, None, Some(max_selection)),
            };

            let mut opts: Vec<OptionDoc> = if q.fields.kind() == Kind::Select {
                options
                    .get(&q.id)
                    .map(|group| {
                        group
                            .values()
                            .map(|o| OptionDoc {
                                id: o.id.clone(),
                                label: o.label.clone(),
                            })
                            .collect()
                    })
                    .unwrap_or_default()
            } else {
                Vec::new()
            };
            opts.sort_by(|a, b| a.id.cmp(&b.id));

            QuestionDoc {
                id: q.id.clone(),
                kind: q.fields.kind().as_str().to_owned(),
                title: Some(q.title.clone()),
                required: Some(q.required),
                min,
                max,
                max_selection,
                options: opts,
            }
        })
        .collect();
    qdocs.sort_by(|a, b| a.id.cmp(&b.id));

    SurveyDoc {
        id: survey.id.clone(),
        title: survey.title.clone(),
        description: survey.description.clone(),
        questions: qdocs,
    }
}

/// A selected option id inside an answer value: strings pass through,
/// numbers coerce to their decimal form, anything else is unusable.
pub(crate) fn selection_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
