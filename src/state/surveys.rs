use std::sync::Arc;

use crate::action::Action;

use super::models::{Survey, SurveyMap};

pub(super) fn reduce(surveys: &Arc<SurveyMap>, action: &Action) -> Arc<SurveyMap> {
    match action {
        Action::AddSurvey {
            id,
            title,
            description,
        } => {
            let mut next = SurveyMap::clone(surveys);
            next.insert(
                id.clone(),
                Arc::new(Survey {
                    id: id.clone(),
                    title: title.clone(),
                    description: description.clone(),
                }),
            );
            Arc::new(next)
        }

        Action::RemoveSurvey { id } => {
            if !surveys.contains_key(id) {
                return Arc::clone(surveys);
            }
            let mut next = SurveyMap::clone(surveys);
            next.remove(id);
            Arc::new(next)
        }

        Action::EditSurvey {
            id,
            title,
            description,
        } => {
            let Some(prev) = surveys.get(id) else {
                tracing::debug!(%id, "edit for unknown survey ignored");
                return Arc::clone(surveys);
            };
            let mut record = Survey::clone(prev);
            if let Some(title) = title {
                record.title = title.clone();
            }
            if let Some(description) = description {
                record.description = Some(description.clone());
            }
            // Cloning the map keeps every other entry the same allocation.
            let mut next = SurveyMap::clone(surveys);
            next.insert(id.clone(), Arc::new(record));
            Arc::new(next)
        }

        Action::UpdateSurveys { surveys } => Arc::clone(surveys),

        _ => Arc::clone(surveys),
    }
}
