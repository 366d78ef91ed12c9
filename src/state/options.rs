use std::sync::Arc;

use crate::action::Action;

use super::models::{Kind, OptionGroups, OptionMap, QuestionOption};

pub(super) fn reduce(options: &Arc<OptionGroups>, action: &Action) -> Arc<OptionGroups> {
    match action {
        Action::AddOption {
            question_id,
            kind,
            id,
            label,
        } => {
            // Options exist only under Select questions.
            if *kind != Kind::Select {
                return Arc::clone(options);
            }
            let mut group = options
                .get(question_id)
                .map(|g| OptionMap::clone(g))
                .unwrap_or_default();
            group.insert(
                id.clone(),
                Arc::new(QuestionOption {
                    id: id.clone(),
                    label: label.clone(),
                }),
            );
            let mut next = OptionGroups::clone(options);
            next.insert(question_id.clone(), Arc::new(group));
            Arc::new(next)
        }

        Action::RemoveOption { question_id, id } => {
            let Some(group) = options.get(question_id) else {
                return Arc::clone(options);
            };
            if !group.contains_key(id) {
                return Arc::clone(options);
            }
            let mut group = OptionMap::clone(group);
            group.remove(id);
            let mut next = OptionGroups::clone(options);
            next.insert(question_id.clone(), Arc::new(group));
            Arc::new(next)
        }

        Action::EditOption {
            question_id,
            id,
            label,
        } => {
            let Some(group) = options.get(question_id) else {
                tracing::debug!(%question_id, %id, "edit for unknown option ignored");
                return Arc::clone(options);
            };
            if !group.contains_key(id) {
                tracing::debug!(%question_id, %id, "edit for unknown option ignored");
                return Arc::clone(options);
            }
            // Sibling entries in the group keep their allocation.
            let mut group = OptionMap::clone(group);
            group.insert(
                id.clone(),
                Arc::new(QuestionOption {
                    id: id.clone(),
                    label: label.clone(),
                }),
            );
            let mut next = OptionGroups::clone(options);
            next.insert(question_id.clone(), Arc::new(group));
            Arc::new(next)
        }

        // Removing a question drops its whole option group in the same
        // transition. The cascade keys on group presence rather than the
        // action's kind tag, so a kind-less removal cannot leave a group
        // dangling; only Select questions ever have one.
        Action::RemoveQuestion { id, .. } => {
            if !options.contains_key(id) {
                return Arc::clone(options);
            }
            let mut next = OptionGroups::clone(options);
            next.remove(id);
            Arc::new(next)
        }

        Action::UpdateSurvey { options, .. } => Arc::clone(options),

        _ => Arc::clone(options),
    }
}
