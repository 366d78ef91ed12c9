//! Answer-shaped slices: the respondent's in-progress `response`, the bulk
//! `responses` loaded for a survey owner, and the cross-respondent
//! `aggregates`. Only the in-progress slice is edited answer by answer; the
//! other two are replaced wholesale.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::action::Action;
use crate::normalize::selection_id;

use super::models::{Answer, AnswerMap, Kind};

pub(super) fn reduce(response: &Arc<AnswerMap>, action: &Action) -> Arc<AnswerMap> {
    match action {
        Action::AddAnswer {
            question_id,
            kind,
            value,
        } => {
            if *kind == Some(Kind::Select) {
                let Some(id) = selection_id(value) else {
                    tracing::debug!(%question_id, "select answer without a usable option id ignored");
                    return Arc::clone(response);
                };
                let mut set = match response.get(question_id).map(Arc::as_ref) {
                    Some(Answer::Selection { value, .. }) => {
                        // Re-selecting an already-chosen option is a no-op.
                        if value.contains(&id) {
                            return Arc::clone(response);
                        }
                        value.clone()
                    }
                    _ => BTreeSet::new(),
                };
                set.insert(id);
                let mut next = AnswerMap::clone(response);
                next.insert(
                    question_id.clone(),
                    Arc::new(Answer::Selection {
                        question_id: question_id.clone(),
                        value: set,
                    }),
                );
                Arc::new(next)
            } else {
                // Scalar kinds overwrite wholesale, never merge.
                let mut next = AnswerMap::clone(response);
                next.insert(
                    question_id.clone(),
                    Arc::new(Answer::Scalar {
                        question_id: question_id.clone(),
                        value: value.clone(),
                    }),
                );
                Arc::new(next)
            }
        }

        Action::RemoveAnswer {
            question_id,
            kind,
            id,
        } => {
            if let (Some(Kind::Select), Some(id)) = (kind, id) {
                // Drop one option id, keeping the (possibly empty) entry.
                match response.get(question_id).map(Arc::as_ref) {
                    Some(Answer::Selection { value, .. }) if value.contains(id) => {
                        let mut set = value.clone();
                        set.remove(id);
                        let mut next = AnswerMap::clone(response);
                        next.insert(
                            question_id.clone(),
                            Arc::new(Answer::Selection {
                                question_id: question_id.clone(),
                                value: set,
                            }),
                        );
                        Arc::new(next)
                    }
                    _ => Arc::clone(response),
                }
            } else {
                if !response.contains_key(question_id) {
                    return Arc::clone(response);
                }
                let mut next = AnswerMap::clone(response);
                next.remove(question_id);
                Arc::new(next)
            }
        }

        _ => Arc::clone(response),
    }
}

pub(super) fn reduce_responses(responses: &Arc<AnswerMap>, action: &Action) -> Arc<AnswerMap> {
    match action {
        Action::UpdateResponses { responses } => Arc::clone(responses),
        _ => Arc::clone(responses),
    }
}

pub(super) fn reduce_aggregates(aggregates: &Arc<AnswerMap>, action: &Action) -> Arc<AnswerMap> {
    match action {
        Action::UpdateAggregates { aggregates } => Arc::clone(aggregates),
        _ => Arc::clone(aggregates),
    }
}
