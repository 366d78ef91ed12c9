//! Action creators: the dispatch layer's side of the wire contract. User
//! intents mint ids here; network payloads are routed through the normalizer
//! and wrapped into bulk-replace actions. This module depends on the action
//! vocabulary only, never on reducer internals.

use color_eyre::{eyre::WrapErr, Result};
use serde_json::Value;
use ulid::Ulid;

use crate::action::{Action, QuestionPatch};
use crate::models::{AnswerDoc, SurveyDoc};
use crate::normalize;
use crate::state::models::Kind;

/// Mints an id for an entity created client-side, before the server has
/// seen it.
pub fn new_id() -> String {
    Ulid::new().to_string()
}

/// Parses one wire action. An unrecognized `type` is an error here, at the
/// boundary, so the reducers stay total and silent.
pub fn parse_action(raw: &str) -> Result<Action> {
    serde_json::from_str(raw).wrap_err("unrecognized or malformed action")
}

pub fn add_survey(title: &str) -> Action {
    Action::AddSurvey {
        id: new_id(),
        title: title.to_owned(),
        description: None,
    }
}

pub fn edit_survey(id: &str, title: Option<&str>, description: Option<&str>) -> Action {
    Action::EditSurvey {
        id: id.to_owned(),
        title: title.map(str::to_owned),
        description: description.map(str::to_owned),
    }
}

pub fn remove_survey(id: &str) -> Action {
    Action::RemoveSurvey { id: id.to_owned() }
}

pub fn add_question(kind: Kind, title: &str) -> Action {
    Action::AddQuestion {
        id: new_id(),
        kind,
        title: Some(title.to_owned()),
        required: None,
        min: None,
        max: None,
        max_selection: None,
    }
}

pub fn edit_question(id: &str, kind: Kind, data: QuestionPatch) -> Action {
    Action::EditQuestion {
        id: id.to_owned(),
        kind: Some(kind),
        data,
    }
}

pub fn remove_question(id: &str, kind: Kind) -> Action {
    Action::RemoveQuestion {
        id: id.to_owned(),
        kind: Some(kind),
    }
}

pub fn add_option(question_id: &str, kind: Kind, label: &str) -> Action {
    Action::AddOption {
        question_id: question_id.to_owned(),
        kind,
        id: new_id(),
        label: label.to_owned(),
    }
}

pub fn edit_option(question_id: &str, id: &str, label: &str) -> Action {
    Action::EditOption {
        question_id: question_id.to_owned(),
        id: id.to_owned(),
        label: label.to_owned(),
    }
}

pub fn remove_option(question_id: &str, id: &str) -> Action {
    Action::RemoveOption {
        question_id: question_id.to_owned(),
        id: id.to_owned(),
    }
}

pub fn answer(question_id: &str, kind: Kind, value: Value) -> Action {
    Action::AddAnswer {
        question_id: question_id.to_owned(),
        kind: Some(kind),
        value,
    }
}

/// Removes one selected option from a Select answer.
pub fn deselect(question_id: &str, option_id: &str) -> Action {
    Action::RemoveAnswer {
        question_id: question_id.to_owned(),
        kind: Some(Kind::Select),
        id: Some(option_id.to_owned()),
    }
}

/// Drops the whole answer for a question.
pub fn clear_answer(question_id: &str) -> Action {
    Action::RemoveAnswer {
        question_id: question_id.to_owned(),
        kind: None,
        id: None,
    }
}

pub fn sign_in(name: &str, id: &str) -> Action {
    Action::EditUser {
        name: Some(name.to_owned()),
        id: Some(id.to_owned()),
    }
}

pub fn report_error(message: &str) -> Action {
    Action::ErrorTrue {
        message: message.to_owned(),
    }
}

pub fn dismiss_error() -> Action {
    Action::ErrorFalse
}

pub fn load_surveys(docs: &[SurveyDoc]) -> Action {
    Action::UpdateSurveys {
        surveys: normalize::normalize_surveys(docs),
    }
}

pub fn open_survey(doc: &SurveyDoc) -> Action {
    let normalized = normalize::normalize_survey(doc);
    Action::UpdateSurvey {
        questions: normalized.questions,
        options: normalized.options,
    }
}

pub fn load_responses(docs: &[AnswerDoc]) -> Action {
    Action::UpdateResponses {
        responses: normalize::normalize_responses(docs),
    }
}

pub fn load_aggregates(docs: &[AnswerDoc]) -> Action {
    Action::UpdateAggregates {
        aggregates: normalize::normalize_responses(docs),
    }
}
