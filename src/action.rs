use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{id_string, opt_id_string};
use crate::state::models::{AnswerMap, Kind, OptionGroups, QuestionMap, Session, SurveyMap};

/// The wire vocabulary between the dispatch layer and the state core.
///
/// On the wire every action is a tagged record `{"type": <KIND>, ...}` with
/// camelCase fields; extra fields are ignored, an unrecognized type fails at
/// parse time so the reducers never see it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    AddSurvey {
        #[serde(deserialize_with = "id_string")]
        id: String,
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    RemoveSurvey {
        #[serde(deserialize_with = "id_string")]
        id: String,
    },
    EditSurvey {
        #[serde(deserialize_with = "id_string")]
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    AddQuestion {
        #[serde(deserialize_with = "id_string")]
        id: String,
        kind: Kind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        required: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_selection: Option<i64>,
    },
    RemoveQuestion {
        #[serde(deserialize_with = "id_string")]
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        kind: Option<Kind>,
    },
    EditQuestion {
        #[serde(deserialize_with = "id_string")]
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        kind: Option<Kind>,
        #[serde(default)]
        data: QuestionPatch,
    },
    AddOption {
        #[serde(deserialize_with = "id_string")]
        question_id: String,
        kind: Kind,
        #[serde(deserialize_with = "id_string")]
        id: String,
        label: String,
    },
    RemoveOption {
        #[serde(deserialize_with = "id_string")]
        question_id: String,
        #[serde(deserialize_with = "id_string")]
        id: String,
    },
    EditOption {
        #[serde(deserialize_with = "id_string")]
        question_id: String,
        #[serde(deserialize_with = "id_string")]
        id: String,
        label: String,
    },
    AddAnswer {
        #[serde(deserialize_with = "id_string")]
        question_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        kind: Option<Kind>,
        value: Value,
    },
    RemoveAnswer {
        #[serde(deserialize_with = "id_string")]
        question_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        kind: Option<Kind>,
        #[serde(
            default,
            deserialize_with = "opt_id_string",
            skip_serializing_if = "Option::is_none"
        )]
        id: Option<String>,
    },
    UpdateSurveys {
        surveys: Arc<SurveyMap>,
    },
    UpdateSurvey {
        questions: Arc<QuestionMap>,
        options: Arc<OptionGroups>,
    },
    UpdateResponses {
        responses: Arc<AnswerMap>,
    },
    UpdateAggregates {
        aggregates: Arc<AnswerMap>,
    },
    ToggleError,
    ErrorTrue {
        message: String,
    },
    ErrorFalse,
    EditUser {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
    },
    UpdateState {
        signin: Arc<Session>,
    },
}

/// Fields an EDIT_QUESTION patch may carry. Absent fields keep their prior
/// value; kind-specific fields only apply where the stored question's kind
/// actually has them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selection: Option<i64>,
}
