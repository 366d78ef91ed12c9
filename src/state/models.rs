// Normalized record structs

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type SurveyMap = HashMap<String, Arc<Survey>>;
pub type QuestionMap = HashMap<String, Arc<Question>>;
pub type OptionMap = HashMap<String, Arc<QuestionOption>>;
/// Outer key = question id, inner key = option id.
pub type OptionGroups = HashMap<String, Arc<OptionMap>>;
/// Keyed by question id.
pub type AnswerMap = HashMap<String, Arc<Answer>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Question kind tag shared by actions and records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kind {
    Scale,
    Text,
    Select,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Scale => "Scale",
            Kind::Text => "Text",
            Kind::Select => "Select",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub fields: KindFields,
}

/// Kind-specific fields as a tagged union, so the fields present always
/// match the kind and edits can never change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum KindFields {
    Scale { min: i64, max: i64 },
    Text { max: i64 },
    #[serde(rename_all = "camelCase")]
    Select { max_selection: i64 },
}

impl KindFields {
    pub fn kind(&self) -> Kind {
        match self {
            KindFields::Scale { .. } => Kind::Scale,
            KindFields::Text { .. } => Kind::Text,
            KindFields::Select { .. } => Kind::Select,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOption {
    pub id: String,
    pub label: String,
}

/// One respondent's answer to one question. Select answers are a set of
/// chosen option ids, serialized as a sorted array; Scale/Text answers are
/// a single scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    #[serde(rename_all = "camelCase")]
    Selection {
        question_id: String,
        value: BTreeSet<String>,
    },
    #[serde(rename_all = "camelCase")]
    Scalar { question_id: String, value: Value },
}

impl Answer {
    pub fn question_id(&self) -> &str {
        match self {
            Answer::Selection { question_id, .. } | Answer::Scalar { question_id, .. } => {
                question_id
            }
        }
    }
}

/// Singleton signin/session record toggled by the authentication flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}
