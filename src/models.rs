use color_eyre::{eyre::WrapErr, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Nested survey document as the persistence layer ships it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyDoc {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub questions: Vec<QuestionDoc>,
}

/// Embedded question document. `kind` stays a plain string here so a
/// document with an unsupported kind still deserializes and can be skipped
/// during normalization instead of failing the whole survey.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDoc {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_selection: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionDoc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionDoc {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub label: String,
}

/// One raw answer document from the responses collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerDoc {
    #[serde(deserialize_with = "id_string")]
    pub question_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub value: Value,
}

pub fn surveys_from_json(raw: &str) -> Result<Vec<SurveyDoc>> {
    serde_json::from_str(raw).wrap_err("invalid survey list document")
}

pub fn survey_from_json(raw: &str) -> Result<SurveyDoc> {
    serde_json::from_str(raw).wrap_err("invalid survey document")
}

pub fn answers_from_json(raw: &str) -> Result<Vec<AnswerDoc>> {
    serde_json::from_str(raw).wrap_err("invalid answer documents")
}

/// Ids arrive as JSON strings or numbers; numbers are coerced to their
/// decimal string form so every mapping is keyed uniformly.
pub(crate) fn id_string<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    match Value::deserialize(de)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or numeric id, got {other}"
        ))),
    }
}

pub(crate) fn opt_id_string<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    match Option::<Value>::deserialize(de)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string or numeric id, got {other}"
        ))),
    }
}
