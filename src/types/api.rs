// src/types/api.rs
//! Typed shapes of the recruiting API replies.
//!
//! Records are only held for a single render pass. Ids arrive as JSON numbers
//! or strings and are carried as strings, the form the page uses for option
//! values and query parameters.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

fn id_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(i64),
        Float(f64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Int(n) => n.to_string(),
        RawId::Float(f) => f.to_string(),
        RawId::Text(s) => s,
    })
}

/// Text columns the backend may leave NULL
fn null_as_default<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Score computed by the backend for one job/candidate pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub candidate_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub candidate_email: String,
    #[serde(default)]
    pub candidate_phone: Option<String>,
    /// Comma separated, as stored by the backend.
    #[serde(default, deserialize_with = "null_as_default")]
    pub matched_skills: String,
    #[serde(default)]
    pub match_analysis: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_title: String,
    #[serde(default)]
    pub company: Option<String>,
}

/// Reply body of the POST endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interview {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(deserialize_with = "id_string")]
    pub job_id: String,
    #[serde(deserialize_with = "id_string")]
    pub candidate_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scheduled_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub candidate_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub candidate_email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortlistedCandidate {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(deserialize_with = "id_string")]
    pub job_id: String,
    #[serde(deserialize_with = "id_string")]
    pub candidate_id: String,
    pub match_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub candidate_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub candidate_email: String,
    #[serde(default)]
    pub candidate_skills: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shortlist {
    pub job: Job,
    #[serde(default)]
    pub shortlisted: Vec<ShortlistedCandidate>,
}

/// Extract a list of records from a reply that is either a bare array or an
/// envelope carrying the array under `key`.
pub fn records<T: DeserializeOwned>(body: Value, key: &str) -> Result<Vec<T>> {
    let list = match body {
        Value::Array(_) => body,
        Value::Object(mut map) => map
            .remove(key)
            .with_context(|| format!("Reply has no '{}' list", key))?,
        other => anyhow::bail!("Expected a list of {}, got: {}", key, other),
    };

    serde_json::from_value(list).with_context(|| format!("Failed to parse {} list", key))
}

/// Server supplied error text of a rejected request, if any.
pub fn error_detail(body: &Value) -> Option<String> {
    body.get("detail")
        .and_then(Value::as_str)
        .filter(|detail| !detail.is_empty())
        .map(str::to_string)
}
