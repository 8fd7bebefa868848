// src/core/service_client.rs
//! HTTP client for the recruiting API - JSON replies, multipart form posts

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace, warn};

use super::backend::{Backend, Reply};
use crate::config::UiConfig;
use crate::types::api::{error_detail, records};
use crate::types::{
    Ack, Candidate, FormPayload, FormValue, Interview, Job, MatchResult, Shortlist,
};

const JOBS_ENDPOINT: &str = "jobs";
const CANDIDATES_ENDPOINT: &str = "candidates";
const MATCH_ENDPOINT: &str = "match";
const INTERVIEWS_ENDPOINT: &str = "interviews";
const SHORTLISTED_ENDPOINT: &str = "shortlisted";

pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create new API client for `base_url`
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &UiConfig) -> Result<Self> {
        Self::new(&config.api_base_url, config.request_timeout_secs)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    async fn get_reply<T>(
        &self,
        endpoint: &str,
        decode: impl FnOnce(Value) -> Result<T>,
    ) -> Result<Reply<T>> {
        let url = self.url(endpoint);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to GET from {}", url))?;

        Self::read_reply(response, decode).await
    }

    async fn read_reply<T>(
        response: reqwest::Response,
        decode: impl FnOnce(Value) -> Result<T>,
    ) -> Result<Reply<T>> {
        let status = response.status();
        trace!("Response status: {}", status);

        let body = response
            .text()
            .await
            .context("Failed to read response text")?;

        decode_reply(status, &body, decode)
    }

    /// Build the multipart body of a form submission
    fn multipart(payload: FormPayload) -> Result<Form> {
        let mut form = Form::new();
        for (name, value) in payload.into_parts() {
            form = match value {
                FormValue::Text(text) => form.text(name, text),
                FormValue::File(file) => {
                    let mut part = Part::bytes(file.content).file_name(file.name.clone());
                    if let Some(content_type) = content_type(&file.name) {
                        part = part
                            .mime_str(content_type)
                            .context("Failed to create multipart")?;
                    }
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

/// Turn a status and raw body into a reply.
///
/// An ok status must carry a decodable JSON body; anything else is a transport
/// level failure. A not-ok status is always a rejection, with the `detail`
/// text when the body provides one.
pub fn decode_reply<T>(
    status: StatusCode,
    body: &str,
    decode: impl FnOnce(Value) -> Result<T>,
) -> Result<Reply<T>> {
    if status.is_success() {
        let value: Value = serde_json::from_str(body)
            .with_context(|| format!("Failed to parse JSON response: {}", body))?;
        return decode(value).map(Reply::Accepted);
    }

    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(error_detail);

    if detail.is_none() {
        warn!("Service returned error status {} without detail", status);
    }

    Ok(Reply::Rejected { detail })
}

fn typed<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).context("Unexpected response shape")
}

/// Content type for an uploaded file, when the extension is known
fn content_type(file_name: &str) -> Option<&'static str> {
    let lower_name = file_name.to_lowercase();
    if lower_name.ends_with(".pdf") {
        Some("application/pdf")
    } else if lower_name.ends_with(".docx") {
        Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
    } else if lower_name.ends_with(".doc") {
        Some("application/msword")
    } else if lower_name.ends_with(".txt") {
        Some("text/plain")
    } else {
        None
    }
}

#[async_trait]
impl Backend for ApiClient {
    async fn jobs(&self) -> Result<Reply<Vec<Job>>> {
        self.get_reply(JOBS_ENDPOINT, |body| records(body, "jobs"))
            .await
    }

    async fn candidates(&self) -> Result<Reply<Vec<Candidate>>> {
        self.get_reply(CANDIDATES_ENDPOINT, |body| records(body, "candidates"))
            .await
    }

    async fn match_score(&self, job_id: &str, candidate_id: &str) -> Result<Reply<MatchResult>> {
        let url = self.url(MATCH_ENDPOINT);
        debug!("GET {} job_id={} candidate_id={}", url, job_id, candidate_id);

        let response = self
            .client
            .get(&url)
            .query(&[("job_id", job_id), ("candidate_id", candidate_id)])
            .send()
            .await
            .context("Failed to call match service")?;

        Self::read_reply(response, typed).await
    }

    async fn submit(&self, endpoint: &str, payload: FormPayload) -> Result<Reply<Ack>> {
        let url = self.url(endpoint);
        let form = Self::multipart(payload)?;

        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .with_context(|| format!("Failed to POST to {}", url))?;

        Self::read_reply(response, typed).await
    }

    async fn interviews(&self) -> Result<Reply<Vec<Interview>>> {
        self.get_reply(INTERVIEWS_ENDPOINT, |body| records(body, "interviews"))
            .await
    }

    async fn shortlisted(&self, job_id: &str) -> Result<Reply<Shortlist>> {
        let endpoint = format!(
            "{}/{}",
            SHORTLISTED_ENDPOINT,
            urlencoding::encode(job_id)
        );
        self.get_reply(&endpoint, typed).await
    }
}
