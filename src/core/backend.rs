// src/core/backend.rs
//! The recruiting API as seen by the page controller.

use anyhow::Result;
use async_trait::async_trait;

use crate::types::{Ack, Candidate, FormPayload, Interview, Job, MatchResult, Shortlist};

pub const SCHEDULE_INTERVIEW_ENDPOINT: &str = "schedule-interview";

/// A reply that reached the client. Transport failures are reported as `Err`.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    /// HTTP status was ok and the body decoded.
    Accepted(T),
    /// HTTP status was not ok; `detail` is the server's error text if it sent one.
    Rejected { detail: Option<String> },
}

impl<T> Reply<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reply<U> {
        match self {
            Reply::Accepted(value) => Reply::Accepted(f(value)),
            Reply::Rejected { detail } => Reply::Rejected { detail },
        }
    }
}

#[async_trait]
pub trait Backend: Send + Sync + 'static {
    async fn jobs(&self) -> Result<Reply<Vec<Job>>>;

    async fn candidates(&self) -> Result<Reply<Vec<Candidate>>>;

    async fn match_score(&self, job_id: &str, candidate_id: &str) -> Result<Reply<MatchResult>>;

    /// Multipart POST to `endpoint`
    async fn submit(&self, endpoint: &str, payload: FormPayload) -> Result<Reply<Ack>>;

    async fn interviews(&self) -> Result<Reply<Vec<Interview>>>;

    async fn shortlisted(&self, job_id: &str) -> Result<Reply<Shortlist>>;
}

/// A request the controller asks the runtime to perform
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    Jobs,
    Candidates,
    Match { job_id: String, candidate_id: String },
    Submit { endpoint: String, payload: FormPayload },
    Interviews,
    Shortlisted { job_id: String },
}

impl ApiRequest {
    /// Short label for logs
    pub fn describe(&self) -> String {
        match self {
            ApiRequest::Jobs => "GET jobs".to_string(),
            ApiRequest::Candidates => "GET candidates".to_string(),
            ApiRequest::Match {
                job_id,
                candidate_id,
            } => format!("GET match job={} candidate={}", job_id, candidate_id),
            ApiRequest::Submit { endpoint, .. } => format!("POST {}", endpoint),
            ApiRequest::Interviews => "GET interviews".to_string(),
            ApiRequest::Shortlisted { job_id } => format!("GET shortlisted/{}", job_id),
        }
    }
}

/// Decoded body of an accepted reply
#[derive(Debug, Clone, PartialEq)]
pub enum ApiPayload {
    Jobs(Vec<Job>),
    Candidates(Vec<Candidate>),
    Match(MatchResult),
    Ack(Ack),
    Interviews(Vec<Interview>),
    Shortlist(Shortlist),
}

/// Run `request` against `backend`
pub async fn perform<B: Backend + ?Sized>(
    backend: &B,
    request: ApiRequest,
) -> Result<Reply<ApiPayload>> {
    let reply = match request {
        ApiRequest::Jobs => backend.jobs().await?.map(ApiPayload::Jobs),
        ApiRequest::Candidates => backend.candidates().await?.map(ApiPayload::Candidates),
        ApiRequest::Match {
            job_id,
            candidate_id,
        } => backend
            .match_score(&job_id, &candidate_id)
            .await?
            .map(ApiPayload::Match),
        ApiRequest::Submit { endpoint, payload } => {
            backend.submit(&endpoint, payload).await?.map(ApiPayload::Ack)
        }
        ApiRequest::Interviews => backend.interviews().await?.map(ApiPayload::Interviews),
        ApiRequest::Shortlisted { job_id } => backend
            .shortlisted(&job_id)
            .await?
            .map(ApiPayload::Shortlist),
    };
    Ok(reply)
}
