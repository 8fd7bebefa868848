// src/types/mod.rs
pub mod api;
pub mod files;
pub mod form;

pub use api::{Ack, Candidate, Interview, Job, MatchResult, Shortlist, ShortlistedCandidate};
pub use files::{FileSelection, SelectedFile};
pub use form::{FormPayload, FormValue};
