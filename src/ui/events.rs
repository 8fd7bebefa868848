// src/ui/events.rs
//! Messages flowing into the controller and commands flowing out of it.

use std::time::Duration;
use uuid::Uuid;

use crate::core::{ApiPayload, ApiRequest};
use crate::types::SelectedFile;

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Document parsed; behaviors are registered and options loaded
    DomContentLoaded,
    /// Window fully loaded; `query` is the location's search string
    WindowLoaded { query: String },
    MenuButtonClicked,
    UploadAreaClicked { area: String },
    DragOver { area: String },
    DragLeave { area: String },
    Drop { area: String, files: Vec<SelectedFile> },
    FilesChanged { area: String, files: Vec<SelectedFile> },
    FieldInput { form: String, name: String, value: String },
    /// A select picked by the user; `select` is its id or name
    SelectChanged { select: String, value: String },
    FormSubmitted { form: String },
    ScheduleInterviewClicked { job_id: String, candidate_id: String },
    RefreshInterviews,
    ThemeToggleClicked,
    TimerFired(Timer),
    Replied { origin: Origin, outcome: Outcome },
}

/// Delayed work, delivered back as [`UiEvent::TimerFired`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timer {
    Redirect { url: String },
    ReloadInterviews,
    ToastFadeIn { toast: Uuid },
    ToastFadeOut { toast: Uuid },
    ToastRemove { toast: Uuid },
}

/// What a request was made for, so its reply lands in the right place
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Form { form: String },
    Match { job_id: String, candidate_id: String },
    Schedule { form: String },
    Options(OptionSource),
    Interviews,
    Shortlist { job_id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSource {
    Jobs,
    Candidates,
}

impl OptionSource {
    pub fn request(self) -> ApiRequest {
        match self {
            OptionSource::Jobs => ApiRequest::Jobs,
            OptionSource::Candidates => ApiRequest::Candidates,
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            OptionSource::Jobs => "jobs",
            OptionSource::Candidates => "candidates",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Accepted(ApiPayload),
    Rejected { detail: Option<String> },
    /// The request itself failed
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Fetch { origin: Origin, request: ApiRequest },
    Schedule { after: Duration, timer: Timer },
    Navigate { url: String },
    /// Blocking modal alert
    Alert { message: String },
    OpenFilePicker { area: String },
}
