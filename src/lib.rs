//! Controller for the RecruitAI pages: uploads, dropdowns, match scores,
//! interview scheduling and the shortlist, driven by events against the
//! recruitment backend.

pub mod cli;
pub mod config;
pub mod core;
pub mod runtime;
pub mod types;
pub mod ui;
pub mod utils;

pub use crate::config::UiConfig;
pub use crate::core::{ApiClient, Backend, Reply};
pub use runtime::{ConsoleHost, Host, Runtime};
pub use ui::{Command, Page, UiController, UiEvent};
