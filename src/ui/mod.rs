// src/ui/mod.rs
//! Page controller: an explicit page model updated by events, emitting
//! commands for the runtime to carry out.

pub mod controller;
pub mod events;
pub mod matching;
mod navigation;
pub mod page;
mod selects;
pub mod templates;
pub mod toast;

mod forms;
mod uploads;

pub use controller::UiController;
pub use events::{Command, OptionSource, Origin, Outcome, Timer, UiEvent};
pub use matching::ScoreTier;
pub use page::Page;
