// src/ui/controller.rs
use tracing::trace;

use super::events::{Command, Origin, Outcome, Timer, UiEvent};
use super::page::Page;
use crate::config::UiConfig;

/// Owns the page and turns events into page updates plus commands.
///
/// `update` never blocks: requests and timers are handed back as commands and
/// their results come in later as events. Replies are applied in the order
/// they arrive, so when two requests for the same target overlap the last
/// reply wins.
pub struct UiController {
    pub(crate) config: UiConfig,
    pub(crate) page: Page,
}

impl UiController {
    pub fn new(config: UiConfig, page: Page) -> Self {
        Self { config, page }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn update(&mut self, event: UiEvent) -> Vec<Command> {
        trace!("Handling event: {:?}", event);

        match event {
            UiEvent::DomContentLoaded => {
                self.add_dark_mode_toggle();
                let mut commands = self.load_selection_options();
                commands.extend(self.load_upcoming_interviews());
                commands
            }
            UiEvent::WindowLoaded { query } => {
                self.load_url_params(&query);
                Vec::new()
            }
            UiEvent::MenuButtonClicked => {
                self.toggle_menu();
                Vec::new()
            }
            UiEvent::UploadAreaClicked { area } => self.upload_area_clicked(&area),
            UiEvent::DragOver { area } => {
                self.set_dragover(&area, true);
                Vec::new()
            }
            UiEvent::DragLeave { area } => {
                self.set_dragover(&area, false);
                Vec::new()
            }
            UiEvent::Drop { area, files } => {
                self.drop_files(&area, files);
                Vec::new()
            }
            UiEvent::FilesChanged { area, files } => {
                self.files_changed(&area, files);
                Vec::new()
            }
            UiEvent::FieldInput { form, name, value } => {
                self.field_input(&form, &name, value);
                Vec::new()
            }
            UiEvent::SelectChanged { select, value } => self.select_changed(&select, &value),
            UiEvent::FormSubmitted { form } => self.submit_form(&form),
            UiEvent::ScheduleInterviewClicked {
                job_id,
                candidate_id,
            } => vec![self.schedule_interview_redirect(&job_id, &candidate_id)],
            UiEvent::RefreshInterviews => self.load_upcoming_interviews(),
            UiEvent::ThemeToggleClicked => self.theme_toggle_clicked(),
            UiEvent::TimerFired(timer) => self.timer_fired(timer),
            UiEvent::Replied { origin, outcome } => self.apply_reply(origin, outcome),
        }
    }

    fn timer_fired(&mut self, timer: Timer) -> Vec<Command> {
        match timer {
            Timer::Redirect { url } => vec![Command::Navigate { url }],
            Timer::ReloadInterviews => self.load_upcoming_interviews(),
            Timer::ToastFadeIn { toast } => {
                self.fade_in_toast(toast);
                Vec::new()
            }
            Timer::ToastFadeOut { toast } => self.fade_out_toast(toast),
            Timer::ToastRemove { toast } => {
                self.remove_toast(toast);
                Vec::new()
            }
        }
    }

    fn apply_reply(&mut self, origin: Origin, outcome: Outcome) -> Vec<Command> {
        match origin {
            Origin::Form { form } => self.on_form_reply(&form, outcome),
            Origin::Schedule { form } => self.on_schedule_reply(&form, outcome),
            Origin::Match {
                job_id,
                candidate_id,
            } => {
                self.on_match_reply(&job_id, &candidate_id, outcome);
                Vec::new()
            }
            Origin::Options(source) => {
                self.on_options_reply(source, outcome);
                Vec::new()
            }
            Origin::Interviews => {
                self.on_interviews_reply(outcome);
                Vec::new()
            }
            Origin::Shortlist { job_id } => {
                self.on_shortlist_reply(&job_id, outcome);
                Vec::new()
            }
        }
    }
}
