// src/ui/forms.rs
//! Generic API forms and the interview scheduler.

use tracing::{debug, error, info, trace, warn};

use super::controller::UiController;
use super::events::{Command, Origin, Outcome, Timer};
use super::page::FormAction;
use super::templates;
use crate::core::backend::SCHEDULE_INTERVIEW_ENDPOINT;
use crate::core::{ApiPayload, ApiRequest};
use crate::types::FormPayload;

const PROCESSING: &str = "Processing request...";
const SUBMIT_SUCCESS: &str = "Success! Your request has been processed.";
const SUBMIT_ERROR: &str = "An error occurred. Please try again.";
const SUBMIT_NETWORK_ERROR: &str = "Network error. Please check your connection and try again.";

const SCHEDULING: &str = "Scheduling interview...";
const SCHEDULE_SUCCESS: &str = "Interview scheduled successfully!";
const SCHEDULE_ERROR: &str = "An error occurred while scheduling the interview.";

impl UiController {
    pub(crate) fn field_input(&mut self, form: &str, name: &str, value: String) {
        let field = self
            .page
            .form_mut(form)
            .and_then(|f| f.fields.iter_mut().find(|field| field.name == name));

        match field {
            Some(field) => field.value = value,
            None => trace!("No field {} in form {}", name, form),
        }
    }

    /// Intercept a form submission; nothing is sent for unknown forms
    pub(crate) fn submit_form(&mut self, form: &str) -> Vec<Command> {
        let Some(action) = self.page.form(form).map(|f| f.action.clone()) else {
            trace!("Submit for unknown form {}", form);
            return Vec::new();
        };

        match action {
            FormAction::Api { endpoint, .. } => self.submit_api_form(form, endpoint),
            FormAction::Match => self.submit_match(form),
            FormAction::ScheduleInterview => self.submit_schedule(form),
        }
    }

    fn submit_api_form(&mut self, form: &str, endpoint: String) -> Vec<Command> {
        if let Some(area) = self.page.message_area_for(form) {
            area.set_html(templates::loading(PROCESSING));
        }

        let payload = self.form_payload(form);
        info!("Submitting form {} to {}", form, endpoint);

        vec![Command::Fetch {
            origin: Origin::Form {
                form: form.to_string(),
            },
            request: ApiRequest::Submit { endpoint, payload },
        }]
    }

    fn submit_schedule(&mut self, form: &str) -> Vec<Command> {
        if let Some(area) = self.page.alert_container.as_mut() {
            area.set_html(templates::loading(SCHEDULING));
        }

        let payload = self.form_payload(form);
        info!("Scheduling interview from form {}", form);

        vec![Command::Fetch {
            origin: Origin::Schedule {
                form: form.to_string(),
            },
            request: ApiRequest::Submit {
                endpoint: SCHEDULE_INTERVIEW_ENDPOINT.to_string(),
                payload,
            },
        }]
    }

    /// Text fields, then selects, then files, as a browser packages them
    pub(crate) fn form_payload(&self, form: &str) -> FormPayload {
        let mut payload = FormPayload::new();

        if let Some(f) = self.page.form(form) {
            for field in &f.fields {
                payload = payload.text(&field.name, &field.value);
            }
        }

        for select in self
            .page
            .selects
            .iter()
            .filter(|s| s.form.as_deref() == Some(form))
        {
            if let Some(name) = &select.name {
                payload = payload.text(name, &select.value);
            }
        }

        for area in self
            .page
            .upload_areas
            .iter()
            .filter(|a| a.form.as_deref() == Some(form))
        {
            if let Some(input) = &area.input_name {
                for file in area.files.iter() {
                    payload = payload.file(input, file.clone());
                }
            }
        }

        payload
    }

    /// Restore initial values, placeholders and empty file inputs
    pub(crate) fn reset_form(&mut self, form: &str) {
        if let Some(f) = self.page.form_mut(form) {
            for field in f.fields.iter_mut() {
                field.value = field.initial.clone();
            }
        }

        for select in self
            .page
            .selects
            .iter_mut()
            .filter(|s| s.form.as_deref() == Some(form))
        {
            select.reset();
        }

        self.reset_uploads(form);
    }

    pub(crate) fn on_form_reply(&mut self, form: &str, outcome: Outcome) -> Vec<Command> {
        let redirect = match self.page.form(form).map(|f| &f.action) {
            Some(FormAction::Api { redirect, .. }) => redirect.clone(),
            _ => None,
        };

        match outcome {
            Outcome::Accepted(payload) => {
                let message = match payload {
                    ApiPayload::Ack(ack) => ack.message,
                    _ => None,
                };
                debug!("Form {} accepted", form);

                if let Some(area) = self.page.message_area_for(form) {
                    area.set_html(templates::success_alert(
                        message.as_deref().unwrap_or(SUBMIT_SUCCESS),
                    ));
                }
                self.reset_form(form);

                match redirect {
                    Some(url) => vec![Command::Schedule {
                        after: self.config.timings.redirect_delay(),
                        timer: Timer::Redirect { url },
                    }],
                    None => Vec::new(),
                }
            }
            Outcome::Rejected { detail } => {
                warn!("Form {} rejected: {:?}", form, detail);
                if let Some(area) = self.page.message_area_for(form) {
                    area.set_html(templates::error_alert(
                        detail.as_deref().unwrap_or(SUBMIT_ERROR),
                    ));
                }
                Vec::new()
            }
            Outcome::Failed { error } => {
                error!("Form submission error: {}", error);
                if let Some(area) = self.page.message_area_for(form) {
                    area.set_html(templates::error_alert(SUBMIT_NETWORK_ERROR));
                }
                Vec::new()
            }
        }
    }

    pub(crate) fn on_schedule_reply(&mut self, form: &str, outcome: Outcome) -> Vec<Command> {
        match outcome {
            Outcome::Accepted(payload) => {
                let message = match payload {
                    ApiPayload::Ack(ack) => ack.message,
                    _ => None,
                };
                info!("Interview scheduled from form {}", form);

                if let Some(area) = self.page.alert_container.as_mut() {
                    area.set_html(templates::success_alert(
                        message.as_deref().unwrap_or(SCHEDULE_SUCCESS),
                    ));
                }
                self.reset_form(form);

                vec![Command::Schedule {
                    after: self.config.timings.reload_delay(),
                    timer: Timer::ReloadInterviews,
                }]
            }
            Outcome::Rejected { detail } => {
                warn!("Interview scheduling rejected: {:?}", detail);
                if let Some(area) = self.page.alert_container.as_mut() {
                    area.set_html(templates::error_alert(
                        detail.as_deref().unwrap_or(SCHEDULE_ERROR),
                    ));
                }
                Vec::new()
            }
            Outcome::Failed { error } => {
                error!("Interview scheduling error: {}", error);
                if let Some(area) = self.page.alert_container.as_mut() {
                    area.set_html(templates::error_alert(SUBMIT_NETWORK_ERROR));
                }
                Vec::new()
            }
        }
    }
}
