// src/ui/selects.rs
//! Job and candidate selects: option loading, URL preselection, and the
//! panels that follow a selection (shortlist, upcoming interviews).

use tracing::{debug, error, info, trace, warn};

use super::controller::UiController;
use super::events::{Command, OptionSource, Origin, Outcome};
use super::page::{Page, Select, SelectOption};
use super::templates;
use crate::core::{ApiPayload, ApiRequest};
use crate::utils::query_param;

const SHORTLIST_LOADING: &str = "Loading shortlisted candidates...";
const SHORTLIST_ERROR: &str = "Could not load shortlisted candidates.";
const NETWORK_ERROR: &str = "Network error. Please try again.";

/// Which list feeds a select, if any
fn option_source(select: &Select) -> Option<OptionSource> {
    match (select.name.as_deref(), select.id.as_deref()) {
        (Some("job_id"), _) | (_, Some(Page::SHORTLIST_SELECT)) => Some(OptionSource::Jobs),
        (Some("candidate_id"), _) => Some(OptionSource::Candidates),
        _ => None,
    }
}

impl UiController {
    /// Request the lists behind every job and candidate select on the page
    pub(crate) fn load_selection_options(&mut self) -> Vec<Command> {
        [OptionSource::Jobs, OptionSource::Candidates]
            .into_iter()
            .filter(|source| {
                self.page
                    .selects
                    .iter()
                    .any(|select| option_source(select) == Some(*source))
            })
            .map(|source| Command::Fetch {
                origin: Origin::Options(source),
                request: source.request(),
            })
            .collect()
    }

    pub(crate) fn on_options_reply(&mut self, source: OptionSource, outcome: Outcome) {
        let options: Vec<SelectOption> = match outcome {
            Outcome::Accepted(ApiPayload::Jobs(jobs)) => jobs
                .into_iter()
                .map(|job| SelectOption::new(job.id, job.title))
                .collect(),
            Outcome::Accepted(ApiPayload::Candidates(candidates)) => candidates
                .into_iter()
                .map(|candidate| SelectOption::new(candidate.id, candidate.name))
                .collect(),
            Outcome::Accepted(other) => {
                error!("Unexpected payload for {}: {:?}", source.endpoint(), other);
                return;
            }
            Outcome::Rejected { detail } => {
                debug!("Loading {} rejected: {:?}", source.endpoint(), detail);
                return;
            }
            Outcome::Failed { error } => {
                error!("Error loading {}: {}", source.endpoint(), error);
                return;
            }
        };

        debug!("Loaded {} {}", options.len(), source.endpoint());
        for select in self
            .page
            .selects
            .iter_mut()
            .filter(|select| option_source(select) == Some(source))
        {
            select.replace_options(options.clone());
        }
    }

    /// Preselect `job_id` / `candidate_id` from the location's query string
    pub(crate) fn load_url_params(&mut self, query: &str) {
        for key in ["job_id", "candidate_id"] {
            let Some(value) = query_param(query, key).filter(|v| !v.is_empty()) else {
                continue;
            };

            let Some(select) = self
                .page
                .selects
                .iter_mut()
                .find(|select| select.name.as_deref() == Some(key))
            else {
                continue;
            };

            if !select.set_value(&value) {
                trace!("No {} option {} yet, keeping it for later", key, value);
                select.requested = Some(value);
            }
        }
    }

    pub(crate) fn select_changed(&mut self, key: &str, value: &str) -> Vec<Command> {
        let Some(select) = self.page.select_mut(key) else {
            trace!("No select {}", key);
            return Vec::new();
        };

        if !select.set_value(value) {
            trace!("Select {} has no option {}", key, value);
            return Vec::new();
        }

        if select.id.as_deref() == Some(Page::SHORTLIST_SELECT) && !value.is_empty() {
            return self.load_shortlist(value);
        }
        Vec::new()
    }

    fn load_shortlist(&mut self, job_id: &str) -> Vec<Command> {
        let Some(panel) = self.page.shortlist_panel.as_mut() else {
            return Vec::new();
        };
        panel.set_html(templates::loading(SHORTLIST_LOADING));

        vec![Command::Fetch {
            origin: Origin::Shortlist {
                job_id: job_id.to_string(),
            },
            request: ApiRequest::Shortlisted {
                job_id: job_id.to_string(),
            },
        }]
    }

    pub(crate) fn on_shortlist_reply(&mut self, job_id: &str, outcome: Outcome) {
        let Some(panel) = self.page.shortlist_panel.as_mut() else {
            return;
        };

        let html = match outcome {
            Outcome::Accepted(ApiPayload::Shortlist(shortlist)) => {
                info!(
                    "{} shortlisted candidate(s) for job {}",
                    shortlist.shortlisted.len(),
                    job_id
                );
                templates::shortlist_table(&shortlist)
            }
            Outcome::Accepted(other) => {
                error!("Unexpected payload for shortlist: {:?}", other);
                templates::error_alert(SHORTLIST_ERROR)
            }
            Outcome::Rejected { detail } => {
                warn!("Shortlist for job {} rejected: {:?}", job_id, detail);
                templates::error_alert(detail.as_deref().unwrap_or(SHORTLIST_ERROR))
            }
            Outcome::Failed { error } => {
                error!("Error loading shortlist for job {}: {}", job_id, error);
                templates::error_alert(NETWORK_ERROR)
            }
        };
        panel.set_html(html);
    }

    pub(crate) fn load_upcoming_interviews(&mut self) -> Vec<Command> {
        if self.page.interviews_panel.is_none() {
            trace!("No interviews panel on this page");
            return Vec::new();
        }

        vec![Command::Fetch {
            origin: Origin::Interviews,
            request: ApiRequest::Interviews,
        }]
    }

    pub(crate) fn on_interviews_reply(&mut self, outcome: Outcome) {
        let Some(panel) = self.page.interviews_panel.as_mut() else {
            return;
        };

        match outcome {
            Outcome::Accepted(ApiPayload::Interviews(interviews)) => {
                debug!("Loaded {} interview(s)", interviews.len());
                panel.set_html(templates::interviews_list(&interviews));
            }
            Outcome::Accepted(other) => {
                error!("Unexpected payload for interviews: {:?}", other);
            }
            Outcome::Rejected { detail } => {
                warn!("Loading interviews rejected: {:?}", detail);
            }
            Outcome::Failed { error } => {
                error!("Error loading interviews: {}", error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;
    use crate::types::{Candidate, Interview, Job, Shortlist};
    use crate::ui::UiEvent;

    fn job(id: &str, title: &str) -> Job {
        Job {
            id: id.to_string(),
            title: title.to_string(),
            company: None,
        }
    }

    fn jobs_reply(jobs: Vec<Job>) -> UiEvent {
        UiEvent::Replied {
            origin: Origin::Options(OptionSource::Jobs),
            outcome: Outcome::Accepted(ApiPayload::Jobs(jobs)),
        }
    }

    #[test]
    fn test_load_requests_only_present_lists() {
        let page = Page::new().with_select(Select::named("job_id", "Select..."));
        let mut controller = UiController::new(UiConfig::default(), page);
        assert_eq!(
            controller.load_selection_options(),
            vec![Command::Fetch {
                origin: Origin::Options(OptionSource::Jobs),
                request: ApiRequest::Jobs,
            }]
        );

        let mut controller = UiController::new(UiConfig::default(), Page::match_page());
        assert_eq!(controller.load_selection_options().len(), 2);

        let mut controller = UiController::new(UiConfig::default(), Page::new());
        assert!(controller.load_selection_options().is_empty());
    }

    #[test]
    fn test_population_keeps_placeholder() {
        let mut controller = UiController::new(UiConfig::default(), Page::match_page());
        controller.update(jobs_reply(vec![job("1", "Engineer")]));

        let select = controller.page().select("job_id").unwrap();
        assert_eq!(select.options.len(), 2);
        assert_eq!(select.options[0].text, "Select a job description...");
        assert_eq!(select.options[1], SelectOption::new("1", "Engineer"));

        let candidates = controller.page().select("candidate_id").unwrap();
        assert_eq!(candidates.options.len(), 1);
    }

    #[test]
    fn test_candidates_use_name_as_text() {
        let mut controller = UiController::new(UiConfig::default(), Page::match_page());
        controller.update(UiEvent::Replied {
            origin: Origin::Options(OptionSource::Candidates),
            outcome: Outcome::Accepted(ApiPayload::Candidates(vec![Candidate {
                id: "7".to_string(),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                phone: None,
            }])),
        });

        let select = controller.page().select("candidate_id").unwrap();
        assert_eq!(select.options[1], SelectOption::new("7", "Ada"));
    }

    #[test]
    fn test_shortlist_select_gets_jobs() {
        let mut controller = UiController::new(UiConfig::default(), Page::shortlist_page());
        controller.update(jobs_reply(vec![job("1", "Engineer"), job("2", "Designer")]));
        let select = controller.page().select(Page::SHORTLIST_SELECT).unwrap();
        assert_eq!(select.options.len(), 3);
    }

    #[test]
    fn test_failed_load_leaves_selects() {
        let mut controller = UiController::new(UiConfig::default(), Page::match_page());
        controller.update(jobs_reply(vec![job("1", "Engineer")]));

        controller.update(UiEvent::Replied {
            origin: Origin::Options(OptionSource::Jobs),
            outcome: Outcome::Failed {
                error: "connection reset".to_string(),
            },
        });
        controller.update(UiEvent::Replied {
            origin: Origin::Options(OptionSource::Jobs),
            outcome: Outcome::Rejected { detail: None },
        });

        assert_eq!(controller.page().select("job_id").unwrap().options.len(), 2);
    }

    #[test]
    fn test_url_params_preselect_existing_options() {
        let mut page = Page::match_page();
        for select in page.selects.iter_mut() {
            select.replace_options(vec![SelectOption::new("3", "Three"), SelectOption::new("7", "Seven")]);
        }
        let mut controller = UiController::new(UiConfig::default(), page);

        controller.update(UiEvent::WindowLoaded {
            query: "?job_id=3&candidate_id=7".to_string(),
        });

        assert_eq!(controller.page().select("job_id").unwrap().value, "3");
        assert_eq!(controller.page().select("candidate_id").unwrap().value, "7");
    }

    #[test]
    fn test_url_params_without_options_have_no_visible_effect() {
        let mut controller = UiController::new(UiConfig::default(), Page::match_page());
        let commands = controller.update(UiEvent::WindowLoaded {
            query: "?job_id=3&candidate_id=7".to_string(),
        });

        assert!(commands.is_empty());
        assert_eq!(controller.page().select("job_id").unwrap().value, "");
        assert_eq!(controller.page().select("candidate_id").unwrap().value, "");
    }

    #[test]
    fn test_url_params_apply_once_options_arrive() {
        let mut controller = UiController::new(UiConfig::default(), Page::match_page());
        controller.update(UiEvent::WindowLoaded {
            query: "?job_id=3".to_string(),
        });
        controller.update(jobs_reply(vec![job("3", "Engineer")]));

        assert_eq!(controller.page().select("job_id").unwrap().value, "3");
    }

    #[test]
    fn test_shortlist_selection_loads_panel() {
        let mut controller = UiController::new(UiConfig::default(), Page::shortlist_page());
        controller.update(jobs_reply(vec![job("1", "Engineer")]));

        let commands = controller.update(UiEvent::SelectChanged {
            select: Page::SHORTLIST_SELECT.to_string(),
            value: "1".to_string(),
        });
        assert_eq!(
            commands,
            vec![Command::Fetch {
                origin: Origin::Shortlist {
                    job_id: "1".to_string()
                },
                request: ApiRequest::Shortlisted {
                    job_id: "1".to_string()
                },
            }]
        );
        let panel = controller.page().shortlist_panel.as_ref().unwrap().html().to_string();
        assert!(panel.contains("Loading shortlisted candidates..."));

        controller.update(UiEvent::Replied {
            origin: Origin::Shortlist {
                job_id: "1".to_string(),
            },
            outcome: Outcome::Accepted(ApiPayload::Shortlist(Shortlist {
                job: job("1", "Engineer"),
                shortlisted: Vec::new(),
            })),
        });
        let panel = controller.page().shortlist_panel.as_ref().unwrap().html();
        assert!(panel.contains("No shortlisted candidates for Engineer yet."));
    }

    #[test]
    fn test_shortlist_errors() {
        let mut controller = UiController::new(UiConfig::default(), Page::shortlist_page());
        let reply = |outcome| UiEvent::Replied {
            origin: Origin::Shortlist {
                job_id: "1".to_string(),
            },
            outcome,
        };
        let panel = |controller: &UiController| {
            controller.page().shortlist_panel.as_ref().unwrap().html().to_string()
        };

        controller.update(reply(Outcome::Rejected {
            detail: Some("Job not found".to_string()),
        }));
        assert!(panel(&controller).contains("Job not found"));
        assert!(panel(&controller).contains("alert-error"));

        controller.update(reply(Outcome::Rejected { detail: None }));
        assert!(panel(&controller).contains("Could not load shortlisted candidates."));

        controller.update(reply(Outcome::Failed {
            error: "connection reset".to_string(),
        }));
        assert!(panel(&controller).contains("Network error. Please try again."));
        assert!(!panel(&controller).contains("connection reset"));
    }

    #[test]
    fn test_shortlist_placeholder_does_not_fetch() {
        let mut controller = UiController::new(UiConfig::default(), Page::shortlist_page());
        assert!(controller
            .update(UiEvent::SelectChanged {
                select: Page::SHORTLIST_SELECT.to_string(),
                value: String::new(),
            })
            .is_empty());
    }

    #[test]
    fn test_interviews_reply_renders_and_failures_keep_panel() {
        let mut controller = UiController::new(UiConfig::default(), Page::schedule_page());
        controller.update(UiEvent::Replied {
            origin: Origin::Interviews,
            outcome: Outcome::Accepted(ApiPayload::Interviews(vec![Interview {
                id: "1".to_string(),
                job_id: "3".to_string(),
                candidate_id: "7".to_string(),
                scheduled_time: "2026-10-20 10:00".to_string(),
                job_title: "Engineer".to_string(),
                candidate_name: "Ada".to_string(),
                candidate_email: "ada@example.com".to_string(),
            }])),
        });
        let before = controller.page().interviews_panel.as_ref().unwrap().html().to_string();
        assert!(before.contains("Ada"));

        controller.update(UiEvent::Replied {
            origin: Origin::Interviews,
            outcome: Outcome::Failed {
                error: "timeout".to_string(),
            },
        });
        assert_eq!(controller.page().interviews_panel.as_ref().unwrap().html(), before);
    }
}
