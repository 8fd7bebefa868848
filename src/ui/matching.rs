// src/ui/matching.rs
//! Match calculator: validates the two selections, asks the backend for a
//! score and renders the result panel.

use tracing::{error, info, trace, warn};

use super::controller::UiController;
use super::events::{Command, Origin, Outcome};
use super::templates;
use crate::core::{ApiPayload, ApiRequest};
use crate::utils::schedule_interview_url;

const MISSING_SELECTION: &str = "Please select both a job description and a candidate.";
const MATCH_ERROR: &str = "An error occurred while calculating the match score.";
const MATCH_NETWORK_ERROR: &str = "Network error. Please try again.";

/// Classification of a match score, inclusive lower bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreTier::High
        } else if score >= 60.0 {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreTier::High => "high",
            ScoreTier::Medium => "medium",
            ScoreTier::Low => "low",
        }
    }

    pub fn score_class(self) -> &'static str {
        match self {
            ScoreTier::High => "match-score-high",
            ScoreTier::Medium => "match-score-medium",
            ScoreTier::Low => "match-score-low",
        }
    }

    pub fn progress_class(self) -> &'static str {
        match self {
            ScoreTier::High => "match-progress-bar-high",
            ScoreTier::Medium => "match-progress-bar-medium",
            ScoreTier::Low => "match-progress-bar-low",
        }
    }
}

impl UiController {
    pub(crate) fn submit_match(&mut self, form: &str) -> Vec<Command> {
        let job_id = self
            .page
            .form_select_value(form, "job_id")
            .unwrap_or_default()
            .to_string();
        let candidate_id = self
            .page
            .form_select_value(form, "candidate_id")
            .unwrap_or_default()
            .to_string();

        if job_id.is_empty() || candidate_id.is_empty() {
            return vec![Command::Alert {
                message: MISSING_SELECTION.to_string(),
            }];
        }

        let Some(container) = self.page.match_result.as_mut() else {
            trace!("No match result container, skipping match request");
            return Vec::new();
        };
        container.set_html(templates::match_loading());

        info!("Calculating match for job {} and candidate {}", job_id, candidate_id);
        vec![Command::Fetch {
            origin: Origin::Match {
                job_id: job_id.clone(),
                candidate_id: candidate_id.clone(),
            },
            request: ApiRequest::Match {
                job_id,
                candidate_id,
            },
        }]
    }

    pub(crate) fn on_match_reply(&mut self, job_id: &str, candidate_id: &str, outcome: Outcome) {
        let schedule_url =
            schedule_interview_url(&self.config.schedule_page, job_id, candidate_id);

        let Some(container) = self.page.match_result.as_mut() else {
            return;
        };

        let html = match outcome {
            Outcome::Accepted(ApiPayload::Match(result)) => {
                info!(
                    "Match score {} ({}) for job {} and candidate {}",
                    result.match_score,
                    ScoreTier::from_score(result.match_score).as_str(),
                    job_id,
                    candidate_id
                );
                templates::match_panel(&result, job_id, candidate_id, &schedule_url)
            }
            Outcome::Accepted(other) => {
                error!("Unexpected payload for match request: {:?}", other);
                templates::error_alert(MATCH_ERROR)
            }
            Outcome::Rejected { detail } => {
                warn!("Match request rejected: {:?}", detail);
                templates::error_alert(detail.as_deref().unwrap_or(MATCH_ERROR))
            }
            Outcome::Failed { error } => {
                error!("Match request error: {}", error);
                templates::error_alert(MATCH_NETWORK_ERROR)
            }
        };

        container.set_html(html);
    }

    /// Navigate to the scheduling page with both ids pre-filled
    pub(crate) fn schedule_interview_redirect(&self, job_id: &str, candidate_id: &str) -> Command {
        Command::Navigate {
            url: schedule_interview_url(&self.config.schedule_page, job_id, candidate_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;
    use crate::types::MatchResult;
    use crate::ui::page::{Page, SelectOption};
    use crate::ui::UiEvent;

    #[test]
    fn test_score_tiers() {
        assert_eq!(ScoreTier::from_score(85.0), ScoreTier::High);
        assert_eq!(ScoreTier::from_score(80.0), ScoreTier::High);
        assert_eq!(ScoreTier::from_score(79.9), ScoreTier::Medium);
        assert_eq!(ScoreTier::from_score(65.0), ScoreTier::Medium);
        assert_eq!(ScoreTier::from_score(60.0), ScoreTier::Medium);
        assert_eq!(ScoreTier::from_score(40.0), ScoreTier::Low);
        assert_eq!(ScoreTier::High.score_class(), "match-score-high");
        assert_eq!(ScoreTier::Low.progress_class(), "match-progress-bar-low");
    }

    fn controller() -> UiController {
        let mut page = Page::match_page();
        for select in page.selects.iter_mut() {
            select.replace_options(vec![SelectOption::new("3", "Three"), SelectOption::new("7", "Seven")]);
        }
        UiController::new(UiConfig::default(), page)
    }

    fn select_both(controller: &mut UiController) {
        controller.update(UiEvent::SelectChanged {
            select: "job_id".to_string(),
            value: "3".to_string(),
        });
        controller.update(UiEvent::SelectChanged {
            select: "candidate_id".to_string(),
            value: "7".to_string(),
        });
    }

    fn result_html(controller: &UiController) -> &str {
        controller.page().match_result.as_ref().unwrap().html()
    }

    #[test]
    fn test_missing_selection_alerts() {
        let mut controller = controller();
        controller.update(UiEvent::SelectChanged {
            select: "job_id".to_string(),
            value: "3".to_string(),
        });

        let commands = controller.update(UiEvent::FormSubmitted {
            form: Page::MATCH_FORM.to_string(),
        });
        assert_eq!(
            commands,
            vec![Command::Alert {
                message: "Please select both a job description and a candidate.".to_string()
            }]
        );
        assert_eq!(result_html(&controller), "");
    }

    #[test]
    fn test_submit_requests_match() {
        let mut controller = controller();
        select_both(&mut controller);

        let commands = controller.update(UiEvent::FormSubmitted {
            form: Page::MATCH_FORM.to_string(),
        });
        assert!(result_html(&controller).contains("Calculating match score..."));
        assert_eq!(
            commands,
            vec![Command::Fetch {
                origin: Origin::Match {
                    job_id: "3".to_string(),
                    candidate_id: "7".to_string()
                },
                request: ApiRequest::Match {
                    job_id: "3".to_string(),
                    candidate_id: "7".to_string()
                },
            }]
        );
    }

    #[test]
    fn test_submit_without_result_container_sends_nothing() {
        let mut controller = controller();
        controller.page.match_result = None;
        select_both(&mut controller);

        assert!(controller
            .update(UiEvent::FormSubmitted {
                form: Page::MATCH_FORM.to_string()
            })
            .is_empty());
    }

    fn replied(outcome: Outcome) -> UiEvent {
        UiEvent::Replied {
            origin: Origin::Match {
                job_id: "3".to_string(),
                candidate_id: "7".to_string(),
            },
            outcome,
        }
    }

    #[test]
    fn test_reply_renders_panel() {
        let mut controller = controller();
        controller.update(replied(Outcome::Accepted(ApiPayload::Match(MatchResult {
            match_score: 65.0,
            candidate_name: "Ada".to_string(),
            candidate_email: "ada@example.com".to_string(),
            candidate_phone: Some("555-0100".to_string()),
            matched_skills: "Python, SQL,Go".to_string(),
            match_analysis: Some("Strong data background".to_string()),
            job_title: "Engineer".to_string(),
            company: None,
        }))));

        let html = result_html(&controller);
        assert!(html.contains("match-score-medium"));
        assert!(html.contains("match-progress-bar-medium"));
        assert!(html.contains("555-0100"));
        assert!(html.contains("Strong data background"));
        assert!(html.contains("Your Company"));
        assert!(html.contains("schedule-interview.html?job_id=3&amp;candidate_id=7"));
    }

    #[test]
    fn test_reply_errors() {
        let mut controller = controller();
        controller.update(replied(Outcome::Rejected {
            detail: Some("Job or candidate not found".to_string()),
        }));
        assert!(result_html(&controller).contains("Job or candidate not found"));

        controller.update(replied(Outcome::Rejected { detail: None }));
        assert!(result_html(&controller)
            .contains("An error occurred while calculating the match score."));

        controller.update(replied(Outcome::Failed {
            error: "dns error".to_string(),
        }));
        assert!(result_html(&controller).contains("Network error. Please try again."));
    }

    #[test]
    fn test_schedule_interview_click_navigates() {
        let mut controller = controller();
        let commands = controller.update(UiEvent::ScheduleInterviewClicked {
            job_id: "3".to_string(),
            candidate_id: "7".to_string(),
        });
        assert_eq!(
            commands,
            vec![Command::Navigate {
                url: "schedule-interview.html?job_id=3&candidate_id=7".to_string()
            }]
        );
    }
}
