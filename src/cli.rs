// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::UiConfig;
use crate::core::ApiClient;
use crate::runtime::{ConsoleHost, Runtime};
use crate::types::SelectedFile;
use crate::ui::page::{Form, Page, Select, TextField, UploadArea};
use crate::ui::{templates, UiController, UiEvent};
use crate::utils::format_file_size;

#[derive(Parser)]
#[command(name = "recruitai-ui")]
#[command(about = "Drive the RecruitAI pages against a backend from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: UiCommand,

    /// YAML configuration with `local` and `production` sections
    #[arg(long, default_value = "config.yaml")]
    pub config: PathBuf,

    /// Overrides the configured backend base URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Log as JSON lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum UiCommand {
    /// Populate the job dropdown
    Jobs,
    /// Populate the candidate dropdown
    Candidates,
    /// Calculate the match score for a job and a candidate
    Match {
        #[arg(long)]
        job_id: String,
        #[arg(long)]
        candidate_id: String,
    },
    /// Submit a multipart form to an endpoint
    Submit {
        endpoint: String,
        /// Text field, as name=value
        #[arg(long = "field", value_parser = parse_key_value)]
        fields: Vec<(String, String)>,
        /// File input, as name=path; repeat the name for several files
        #[arg(long = "file", value_parser = parse_key_value)]
        files: Vec<(String, String)>,
        /// Page to navigate to after a successful submission
        #[arg(long)]
        redirect: Option<String>,
    },
    /// Schedule an interview
    Schedule {
        #[arg(long)]
        job_id: String,
        #[arg(long)]
        candidate_id: String,
        #[arg(long)]
        date: String,
        #[arg(long)]
        time: String,
    },
    /// List upcoming interviews
    Interviews,
    /// Show the shortlisted candidates of a job
    Shortlist {
        #[arg(long)]
        job_id: String,
    },
    /// Apply URL query parameters to the match page dropdowns
    Preselect {
        #[arg(long)]
        query: String,
    },
    /// Format byte counts as file sizes
    Size { bytes: Vec<u64> },
}

/// Parse a `name=value` argument
pub fn parse_key_value(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected name=value, got '{}'", arg)),
    }
}

pub async fn handle_ui_command(cli: Cli) -> Result<()> {
    let mut config = UiConfig::load(&cli.config)?;
    if let Some(url) = cli.api_url {
        config = config.with_api_base_url(url);
    }
    info!("Backend: {}", config.api_base_url);

    let backend = Arc::new(ApiClient::from_config(&config)?);

    match cli.command {
        UiCommand::Size { bytes } => {
            for size in bytes {
                println!("{}", format_file_size(size));
            }
        }

        UiCommand::Jobs => {
            let page = Page::new().with_select(Select::named("job_id", "Select a job description..."));
            let runtime = load(config, backend, page).await;
            print_selects(runtime.controller().page());
        }

        UiCommand::Candidates => {
            let page = Page::new().with_select(Select::named("candidate_id", "Select a candidate..."));
            let runtime = load(config, backend, page).await;
            print_selects(runtime.controller().page());
        }

        UiCommand::Preselect { query } => {
            let mut runtime = Runtime::new(
                UiController::new(config, Page::match_page()),
                backend,
                ConsoleHost::default(),
            );
            runtime.dispatch(UiEvent::DomContentLoaded);
            runtime.dispatch(UiEvent::WindowLoaded { query });
            runtime.run_until_idle().await;

            for select in &runtime.controller().page().selects {
                println!(
                    "{}={}",
                    select.name.as_deref().unwrap_or_default(),
                    select.value
                );
            }
        }

        UiCommand::Match {
            job_id,
            candidate_id,
        } => {
            let mut runtime = Runtime::new(
                UiController::new(config, Page::match_page()),
                backend,
                ConsoleHost::default(),
            );
            runtime.dispatch(UiEvent::DomContentLoaded);
            runtime.dispatch(UiEvent::WindowLoaded {
                query: ids_query(&job_id, &candidate_id),
            });
            runtime.run_until_idle().await;

            runtime.dispatch(UiEvent::FormSubmitted {
                form: Page::MATCH_FORM.to_string(),
            });
            runtime.run_until_idle().await;

            print_alerts(runtime.host());
            if let Some(result) = &runtime.controller().page().match_result {
                println!("{}", result.html());
            }
        }

        UiCommand::Submit {
            endpoint,
            fields,
            files,
            redirect,
        } => {
            const FORM: &str = "cli-form";

            let mut form = Form::api(FORM, endpoint).with_message_area();
            if let Some(url) = redirect {
                form = form.with_redirect(url);
            }
            for (name, _) in &fields {
                form = form.with_field(TextField::new(name.clone()));
            }

            let mut page = Page::new().with_form(form);
            let mut selections: Vec<(String, Vec<SelectedFile>)> = Vec::new();
            for (input, path) in files {
                let file = SelectedFile::from_path(&PathBuf::from(&path))
                    .await
                    .with_context(|| format!("Failed to load file for {}", input))?;

                match selections.iter_mut().find(|(name, _)| *name == input) {
                    Some((_, list)) => list.push(file),
                    None => {
                        page = page.with_upload_area(
                            UploadArea::new(upload_area_id(&input), input.clone()).in_form(FORM),
                        );
                        selections.push((input, vec![file]));
                    }
                }
            }

            let mut runtime = Runtime::new(
                UiController::new(config, page),
                backend,
                ConsoleHost::default(),
            );
            for (name, value) in fields {
                runtime.dispatch(UiEvent::FieldInput {
                    form: FORM.to_string(),
                    name,
                    value,
                });
            }
            for (input, files) in selections {
                debug!("{} file(s) selected for {}", files.len(), input);
                runtime.dispatch(UiEvent::FilesChanged {
                    area: upload_area_id(&input),
                    files,
                });
            }
            runtime.dispatch(UiEvent::FormSubmitted {
                form: FORM.to_string(),
            });
            runtime.run_until_idle().await;

            if let Some(area) = runtime
                .controller()
                .page()
                .form(FORM)
                .and_then(|f| f.message_area.as_ref())
            {
                println!("{}", area.html());
            }
            for url in &runtime.host().navigations {
                println!("Redirected to {}", url);
            }
        }

        UiCommand::Schedule {
            job_id,
            candidate_id,
            date,
            time,
        } => {
            let mut runtime = Runtime::new(
                UiController::new(config, Page::schedule_page()),
                backend,
                ConsoleHost::default(),
            );
            runtime.dispatch(UiEvent::DomContentLoaded);
            runtime.dispatch(UiEvent::WindowLoaded {
                query: ids_query(&job_id, &candidate_id),
            });
            runtime.run_until_idle().await;

            for (name, value) in [("interview_date", date), ("interview_time", time)] {
                runtime.dispatch(UiEvent::FieldInput {
                    form: Page::SCHEDULE_FORM.to_string(),
                    name: name.to_string(),
                    value,
                });
            }
            runtime.dispatch(UiEvent::FormSubmitted {
                form: Page::SCHEDULE_FORM.to_string(),
            });
            runtime.run_until_idle().await;

            let page = runtime.controller().page();
            if let Some(alert) = &page.alert_container {
                println!("{}", alert.html());
            }
            if let Some(panel) = &page.interviews_panel {
                println!("{}", panel.html());
            }
        }

        UiCommand::Interviews => {
            let runtime = load(config, backend, Page::new().with_interviews_panel()).await;
            if let Some(panel) = &runtime.controller().page().interviews_panel {
                println!("{}", panel.html());
            }
        }

        UiCommand::Shortlist { job_id } => {
            let mut runtime = Runtime::new(
                UiController::new(config, Page::shortlist_page()),
                backend,
                ConsoleHost::default(),
            );
            runtime.dispatch(UiEvent::DomContentLoaded);
            runtime.run_until_idle().await;

            runtime.dispatch(UiEvent::SelectChanged {
                select: Page::SHORTLIST_SELECT.to_string(),
                value: job_id.clone(),
            });
            runtime.run_until_idle().await;

            let page = runtime.controller().page();
            match page.select(Page::SHORTLIST_SELECT) {
                Some(select) if select.value == job_id => {
                    if let Some(panel) = &page.shortlist_panel {
                        println!("{}", panel.html());
                    }
                }
                _ => anyhow::bail!("Unknown job: {}", job_id),
            }
        }
    }

    Ok(())
}

/// Run the page's load handlers to completion
async fn load(
    config: UiConfig,
    backend: Arc<ApiClient>,
    page: Page,
) -> Runtime<ApiClient, ConsoleHost> {
    let mut runtime = Runtime::new(UiController::new(config, page), backend, ConsoleHost::default());
    runtime.dispatch(UiEvent::DomContentLoaded);
    runtime.run_until_idle().await;
    runtime
}

fn ids_query(job_id: &str, candidate_id: &str) -> String {
    format!(
        "?job_id={}&candidate_id={}",
        urlencoding::encode(job_id),
        urlencoding::encode(candidate_id)
    )
}

fn upload_area_id(input: &str) -> String {
    format!("{}-area", input)
}

fn print_selects(page: &Page) {
    for select in &page.selects {
        println!("{}", templates::select(select));
    }
}

fn print_alerts(host: &ConsoleHost) {
    for message in &host.alerts {
        println!("{}", message);
    }
}
