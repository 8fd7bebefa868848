// src/runtime.rs
//! Event loop driving a `UiController`.
//!
//! Events are handled one at a time. Requests and timers run as spawned tasks
//! that each report back with exactly one event; they are never cancelled.

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::core::{perform, Backend, Reply};
use crate::ui::{Command, Outcome, UiController, UiEvent};

/// The shell embedding the controller: a browser window, or the console.
pub trait Host: Send {
    fn navigate(&mut self, url: &str);

    /// Blocking modal alert
    fn alert(&mut self, message: &str);

    fn open_file_picker(&mut self, area: &str);
}

/// Host that logs and records what the page asked for
#[derive(Debug, Default)]
pub struct ConsoleHost {
    pub navigations: Vec<String>,
    pub alerts: Vec<String>,
    pub file_pickers: Vec<String>,
}

impl Host for ConsoleHost {
    fn navigate(&mut self, url: &str) {
        info!("Navigating to {}", url);
        self.navigations.push(url.to_string());
    }

    fn alert(&mut self, message: &str) {
        warn!("Alert: {}", message);
        self.alerts.push(message.to_string());
    }

    fn open_file_picker(&mut self, area: &str) {
        debug!("File picker requested for {}", area);
        self.file_pickers.push(area.to_string());
    }
}

pub struct Runtime<B: Backend, H: Host> {
    controller: UiController,
    backend: Arc<B>,
    host: H,
    queue: VecDeque<UiEvent>,
    tx: mpsc::UnboundedSender<UiEvent>,
    rx: mpsc::UnboundedReceiver<UiEvent>,
    in_flight: usize,
}

impl<B: Backend, H: Host> Runtime<B, H> {
    pub fn new(controller: UiController, backend: Arc<B>, host: H) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            controller,
            backend,
            host,
            queue: VecDeque::new(),
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub fn controller(&self) -> &UiController {
        &self.controller
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Queue a page event; it is handled by the next `run_until_idle`
    pub fn dispatch(&mut self, event: UiEvent) {
        self.queue.push_back(event);
    }

    /// Handle queued events and everything they set in motion, until no
    /// request or timer is left pending
    pub async fn run_until_idle(&mut self) {
        loop {
            while let Some(event) = self.queue.pop_front() {
                self.step(event);
            }

            if self.in_flight == 0 {
                break;
            }

            match self.rx.recv().await {
                Some(event) => {
                    self.in_flight -= 1;
                    self.step(event);
                }
                None => break,
            }
        }
    }

    fn step(&mut self, event: UiEvent) {
        for command in self.controller.update(event) {
            self.execute(command);
        }
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::Fetch { origin, request } => {
                let backend = Arc::clone(&self.backend);
                let tx = self.tx.clone();
                let label = request.describe();
                debug!("Dispatching {}", label);

                self.in_flight += 1;
                tokio::spawn(async move {
                    let outcome = match perform(&*backend, request).await {
                        Ok(Reply::Accepted(payload)) => Outcome::Accepted(payload),
                        Ok(Reply::Rejected { detail }) => Outcome::Rejected { detail },
                        Err(e) => {
                            error!("{} failed: {:#}", label, e);
                            Outcome::Failed {
                                error: format!("{:#}", e),
                            }
                        }
                    };
                    let _ = tx.send(UiEvent::Replied { origin, outcome });
                });
            }
            Command::Schedule { after, timer } => {
                let tx = self.tx.clone();

                self.in_flight += 1;
                tokio::spawn(async move {
                    tokio::time::sleep(after).await;
                    let _ = tx.send(UiEvent::TimerFired(timer));
                });
            }
            Command::Navigate { url } => self.host.navigate(&url),
            Command::Alert { message } => self.host.alert(&message),
            Command::OpenFilePicker { area } => self.host.open_file_picker(&area),
        }
    }
}
