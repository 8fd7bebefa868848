// src/config.rs
//! Controller configuration: API location, request timeout and the fixed UI delays.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_SCHEDULE_PAGE: &str = "schedule-interview.html";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// Page the match panel links to for scheduling an interview
    pub schedule_page: String,
    pub timings: Timings,
}

/// Fixed, non-cancelable delays in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub toast_fade_in_ms: u64,
    pub toast_hold_ms: u64,
    pub toast_fade_out_ms: u64,
    pub redirect_delay_ms: u64,
    pub reload_delay_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            toast_fade_in_ms: 10,
            toast_hold_ms: 3000,
            toast_fade_out_ms: 500,
            redirect_delay_ms: 1000,
            reload_delay_ms: 1000,
        }
    }
}

impl Timings {
    pub fn toast_fade_in(&self) -> Duration {
        Duration::from_millis(self.toast_fade_in_ms)
    }

    pub fn toast_hold(&self) -> Duration {
        Duration::from_millis(self.toast_hold_ms)
    }

    pub fn toast_fade_out(&self) -> Duration {
        Duration::from_millis(self.toast_fade_out_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn reload_delay(&self) -> Duration {
        Duration::from_millis(self.reload_delay_ms)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 30,
            schedule_page: DEFAULT_SCHEDULE_PAGE.to_string(),
            timings: Timings::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: Option<UiConfig>,
    production: Option<UiConfig>,
}

impl UiConfig {
    /// Load configuration based on environment
    ///
    /// Defaults are overridden by the matching section of the YAML file when
    /// it exists, then by `RECRUITAI_API_URL`.
    pub fn load(path: &Path) -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Self::from_yaml(&content, &environment)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        } else {
            info!("{} not found, using defaults", path.display());
            Self::default()
        };

        if let Ok(url) = std::env::var("RECRUITAI_API_URL") {
            config = config.with_api_base_url(url);
        }

        Ok(config.normalized())
    }

    fn get_environment() -> String {
        std::env::var("RECRUITAI_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    /// Pick the section for `environment` out of a `local`/`production` YAML document
    pub fn from_yaml(content: &str, environment: &str) -> Result<Self> {
        let file: ConfigFile =
            serde_yaml::from_str(content).context("Invalid configuration document")?;

        let section = match environment {
            "production" => file.production,
            _ => file.local,
        };

        Ok(section.unwrap_or_default().normalized())
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api_base_url.trim_end_matches('/').len();
        self.api_base_url.truncate(trimmed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UiConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.timings.toast_hold(), Duration::from_secs(3));
        assert_eq!(config.timings.redirect_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_from_yaml_selects_environment() {
        let yaml = r#"
local:
  api_base_url: "http://localhost:8000/api/"
production:
  api_base_url: "https://recruit.example.com/api"
  request_timeout_secs: 10
  timings:
    redirect_delay_ms: 250
"#;
        let local = UiConfig::from_yaml(yaml, "local").unwrap();
        assert_eq!(local.api_base_url, "http://localhost:8000/api");
        assert_eq!(local.request_timeout_secs, 30);

        let production = UiConfig::from_yaml(yaml, "production").unwrap();
        assert_eq!(production.api_base_url, "https://recruit.example.com/api");
        assert_eq!(production.request_timeout_secs, 10);
        assert_eq!(production.timings.redirect_delay_ms, 250);
        assert_eq!(production.timings.toast_hold_ms, 3000);
    }

    #[test]
    fn test_missing_section_falls_back_to_defaults() {
        let config = UiConfig::from_yaml("local:\n  schedule_page: book.html\n", "production").unwrap();
        assert_eq!(config, UiConfig::default());
    }

    #[test]
    fn test_with_api_base_url_strips_slash() {
        let config = UiConfig::default().with_api_base_url("http://api.test//");
        assert_eq!(config.api_base_url, "http://api.test");
    }
}
