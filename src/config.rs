use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::network::DEFAULT_POLL_INTERVAL;
use crate::ui::state::DEFAULT_ACTIVITY_LIMIT;

pub const DEFAULT_CONFIG_PATH: &str = "config/console.json";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
/// Shorter intervals would hammer the node; such values fall back to the default.
pub const MIN_POLL_INTERVAL_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Base URL of the node's HTTP control API.
    pub backend_url: String,
    /// Delay between the gating fetch settling and the next polling cycle.
    pub poll_interval_ms: u64,
    pub activity_log_limit: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
            activity_log_limit: DEFAULT_ACTIVITY_LIMIT,
        }
    }
}

impl ConsoleConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Replaces out-of-range values with their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.poll_interval_ms < MIN_POLL_INTERVAL_MS {
            log::warn!(
                "poll_interval_ms {} is below {MIN_POLL_INTERVAL_MS}; using {}",
                self.poll_interval_ms,
                defaults.poll_interval_ms
            );
            self.poll_interval_ms = defaults.poll_interval_ms;
        }
        if self.backend_url.trim().is_empty() {
            log::warn!("backend_url is empty; using {}", defaults.backend_url);
            self.backend_url = defaults.backend_url;
        }
        if self.activity_log_limit == 0 {
            self.activity_log_limit = defaults.activity_log_limit;
        }
        self
    }
}

pub fn load_config(path: &str) -> ConsoleConfig {
    let path = Path::new(path);
    let config = match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<ConsoleConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                ConsoleConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            ConsoleConfig::default()
        }
    };
    config.sanitized()
}

pub fn save_config(path: &str, config: &ConsoleConfig) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
}
