//! Settings data model.

use crate::fetch::RetryPolicy;
use crate::template::MatchPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Template used when neither the settings file nor the command line names one.
pub const DEFAULT_TEMPLATE: &str =
    "https://raw.githubusercontent.com/uafgeotools/mtuq/master/examples/GridSearch.FullMomentTensor.py";

/// Settings for a generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Template locations (local paths or URLs) rendered for every event.
    pub templates: Vec<String>,

    /// Remote fetch behavior.
    pub fetch: FetchSettings,

    /// Whether a rule rewrites only its first matching line or all of them.
    pub match_policy: MatchPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            templates: default_templates(),
            fetch: FetchSettings::default(),
            match_policy: MatchPolicy::default(),
        }
    }
}

fn default_templates() -> Vec<String> {
    vec![DEFAULT_TEMPLATE.to_string()]
}

/// Timeouts and retry limits for remote templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    /// Retries after the first failed attempt.
    pub max_retries: u32,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Delay before the first retry, doubled on each subsequent retry.
    pub initial_backoff_ms: u64,

    /// Upper bound on the retry delay.
    pub max_backoff_ms: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            max_retries: 3,
            timeout_secs: 30,
            initial_backoff_ms: 500,
            max_backoff_ms: 10_000,
        }
    }
}

impl FetchSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            initial_backoff: Duration::from_millis(self.initial_backoff_ms),
            max_backoff: Duration::from_millis(self.max_backoff_ms),
        }
    }
}
