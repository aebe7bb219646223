use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the remote numeral converter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    /// Base URL of the converter service; endpoint paths are resolved against it.
    pub base_url: String,
    pub to_number_path: String,
    pub to_roman_path: String,
    /// Per-request timeout in milliseconds.
    pub request_timeout_ms: u64,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            base_url: "http://roman-num-conv:80/".to_owned(),
            to_number_path: "to-number".to_owned(),
            to_roman_path: "to-roman".to_owned(),
            request_timeout_ms: 10_000,
        }
    }
}

impl ConverterConfig {
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
