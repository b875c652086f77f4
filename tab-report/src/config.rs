//! Report configuration types
//!
//! The configuration is intentionally small: the generator takes an input
//! directory and produces one document. Only the presentation knobs live here;
//! the output path is chosen by the caller.

use serde::{Deserialize, Serialize};

/// Configuration for report generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title shown in the page header and the browser tab
    #[serde(default = "default_title")]
    pub title: String,

    /// Whether to include a generated-at line under the title
    #[serde(default = "default_true")]
    pub timestamp: bool,
}

fn default_title() -> String {
    "HTML Report".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            timestamp: default_true(),
        }
    }
}

impl ReportConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the report title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder method: enable or disable the generated-at line
    pub fn with_timestamp(mut self, enabled: bool) -> Self {
        self.timestamp = enabled;
        self
    }
}
