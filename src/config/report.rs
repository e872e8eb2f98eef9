//! Report rendering configuration

use serde::Deserialize;

use crate::domain::analysis::ReportOptions;

/// Report configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Include the method lines ("做什么/怎么做") in each stage
    #[serde(default = "default_include_methodology")]
    pub include_methodology: bool,
}

fn default_include_methodology() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_methodology: default_include_methodology(),
        }
    }
}

impl ReportConfig {
    pub fn options(&self) -> ReportOptions {
        ReportOptions {
            include_methodology: self.include_methodology,
        }
    }
}
