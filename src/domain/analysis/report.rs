//! Analysis report: ordered titled stages of text lines.

use serde::{Deserialize, Serialize};

/// One stage of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisStage {
    pub title: String,
    pub lines: Vec<String>,
}

impl AnalysisStage {
    pub fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }
}

/// The full five-stage report, built once per analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Used for labeling only.
    pub name: String,
    pub stages: Vec<AnalysisStage>,
}

impl AnalysisReport {
    pub fn stage(&self, title: &str) -> Option<&AnalysisStage> {
        self.stages.iter().find(|s| s.title == title)
    }
}
