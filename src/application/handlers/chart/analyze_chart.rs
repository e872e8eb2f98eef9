//! AnalyzeChartHandler - Query handler running the full five-stage analysis.

use serde::Deserialize;
use tracing::debug;

use crate::domain::analysis::{AnalysisPipeline, AnalysisReport, ReportOptions};
use crate::domain::chart::RawChart;
use crate::domain::foundation::DomainError;

/// Query to analyze a named chart.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeChartQuery {
    /// Label for the report; never used in computation.
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub chart: RawChart,
}

/// Result of a full analysis.
pub type AnalyzeChartResult = AnalysisReport;

/// Handler for the full analysis report.
#[derive(Debug, Default)]
pub struct AnalyzeChartHandler {
    pipeline: AnalysisPipeline,
}

impl AnalyzeChartHandler {
    pub fn new(options: ReportOptions) -> Self {
        Self {
            pipeline: AnalysisPipeline::new(options),
        }
    }

    pub fn handle(&self, query: AnalyzeChartQuery) -> Result<AnalyzeChartResult, DomainError> {
        let report = self.pipeline.run(&query.name, &query.chart)?;

        debug!(
            name = %report.name,
            stages = report.stages.len(),
            "Analyzed chart"
        );

        Ok(report)
    }
}
