//! AnnotateChartHandler - Query handler returning the annotated chart.

use serde::Deserialize;
use tracing::debug;

use crate::domain::chart::{AnnotatedChart, ChartAssembler, RawChart};
use crate::domain::foundation::DomainError;

/// Query to annotate a chart.
#[derive(Debug, Clone, Deserialize)]
pub struct AnnotateChartQuery {
    #[serde(flatten)]
    pub chart: RawChart,
}

/// Result of a successful annotation.
pub type AnnotateChartResult = AnnotatedChart;

/// Handler for per-pillar chart annotation.
#[derive(Debug, Default)]
pub struct AnnotateChartHandler;

impl AnnotateChartHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: AnnotateChartQuery) -> Result<AnnotateChartResult, DomainError> {
        let chart = ChartAssembler::assemble(&query.chart)?;

        debug!(
            day_master = %chart.day_master(),
            stars = chart.activated_stars().len(),
            "Annotated chart"
        );

        Ok(chart)
    }
}
