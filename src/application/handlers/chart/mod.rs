//! Chart query handlers.
//!
//! Synchronous read-only handlers over the chart engine, one per entry point.

mod analyze_chart;
mod annotate_chart;
mod get_favorable_elements;
mod get_ten_gods;

pub use analyze_chart::{AnalyzeChartHandler, AnalyzeChartQuery, AnalyzeChartResult};
pub use annotate_chart::{AnnotateChartHandler, AnnotateChartQuery, AnnotateChartResult};
pub use get_favorable_elements::{
    GetFavorableElementsHandler, GetFavorableElementsQuery, GetFavorableElementsResult,
};
pub use get_ten_gods::{GetTenGodsHandler, GetTenGodsQuery, GetTenGodsResult, PillarTenGods};
