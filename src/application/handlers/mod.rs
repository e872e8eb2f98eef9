//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod chart;

pub use chart::{
    AnalyzeChartHandler, AnalyzeChartQuery, AnalyzeChartResult, AnnotateChartHandler,
    AnnotateChartQuery, AnnotateChartResult, GetFavorableElementsHandler,
    GetFavorableElementsQuery, GetFavorableElementsResult, GetTenGodsHandler, GetTenGodsQuery,
    GetTenGodsResult, PillarTenGods,
};
