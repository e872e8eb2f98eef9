//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations. Every entry point is a
//! read-only query; the engine has no commands and holds no state.

pub mod handlers;

pub use handlers::{
    AnalyzeChartHandler, AnalyzeChartQuery, AnnotateChartHandler, AnnotateChartQuery,
    GetFavorableElementsHandler, GetFavorableElementsQuery, GetTenGodsHandler, GetTenGodsQuery,
};
