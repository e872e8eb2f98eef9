//! Domain layer containing the chart engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (pillar roles, errors)
//! - `ganzhi` - Stems, branches and their constant lookup tables
//! - `chart` - Raw, validated and annotated charts
//! - `analysis` - Vitality, favorable elements, patterns and the report pipeline

pub mod analysis;
pub mod chart;
pub mod foundation;
pub mod ganzhi;
