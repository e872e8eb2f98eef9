//! Chart module - From raw pillars to an annotated chart.
//!
//! # Components
//!
//! - `RawChart` - Unvalidated input, symbols as strings
//! - `Chart` - Four validated pillars in role order
//! - `AnnotatedChart` - Per-pillar attributes relative to the Day Master
//! - `ChartAssembler` - Validation plus annotation, a pure function

mod annotated;
mod assembler;
mod chart;
mod raw;

pub use annotated::{AnnotatedChart, AnnotatedPillar, HiddenStem, SelfSeat};
pub use assembler::ChartAssembler;
pub use chart::{Chart, Pillar, PILLAR_COUNT};
pub use raw::{RawChart, RawPillar};
