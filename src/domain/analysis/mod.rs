//! Analysis Module - Pure domain services over an annotated chart.
//!
//! # Components
//!
//! - `VitalityAssessor` - Command, Root, Allies, Support and the strength verdict
//! - `FavorableElementResolver` - Favorable/unfavorable elements from strength
//! - `ElementTally` - Element counts over stems and branches
//! - `PatternAnalyzer` - Ten-God combinations, branch clashes, palace hints
//! - `AnalysisPipeline` - The five report stages in fixed order
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. Stages pass typed
//! results to one another; no stage parses text another stage produced.

mod favorable;
mod pattern;
mod pipeline;
mod report;
mod tally;
mod vitality;

pub use favorable::{ElementPreference, ElementRole, FavorableElementResolver, GodGroup};
pub use pattern::{
    AuspiciousPattern, BranchClash, InauspiciousPattern, MonthFocus, PalaceHint, PatternAnalyzer,
    PatternReport,
};
pub use pipeline::{
    AnalysisPipeline, ReportOptions, STAGE_ESTABLISH, STAGE_FAVORABLE, STAGE_GUIDANCE,
    STAGE_PATTERN, STAGE_VITALITY,
};
pub use report::{AnalysisReport, AnalysisStage};
pub use tally::ElementTally;
pub use vitality::{
    BackingScore, CommandScore, Grade, RootScore, Strength, VitalityAssessor, VitalityScore,
};
