//! Foundation module - Shared domain primitives.
//!
//! Contains the pillar roles and error types that every other
//! part of the chart engine speaks in.

mod errors;
mod pillar_role;

pub use errors::{DomainError, ErrorCode, MalformedChartError};
pub use pillar_role::PillarRole;
