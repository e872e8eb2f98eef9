//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

use super::PillarRole;

/// A chart that cannot be annotated.
///
/// Fatal for the call: no partial annotation or report is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedChartError {
    #[error("Chart must have exactly 4 pillars, got {actual}")]
    PillarCount { actual: usize },

    #[error("Pillar {position} must be the {expected} pillar, got {actual}")]
    RoleOrder {
        position: usize,
        expected: PillarRole,
        actual: PillarRole,
    },

    #[error("Unknown heavenly stem '{symbol}'")]
    UnknownStem { symbol: String },

    #[error("Unknown earthly branch '{symbol}'")]
    UnknownBranch { symbol: String },
}

impl MalformedChartError {
    /// Creates a pillar count error.
    pub fn pillar_count(actual: usize) -> Self {
        MalformedChartError::PillarCount { actual }
    }

    /// Creates a role order error.
    pub fn role_order(position: usize, expected: PillarRole, actual: PillarRole) -> Self {
        MalformedChartError::RoleOrder {
            position,
            expected,
            actual,
        }
    }

    /// Creates an unknown stem error.
    pub fn unknown_stem(symbol: impl Into<String>) -> Self {
        MalformedChartError::UnknownStem {
            symbol: symbol.into(),
        }
    }

    /// Creates an unknown branch error.
    pub fn unknown_branch(symbol: impl Into<String>) -> Self {
        MalformedChartError::UnknownBranch {
            symbol: symbol.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    MalformedChart,
    UnknownSymbol,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::MalformedChart => "MALFORMED_CHART",
            ErrorCode::UnknownSymbol => "UNKNOWN_SYMBOL",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl From<MalformedChartError> for DomainError {
    fn from(err: MalformedChartError) -> Self {
        let message = err.to_string();
        match err {
            MalformedChartError::PillarCount { actual } => {
                DomainError::new(ErrorCode::MalformedChart, message)
                    .with_detail("pillar_count", actual.to_string())
            }
            MalformedChartError::RoleOrder {
                position, actual, ..
            } => DomainError::new(ErrorCode::MalformedChart, message)
                .with_detail("position", position.to_string())
                .with_detail("role", actual.to_string()),
            MalformedChartError::UnknownStem { symbol } => {
                DomainError::new(ErrorCode::UnknownSymbol, message).with_detail("stem", symbol)
            }
            MalformedChartError::UnknownBranch { symbol } => {
                DomainError::new(ErrorCode::UnknownSymbol, message).with_detail("branch", symbol)
            }
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
