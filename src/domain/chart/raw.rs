//! Unvalidated chart input as it arrives from an upstream producer.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::PillarRole;

/// One pillar as symbols, before any vocabulary check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPillar {
    pub role: PillarRole,
    pub stem: String,
    pub branch: String,
}

impl RawPillar {
    pub fn new(role: PillarRole, stem: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            role,
            stem: stem.into(),
            branch: branch.into(),
        }
    }
}

/// A chart as received: any number of pillars, any symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawChart {
    pub pillars: Vec<RawPillar>,
}

impl RawChart {
    pub fn new(pillars: Vec<RawPillar>) -> Self {
        Self { pillars }
    }

    /// Builds a chart from `(stem, branch)` symbol pairs, assigning roles in
    /// canonical order.
    ///
    /// Pairs beyond the fourth keep the Hour role so that an oversized chart
    /// still reaches validation and fails on its pillar count.
    pub fn from_symbols(pairs: &[(&str, &str)]) -> Self {
        let pillars = pairs
            .iter()
            .enumerate()
            .map(|(i, (stem, branch))| {
                let role = PillarRole::all()
                    .get(i)
                    .copied()
                    .unwrap_or(PillarRole::Hour);
                RawPillar::new(role, *stem, *branch)
            })
            .collect();
        Self { pillars }
    }
}
