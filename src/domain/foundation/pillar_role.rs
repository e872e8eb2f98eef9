//! PillarRole enum naming the four positions of a chart.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four pillars, in the only order a chart may hold them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PillarRole {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarRole {
    /// Returns all roles in canonical order.
    pub fn all() -> &'static [PillarRole; 4] {
        &[
            PillarRole::Year,
            PillarRole::Month,
            PillarRole::Day,
            PillarRole::Hour,
        ]
    }

    /// Returns the 0-based index of this role in the canonical order.
    pub fn order_index(&self) -> usize {
        match self {
            PillarRole::Year => 0,
            PillarRole::Month => 1,
            PillarRole::Day => 2,
            PillarRole::Hour => 3,
        }
    }

    /// Returns the Chinese pillar name.
    pub fn label(&self) -> &'static str {
        match self {
            PillarRole::Year => "年柱",
            PillarRole::Month => "月柱",
            PillarRole::Day => "日柱",
            PillarRole::Hour => "时柱",
        }
    }
}

impl fmt::Display for PillarRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PillarRole::Year => "year",
            PillarRole::Month => "month",
            PillarRole::Day => "day",
            PillarRole::Hour => "hour",
        };
        write!(f, "{}", s)
    }
}
