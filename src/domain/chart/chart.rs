//! Validated four-pillar chart.

use serde::Serialize;
use std::fmt;

use super::RawChart;
use crate::domain::foundation::{MalformedChartError, PillarRole};
use crate::domain::ganzhi::{Branch, Stem};

/// Number of pillars in every chart.
pub const PILLAR_COUNT: usize = 4;

/// A stem and branch at a fixed role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar {
    pub role: PillarRole,
    pub stem: Stem,
    pub branch: Branch,
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

/// Exactly four pillars in Year, Month, Day, Hour order.
///
/// The Day pillar's stem is the Day Master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Chart {
    pillars: [Pillar; PILLAR_COUNT],
}

impl Chart {
    /// Builds a chart from already-typed pairs in Year..Hour order.
    pub fn from_pairs(pairs: [(Stem, Branch); PILLAR_COUNT]) -> Self {
        let roles = PillarRole::all();
        let pillar = |i: usize| Pillar {
            role: roles[i],
            stem: pairs[i].0,
            branch: pairs[i].1,
        };
        Self {
            pillars: [pillar(0), pillar(1), pillar(2), pillar(3)],
        }
    }

    /// Validates raw input.
    ///
    /// # Errors
    /// Checked in this order, first failure wins:
    /// - pillar count other than four
    /// - a role out of Year, Month, Day, Hour order
    /// - an unknown stem or branch symbol, scanning Year to Hour
    pub fn from_raw(raw: &RawChart) -> Result<Self, MalformedChartError> {
        if raw.pillars.len() != PILLAR_COUNT {
            return Err(MalformedChartError::pillar_count(raw.pillars.len()));
        }

        for (position, (pillar, expected)) in raw.pillars.iter().zip(PillarRole::all()).enumerate()
        {
            if pillar.role != *expected {
                return Err(MalformedChartError::role_order(
                    position,
                    *expected,
                    pillar.role,
                ));
            }
        }

        let parse = |i: usize| -> Result<(Stem, Branch), MalformedChartError> {
            let pillar = &raw.pillars[i];
            Ok((pillar.stem.parse()?, pillar.branch.parse()?))
        };

        Ok(Self::from_pairs([parse(0)?, parse(1)?, parse(2)?, parse(3)?]))
    }

    pub fn pillars(&self) -> &[Pillar; PILLAR_COUNT] {
        &self.pillars
    }

    pub fn pillar(&self, role: PillarRole) -> &Pillar {
        &self.pillars[role.order_index()]
    }

    /// Stem of the Day pillar.
    pub fn day_master(&self) -> Stem {
        self.pillar(PillarRole::Day).stem
    }

    /// Branches in Year..Hour order.
    pub fn branches(&self) -> [Branch; PILLAR_COUNT] {
        self.pillars.map(|p| p.branch)
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [year, month, day, hour] = &self.pillars;
        write!(f, "{} {} {} {}", year, month, day, hour)
    }
}
