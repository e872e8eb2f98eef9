//! GetTenGodsHandler - Query handler for Ten Gods only.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::chart::{ChartAssembler, HiddenStem, RawChart};
use crate::domain::foundation::{DomainError, PillarRole};
use crate::domain::ganzhi::{Stem, TenGod};

/// Query to classify every stem of a chart.
#[derive(Debug, Clone, Deserialize)]
pub struct GetTenGodsQuery {
    #[serde(flatten)]
    pub chart: RawChart,
}

/// Ten Gods of one pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PillarTenGods {
    pub role: PillarRole,
    pub stem: Stem,
    /// `None` for the Day pillar.
    pub ten_god: Option<TenGod>,
    pub hidden_stems: Vec<HiddenStem>,
}

/// Result of a Ten Gods query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetTenGodsResult {
    pub day_master: Stem,
    pub pillars: Vec<PillarTenGods>,
}

/// Handler for the Ten Gods view of a chart.
#[derive(Debug, Default)]
pub struct GetTenGodsHandler;

impl GetTenGodsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: GetTenGodsQuery) -> Result<GetTenGodsResult, DomainError> {
        let chart = ChartAssembler::assemble(&query.chart)?;

        let pillars = chart
            .pillars()
            .iter()
            .map(|p| PillarTenGods {
                role: p.role,
                stem: p.stem,
                ten_god: p.ten_god,
                hidden_stems: p.hidden_stems.clone(),
            })
            .collect();

        debug!(day_master = %chart.day_master(), "Classified Ten Gods");

        Ok(GetTenGodsResult {
            day_master: chart.day_master(),
            pillars,
        })
    }
}
