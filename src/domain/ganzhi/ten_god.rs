//! Ten Gods (十神): the relation of any stem to the Day Master.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Stem;

/// One of the ten relationship categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenGod {
    Peer,
    Rival,
    EatingGod,
    HurtingOfficer,
    IndirectWealth,
    DirectWealth,
    IndirectResource,
    DirectResource,
    SevenKillings,
    DirectOfficer,
}

impl TenGod {
    /// Returns all ten gods.
    pub fn all() -> &'static [TenGod] {
        &[
            TenGod::Peer,
            TenGod::Rival,
            TenGod::EatingGod,
            TenGod::HurtingOfficer,
            TenGod::IndirectWealth,
            TenGod::DirectWealth,
            TenGod::IndirectResource,
            TenGod::DirectResource,
            TenGod::SevenKillings,
            TenGod::DirectOfficer,
        ]
    }

    /// Returns the Chinese name.
    pub fn label(&self) -> &'static str {
        match self {
            TenGod::Peer => "比肩",
            TenGod::Rival => "劫财",
            TenGod::EatingGod => "食神",
            TenGod::HurtingOfficer => "伤官",
            TenGod::IndirectWealth => "偏财",
            TenGod::DirectWealth => "正财",
            TenGod::IndirectResource => "偏印",
            TenGod::DirectResource => "正印",
            TenGod::SevenKillings => "七杀",
            TenGod::DirectOfficer => "正官",
        }
    }

    /// 比劫
    pub fn is_companion(&self) -> bool {
        matches!(self, TenGod::Peer | TenGod::Rival)
    }

    /// 印星
    pub fn is_resource(&self) -> bool {
        matches!(self, TenGod::DirectResource | TenGod::IndirectResource)
    }

    /// 财星
    pub fn is_wealth(&self) -> bool {
        matches!(self, TenGod::DirectWealth | TenGod::IndirectWealth)
    }

    /// 食伤
    pub fn is_output(&self) -> bool {
        matches!(self, TenGod::EatingGod | TenGod::HurtingOfficer)
    }

    /// 官杀
    pub fn is_authority(&self) -> bool {
        matches!(self, TenGod::DirectOfficer | TenGod::SevenKillings)
    }
}

impl fmt::Display for TenGod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classifies stems against a Day Master.
pub struct TenGodClassifier;

impl TenGodClassifier {
    /// Classifies `other` relative to `day_master`.
    ///
    /// # Algorithm
    /// The element relation picks the pair of gods (same element, Day Master
    /// generates, Day Master restrains, generates Day Master, restrains Day
    /// Master); matching polarity picks the first of the pair.
    ///
    /// Total over all 100 stem pairs; a stem classified against itself is
    /// always `Peer`.
    pub fn classify(day_master: Stem, other: Stem) -> TenGod {
        if day_master == other {
            return TenGod::Peer;
        }

        let de = day_master.element();
        let oe = other.element();
        let same_polarity = day_master.polarity() == other.polarity();
        let pick = |same: TenGod, different: TenGod| if same_polarity { same } else { different };

        if de == oe {
            pick(TenGod::Peer, TenGod::Rival)
        } else if de.generates() == oe {
            pick(TenGod::EatingGod, TenGod::HurtingOfficer)
        } else if de.restrains() == oe {
            pick(TenGod::IndirectWealth, TenGod::DirectWealth)
        } else if oe.generates() == de {
            pick(TenGod::IndirectResource, TenGod::DirectResource)
        } else {
            // The four relations above and restraint of the Day Master
            // partition every pair of distinct elements.
            pick(TenGod::SevenKillings, TenGod::DirectOfficer)
        }
    }
}
