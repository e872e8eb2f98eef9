//! Auspicious and inauspicious stars (神煞) keyed by Day Master.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Branch, Stem};

/// Stars activated by a branch relative to the Day Master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Star {
    HeavenlyNoble,
    SupremeNoble,
    AcademicNoble,
    General,
    Canopy,
    PeachBlossom,
    TravellingHorse,
    Calamity,
}

impl Star {
    /// Returns all stars in scan order.
    pub fn all() -> &'static [Star] {
        &[
            Star::HeavenlyNoble,
            Star::SupremeNoble,
            Star::AcademicNoble,
            Star::General,
            Star::Canopy,
            Star::PeachBlossom,
            Star::TravellingHorse,
            Star::Calamity,
        ]
    }

    /// Returns the Chinese star name.
    pub fn label(&self) -> &'static str {
        match self {
            Star::HeavenlyNoble => "天乙贵人",
            Star::SupremeNoble => "太极贵人",
            Star::AcademicNoble => "文昌贵人",
            Star::General => "将星",
            Star::Canopy => "华盖",
            Star::PeachBlossom => "咸池",
            Star::TravellingHorse => "驿马",
            Star::Calamity => "灾煞",
        }
    }

    /// Branches that activate this star for the given Day Master.
    pub fn triggers(&self, day_master: Stem) -> &'static [Branch] {
        use Branch::*;
        use Stem::*;

        match (self, day_master) {
            (Star::HeavenlyNoble, Jia | Stem::Wu | Geng) => &[Chou, Wei],
            (Star::HeavenlyNoble, Yi | Ji) => &[Zi, Shen],
            (Star::HeavenlyNoble, Bing | Ding) => &[Hai, You],
            (Star::HeavenlyNoble, Xin) => &[Yin, Branch::Wu],
            (Star::HeavenlyNoble, Ren | Gui) => &[Mao, Si],

            (Star::SupremeNoble, Jia | Ding | Ji | Geng | Ren) => &[Zi, Branch::Wu],
            (Star::SupremeNoble, Yi | Bing | Stem::Wu | Xin | Gui) => &[Mao, You],

            (Star::AcademicNoble, Jia) => &[Si],
            (Star::AcademicNoble, Yi) => &[Branch::Wu],
            (Star::AcademicNoble, Bing | Stem::Wu) => &[Shen],
            (Star::AcademicNoble, Ding | Ji) => &[You],
            (Star::AcademicNoble, Geng) => &[Hai],
            (Star::AcademicNoble, Xin) => &[Zi],
            (Star::AcademicNoble, Ren) => &[Yin],
            (Star::AcademicNoble, Gui) => &[Mao],

            (Star::General, Jia | Geng) => &[Zi],
            (Star::General, Yi | Xin) => &[You],
            (Star::General, Bing | Stem::Wu | Ren) => &[Branch::Wu],
            (Star::General, Ding | Ji | Gui) => &[Mao],

            (Star::Canopy, Jia | Geng) => &[Xu],
            (Star::Canopy, Yi | Xin) => &[Wei],
            (Star::Canopy, Bing | Stem::Wu | Ren) => &[Chen],
            (Star::Canopy, Ding | Ji | Gui) => &[Chou],

            (Star::PeachBlossom, Jia | Geng) => &[You],
            (Star::PeachBlossom, Yi | Xin) => &[Branch::Wu],
            (Star::PeachBlossom, Bing | Stem::Wu | Ren) => &[Mao],
            (Star::PeachBlossom, Ding | Ji | Gui) => &[Zi],

            (Star::TravellingHorse, Jia | Geng) => &[Branch::Yin],
            (Star::TravellingHorse, Yi | Xin) => &[Hai],
            (Star::TravellingHorse, Bing | Stem::Wu | Ren) => &[Si],
            (Star::TravellingHorse, Ding | Ji | Gui) => &[Shen],

            (Star::Calamity, Jia | Geng) => &[Branch::Wu],
            (Star::Calamity, Yi | Xin) => &[Mao],
            (Star::Calamity, Bing | Stem::Wu | Ren) => &[Zi],
            (Star::Calamity, Ding | Ji | Gui) => &[You],
        }
    }

    /// Returns true if `branch` activates this star for the Day Master.
    pub fn is_triggered_by(&self, day_master: Stem, branch: Branch) -> bool {
        self.triggers(day_master).contains(&branch)
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A star found in a chart, with the branch that activated it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivatedStar {
    pub star: Star,
    pub branch: Branch,
    /// Index of the pillar (0 = Year .. 3 = Hour) holding the branch.
    pub pillar_index: usize,
}

/// Star lookups over a chart's branches.
pub struct StarTable;

impl StarTable {
    /// Finds every star activated by the given branches (Year to Hour order).
    ///
    /// For each star the first branch that triggers it wins; a later pillar
    /// never overwrites an earlier match. Result follows `Star::all()` order.
    pub fn activated_stars(day_master: Stem, branches: &[Branch]) -> Vec<ActivatedStar> {
        Star::all()
            .iter()
            .filter_map(|star| {
                branches
                    .iter()
                    .position(|branch| star.is_triggered_by(day_master, *branch))
                    .map(|pillar_index| ActivatedStar {
                        star: *star,
                        branch: branches[pillar_index],
                        pillar_index,
                    })
            })
            .collect()
    }

    /// Lists every star a single branch triggers, independent of other pillars.
    pub fn stars_for_branch(day_master: Stem, branch: Branch) -> Vec<Star> {
        Star::all()
            .iter()
            .filter(|star| star.is_triggered_by(day_master, branch))
            .copied()
            .collect()
    }
}
