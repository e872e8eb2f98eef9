//! Annotated chart: per-pillar derived attributes relative to the Day Master.

use serde::Serialize;
use std::fmt;

use super::{Chart, PILLAR_COUNT};
use crate::domain::foundation::PillarRole;
use crate::domain::ganzhi::{
    longevity_stage, void_branches, ActivatedStar, Branch, Element, LongevityStage, NaYin, Star,
    Stem, TenGod,
};

/// Whether a pillar's stem finds support in its own branch (自坐).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "stage", rename_all = "snake_case")]
pub enum SelfSeat {
    /// The stem is among the branch's hidden stems.
    RootedInDominantQi,
    /// The stem's element reaches this stage at the branch.
    SeatedAt(LongevityStage),
}

impl SelfSeat {
    /// Resolves the self-seat of `stem` over `branch`.
    ///
    /// Falls back to the stage of the element's representative Yang stem,
    /// so both stems of an element share one seat at a given branch.
    pub fn of(stem: Stem, branch: Branch) -> Self {
        if branch.hidden_stems().contains(&stem) {
            SelfSeat::RootedInDominantQi
        } else {
            let generic = stem.element().representative_stem();
            SelfSeat::SeatedAt(longevity_stage(generic, branch))
        }
    }
}

impl fmt::Display for SelfSeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelfSeat::RootedInDominantQi => write!(f, "自坐本气"),
            SelfSeat::SeatedAt(stage) => write!(f, "自坐{}", stage),
        }
    }
}

/// A hidden stem with its Ten God relative to the Day Master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HiddenStem {
    pub stem: Stem,
    pub ten_god: TenGod,
}

/// One pillar with every attribute the analysis stages read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedPillar {
    pub role: PillarRole,
    pub stem: Stem,
    pub branch: Branch,
    pub stem_element: Element,
    pub branch_element: Element,
    /// `None` for the Day pillar: the Day Master is "self" (日主).
    pub ten_god: Option<TenGod>,
    /// Dominant qi first.
    pub hidden_stems: Vec<HiddenStem>,
    /// Day Master's life stage at this pillar's branch.
    pub life_stage: LongevityStage,
    pub self_seat: SelfSeat,
    pub is_void: bool,
    /// Stars whose first trigger in the chart is this pillar's branch.
    pub stars: Vec<Star>,
    /// Every star this pillar's branch triggers on its own, even when an
    /// earlier pillar claimed it first.
    pub branch_stars: Vec<Star>,
    pub na_yin: Option<NaYin>,
}

impl AnnotatedPillar {
    /// Stem-level Ten God label, "日主" for the Day pillar.
    pub fn ten_god_label(&self) -> &'static str {
        self.ten_god.map(|god| god.label()).unwrap_or("日主")
    }

    pub fn hidden_ten_gods(&self) -> impl Iterator<Item = TenGod> + '_ {
        self.hidden_stems.iter().map(|h| h.ten_god)
    }
}

/// A chart with its four annotated pillars. Immutable once assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedChart {
    #[serde(skip)]
    chart: Chart,
    day_master: Stem,
    pillars: [AnnotatedPillar; PILLAR_COUNT],
    stars: Vec<ActivatedStar>,
}

impl AnnotatedChart {
    pub(crate) fn new(
        chart: Chart,
        pillars: [AnnotatedPillar; PILLAR_COUNT],
        stars: Vec<ActivatedStar>,
    ) -> Self {
        Self {
            day_master: chart.day_master(),
            chart,
            pillars,
            stars,
        }
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    pub fn day_master(&self) -> Stem {
        self.day_master
    }

    pub fn pillars(&self) -> &[AnnotatedPillar; PILLAR_COUNT] {
        &self.pillars
    }

    pub fn pillar(&self, role: PillarRole) -> &AnnotatedPillar {
        &self.pillars[role.order_index()]
    }

    /// Every star activated anywhere in the chart, first match per star.
    pub fn activated_stars(&self) -> &[ActivatedStar] {
        &self.stars
    }

    /// Void pair of the Day pillar; empty when the pillar is outside the
    /// sixty-term cycle.
    pub fn day_void_branches(&self) -> Vec<Branch> {
        let day = self.pillar(PillarRole::Day);
        void_branches(day.stem, day.branch)
            .map(|pair| pair.to_vec())
            .unwrap_or_default()
    }

    /// Day Master's life stage at each branch, Year..Hour.
    pub fn life_stages(&self) -> [LongevityStage; PILLAR_COUNT] {
        [0, 1, 2, 3].map(|i| self.pillars[i].life_stage)
    }

    /// Stem-level Ten Gods of the three non-Day pillars.
    pub fn stem_ten_gods(&self) -> impl Iterator<Item = TenGod> + '_ {
        self.pillars.iter().filter_map(|p| p.ten_god)
    }

    /// Hidden-stem Ten Gods of all four branches.
    pub fn hidden_ten_gods(&self) -> impl Iterator<Item = TenGod> + '_ {
        self.pillars.iter().flat_map(|p| p.hidden_ten_gods())
    }

    /// Returns true if any stem-level Ten God satisfies `predicate`.
    pub fn has_stem_god(&self, predicate: impl Fn(&TenGod) -> bool) -> bool {
        self.stem_ten_gods().any(|god| predicate(&god))
    }
}
