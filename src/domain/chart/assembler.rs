//! ChartAssembler - Turns a raw chart into an annotated chart.

use super::{AnnotatedChart, AnnotatedPillar, Chart, HiddenStem, Pillar, RawChart, SelfSeat};
use crate::domain::foundation::{MalformedChartError, PillarRole};
use crate::domain::ganzhi::{is_void, longevity_stage, NaYin, Star, StarTable, TenGodClassifier};

/// Stateless assembler; same input always yields an identical result.
pub struct ChartAssembler;

impl ChartAssembler {
    /// Validates and annotates a raw chart.
    ///
    /// # Errors
    /// `MalformedChartError` when validation fails; nothing partial is
    /// returned.
    pub fn assemble(raw: &RawChart) -> Result<AnnotatedChart, MalformedChartError> {
        let chart = Chart::from_raw(raw)?;
        Ok(Self::annotate(&chart))
    }

    /// Annotates an already validated chart.
    ///
    /// # Algorithm
    /// Per pillar: elements, stem Ten God (Day pillar is "self"), hidden
    /// stems with their Ten Gods, Day Master life stage, self-seat, void
    /// flag against the Day pillar. Stars are scanned once for the whole
    /// chart and attached to the pillar whose branch triggered them first;
    /// `branch_stars` lists each branch's own matches regardless.
    pub fn annotate(chart: &Chart) -> AnnotatedChart {
        let stars = StarTable::activated_stars(chart.day_master(), &chart.branches());
        let pillars: [Pillar; 4] = *chart.pillars();

        let annotated = pillars.map(|pillar| {
            let index = pillar.role.order_index();
            let pillar_stars = stars
                .iter()
                .filter(|s| s.pillar_index == index)
                .map(|s| s.star)
                .collect();
            Self::annotate_pillar(chart, pillar, pillar_stars)
        });

        AnnotatedChart::new(*chart, annotated, stars)
    }

    fn annotate_pillar(chart: &Chart, pillar: Pillar, stars: Vec<Star>) -> AnnotatedPillar {
        let day_master = chart.day_master();
        let day = chart.pillar(PillarRole::Day);

        let ten_god = match pillar.role {
            PillarRole::Day => None,
            _ => Some(TenGodClassifier::classify(day_master, pillar.stem)),
        };

        let hidden_stems = pillar
            .branch
            .hidden_stems()
            .iter()
            .map(|stem| HiddenStem {
                stem: *stem,
                ten_god: TenGodClassifier::classify(day_master, *stem),
            })
            .collect();

        AnnotatedPillar {
            role: pillar.role,
            stem: pillar.stem,
            branch: pillar.branch,
            stem_element: pillar.stem.element(),
            branch_element: pillar.branch.element(),
            ten_god,
            hidden_stems,
            life_stage: longevity_stage(day_master, pillar.branch),
            self_seat: SelfSeat::of(pillar.stem, pillar.branch),
            is_void: is_void(day.stem, day.branch, pillar.branch),
            stars,
            branch_stars: StarTable::stars_for_branch(day_master, pillar.branch),
            na_yin: NaYin::of(pillar.stem, pillar.branch),
        }
    }
}
