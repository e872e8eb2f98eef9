//! GetFavorableElementsHandler - Query handler for strength and element
//! preference only.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::analysis::{
    ElementPreference, ElementTally, FavorableElementResolver, VitalityAssessor, VitalityScore,
};
use crate::domain::chart::{ChartAssembler, RawChart};
use crate::domain::foundation::DomainError;
use crate::domain::ganzhi::Element;

/// Query for the favorable elements of a chart.
#[derive(Debug, Clone, Deserialize)]
pub struct GetFavorableElementsQuery {
    #[serde(flatten)]
    pub chart: RawChart,
}

/// Strength, tally and preference, with explanation lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetFavorableElementsResult {
    pub vitality: VitalityScore,
    pub tally: ElementTally,
    /// Elements absent from every stem and branch.
    pub missing_elements: Vec<Element>,
    pub preference: ElementPreference,
    pub explanation: Vec<String>,
}

/// Handler for the favorable-elements view of a chart.
#[derive(Debug, Default)]
pub struct GetFavorableElementsHandler;

impl GetFavorableElementsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        query: GetFavorableElementsQuery,
    ) -> Result<GetFavorableElementsResult, DomainError> {
        let chart = ChartAssembler::assemble(&query.chart)?;
        let vitality = VitalityAssessor::assess(&chart);
        let preference =
            FavorableElementResolver::resolve(vitality.strength, chart.day_master().element());

        let tally = ElementTally::from_chart(chart.chart());
        let missing_elements = tally.missing();

        let mut explanation = vec![tally.summary()];
        if !missing_elements.is_empty() {
            let labels: Vec<&str> = missing_elements.iter().map(|e| e.label()).collect();
            explanation.push(format!("五行缺：{}", labels.join("、")));
        }
        explanation.extend(vitality.explanation());
        explanation.extend(preference.explanation());

        debug!(
            day_master = %chart.day_master(),
            strength = %vitality.strength,
            "Resolved favorable elements"
        );

        Ok(GetFavorableElementsResult {
            vitality,
            tally,
            missing_elements,
            preference,
            explanation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::Strength;

    #[test]
    fn strong_wood_chart() {
        let result = GetFavorableElementsHandler::new()
            .handle(GetFavorableElementsQuery {
                chart: RawChart::from_symbols(&[
                    ("甲", "寅"),
                    ("乙", "亥"),
                    ("甲", "子"),
                    ("癸", "酉"),
                ]),
            })
            .unwrap();

        assert_eq!(result.vitality.strength, Strength::Strong);
        assert_eq!(
            result.preference.favorable_elements(),
            vec![Element::Metal, Element::Earth, Element::Fire]
        );
        assert_eq!(result.tally.count(Element::Wood), 4);
        assert!(result.explanation.iter().any(|l| l.starts_with("身旺：")));
    }

    #[test]
    fn reports_tally_summary_and_missing_elements() {
        let result = GetFavorableElementsHandler::new()
            .handle(GetFavorableElementsQuery {
                chart: RawChart::from_symbols(&[
                    ("甲", "寅"),
                    ("乙", "亥"),
                    ("甲", "子"),
                    ("癸", "酉"),
                ]),
            })
            .unwrap();

        assert_eq!(result.missing_elements, vec![Element::Fire, Element::Earth]);
        assert_eq!(result.explanation[0], "五行统计：木4 火0 土0 金1 水3");
        assert_eq!(result.explanation[1], "五行缺：火、土");
    }

    #[test]
    fn no_missing_line_when_every_element_present() {
        let result = GetFavorableElementsHandler::new()
            .handle(GetFavorableElementsQuery {
                chart: RawChart::from_symbols(&[
                    ("甲", "子"),
                    ("丙", "午"),
                    ("戊", "辰"),
                    ("庚", "申"),
                ]),
            })
            .unwrap();

        assert!(result.missing_elements.is_empty());
        assert!(!result.explanation.iter().any(|l| l.starts_with("五行缺")));
    }
}
