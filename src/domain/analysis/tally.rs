//! Element tally over the eight visible symbols of a chart.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::chart::Chart;
use crate::domain::ganzhi::Element;

/// Count of each element among the four stems and four branches.
///
/// Hidden stems are not counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ElementTally {
    counts: BTreeMap<Element, usize>,
}

impl ElementTally {
    pub fn from_chart(chart: &Chart) -> Self {
        let mut counts: BTreeMap<Element, usize> =
            Element::all().iter().map(|e| (*e, 0)).collect();

        for pillar in chart.pillars() {
            for element in [pillar.stem.element(), pillar.branch.element()] {
                *counts.entry(element).or_insert(0) += 1;
            }
        }

        Self { counts }
    }

    pub fn count(&self, element: Element) -> usize {
        self.counts.get(&element).copied().unwrap_or(0)
    }

    /// Elements absent from every stem and branch.
    pub fn missing(&self) -> Vec<Element> {
        Element::all()
            .iter()
            .filter(|e| self.count(**e) == 0)
            .copied()
            .collect()
    }

    /// Summary line, e.g. "五行统计：木3 火0 土1 金2 水2".
    pub fn summary(&self) -> String {
        let parts: Vec<String> = Element::all()
            .iter()
            .map(|e| format!("{}{}", e.label(), self.count(*e)))
            .collect();
        format!("五行统计：{}", parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::RawChart;

    fn chart(pairs: &[(&str, &str)]) -> Chart {
        Chart::from_raw(&RawChart::from_symbols(pairs)).unwrap()
    }

    #[test]
    fn counts_stems_and_branches() {
        let tally = ElementTally::from_chart(&chart(&[
            ("甲", "寅"),
            ("乙", "亥"),
            ("甲", "子"),
            ("癸", "酉"),
        ]));
        assert_eq!(tally.count(Element::Wood), 4);
        assert_eq!(tally.count(Element::Water), 3);
        assert_eq!(tally.count(Element::Metal), 1);
        assert_eq!(tally.missing(), vec![Element::Fire, Element::Earth]);
        assert_eq!(tally.summary(), "五行统计：木4 火0 土0 金1 水3");
    }

    #[test]
    fn total_is_always_eight() {
        let tally = ElementTally::from_chart(&chart(&[
            ("丙", "午"),
            ("戊", "辰"),
            ("庚", "申"),
            ("壬", "子"),
        ]));
        let total: usize = Element::all().iter().map(|e| tally.count(*e)).sum();
        assert_eq!(total, 8);
    }

    #[test]
    fn serializes_as_map() {
        let tally = ElementTally::from_chart(&chart(&[
            ("丙", "午"),
            ("戊", "辰"),
            ("庚", "申"),
            ("壬", "子"),
        ]));
        let json = serde_json::to_value(&tally).unwrap();
        assert_eq!(json["fire"], 2);
        assert_eq!(json["wood"], 0);
    }
}
