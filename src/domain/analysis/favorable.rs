//! Favorable Element Resolver - Which elements rebalance the Day Master.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Strength;
use crate::domain::ganzhi::Element;

/// Ten-God group an element plays relative to the Day Master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GodGroup {
    /// 比劫
    Companion,
    /// 印星
    Resource,
    /// 食伤
    Output,
    /// 财星
    Wealth,
    /// 官杀
    Authority,
}

impl GodGroup {
    pub fn label(&self) -> &'static str {
        match self {
            GodGroup::Companion => "比劫",
            GodGroup::Resource => "印星",
            GodGroup::Output => "食伤",
            GodGroup::Wealth => "财星",
            GodGroup::Authority => "官杀",
        }
    }

    /// The element holding this group for a Day Master of `day_master`.
    pub fn element_for(&self, day_master: Element) -> Element {
        match self {
            GodGroup::Companion => day_master,
            GodGroup::Resource => day_master.generated_by(),
            GodGroup::Output => day_master.generates(),
            GodGroup::Wealth => day_master.restrains(),
            GodGroup::Authority => day_master.restrained_by(),
        }
    }
}

/// An element tagged with the group it plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementRole {
    pub element: Element,
    pub group: GodGroup,
}

impl ElementRole {
    fn of(group: GodGroup, day_master: Element) -> Self {
        Self {
            element: group.element_for(day_master),
            group,
        }
    }
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.group.label(), self.element.label())
    }
}

/// Disjoint favorable and unfavorable element sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementPreference {
    pub strength: Strength,
    pub favorable: Vec<ElementRole>,
    pub unfavorable: Vec<ElementRole>,
}

impl ElementPreference {
    pub fn favorable_elements(&self) -> Vec<Element> {
        self.favorable.iter().map(|r| r.element).collect()
    }

    pub fn unfavorable_elements(&self) -> Vec<Element> {
        self.unfavorable.iter().map(|r| r.element).collect()
    }

    /// True when no generic rule applied and pattern analysis must decide.
    pub fn is_undetermined(&self) -> bool {
        self.favorable.is_empty() && self.unfavorable.is_empty()
    }

    /// Explanation lines for the favorable-elements stage.
    pub fn explanation(&self) -> Vec<String> {
        let join = |roles: &[ElementRole]| {
            roles
                .iter()
                .map(|r| r.to_string())
                .collect::<Vec<_>>()
                .join("、")
        };

        match self.strength {
            Strength::Strong => vec![
                "身旺：喜克、泄、耗。喜用神为：官杀、财星、食伤。忌神为：比劫、印星。".to_string(),
                "喜用神：".to_string(),
                format!("   {}", join(&self.favorable)),
                "忌神：".to_string(),
                format!("   {}", join(&self.unfavorable)),
            ],
            Strength::Weak => vec![
                "身弱：喜生、扶。喜用神为：印星、比劫。忌神为：官杀、财星、食伤。".to_string(),
                "喜用神：".to_string(),
                format!("   {}", join(&self.favorable)),
                "忌神：".to_string(),
                format!("   {}", join(&self.unfavorable)),
            ],
            Strength::Balanced => {
                vec!["身高中和：五行相对平衡，需根据具体组合确定喜忌。".to_string()]
            }
        }
    }
}

/// Resolver from strength to element preference.
pub struct FavorableElementResolver;

impl FavorableElementResolver {
    /// Maps a strength classification to favorable/unfavorable elements.
    ///
    /// # Algorithm
    /// - Strong favors what restrains, drains and consumes the Day Master:
    ///   Authority, Wealth, Output. Companion and Resource are unfavorable.
    /// - Weak favors Resource and Companion; the other three are unfavorable.
    ///
    /// # Edge Cases
    /// - Balanced: both sets empty
    pub fn resolve(strength: Strength, day_master: Element) -> ElementPreference {
        let roles = |groups: &[GodGroup]| -> Vec<ElementRole> {
            groups
                .iter()
                .map(|group| ElementRole::of(*group, day_master))
                .collect()
        };

        let (favorable, unfavorable) = match strength {
            Strength::Strong => (
                roles(&[GodGroup::Authority, GodGroup::Wealth, GodGroup::Output]),
                roles(&[GodGroup::Companion, GodGroup::Resource]),
            ),
            Strength::Weak => (
                roles(&[GodGroup::Resource, GodGroup::Companion]),
                roles(&[GodGroup::Authority, GodGroup::Wealth, GodGroup::Output]),
            ),
            Strength::Balanced => (Vec::new(), Vec::new()),
        };

        ElementPreference {
            strength,
            favorable,
            unfavorable,
        }
    }
}
