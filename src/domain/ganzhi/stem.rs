//! Heavenly Stems (天干).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Element, Polarity};
use crate::domain::foundation::MalformedChartError;

/// The ten Heavenly Stems in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stem {
    #[serde(rename = "甲")]
    Jia,
    #[serde(rename = "乙")]
    Yi,
    #[serde(rename = "丙")]
    Bing,
    #[serde(rename = "丁")]
    Ding,
    #[serde(rename = "戊")]
    Wu,
    #[serde(rename = "己")]
    Ji,
    #[serde(rename = "庚")]
    Geng,
    #[serde(rename = "辛")]
    Xin,
    #[serde(rename = "壬")]
    Ren,
    #[serde(rename = "癸")]
    Gui,
}

impl Stem {
    /// Number of stems in the cycle.
    pub const COUNT: usize = 10;

    /// Returns all stems in canonical order.
    pub fn all() -> &'static [Stem; Stem::COUNT] {
        &[
            Stem::Jia,
            Stem::Yi,
            Stem::Bing,
            Stem::Ding,
            Stem::Wu,
            Stem::Ji,
            Stem::Geng,
            Stem::Xin,
            Stem::Ren,
            Stem::Gui,
        ]
    }

    /// Returns the 0-based position in the canonical order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Element: stems come in pairs, Yang first, along the generating cycle.
    pub fn element(&self) -> Element {
        Element::all()[self.index() / 2]
    }

    pub fn polarity(&self) -> Polarity {
        Polarity::from_index(self.index())
    }

    pub fn is_yang(&self) -> bool {
        self.polarity() == Polarity::Yang
    }

    /// Returns the one-character symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Stem::Jia => "甲",
            Stem::Yi => "乙",
            Stem::Bing => "丙",
            Stem::Ding => "丁",
            Stem::Wu => "戊",
            Stem::Ji => "己",
            Stem::Geng => "庚",
            Stem::Xin => "辛",
            Stem::Ren => "壬",
            Stem::Gui => "癸",
        }
    }
}

impl FromStr for Stem {
    type Err = MalformedChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stem::all()
            .iter()
            .find(|stem| stem.symbol() == s)
            .copied()
            .ok_or_else(|| MalformedChartError::unknown_stem(s))
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
