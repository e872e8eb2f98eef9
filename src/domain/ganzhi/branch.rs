//! Earthly Branches (地支).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{hidden_stems, Element, Polarity, Stem};
use crate::domain::foundation::MalformedChartError;

/// The twelve Earthly Branches in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "子")]
    Zi,
    #[serde(rename = "丑")]
    Chou,
    #[serde(rename = "寅")]
    Yin,
    #[serde(rename = "卯")]
    Mao,
    #[serde(rename = "辰")]
    Chen,
    #[serde(rename = "巳")]
    Si,
    #[serde(rename = "午")]
    Wu,
    #[serde(rename = "未")]
    Wei,
    #[serde(rename = "申")]
    Shen,
    #[serde(rename = "酉")]
    You,
    #[serde(rename = "戌")]
    Xu,
    #[serde(rename = "亥")]
    Hai,
}

impl Branch {
    /// Number of branches in the cycle.
    pub const COUNT: usize = 12;

    /// Returns all branches in canonical order.
    pub fn all() -> &'static [Branch; Branch::COUNT] {
        &[
            Branch::Zi,
            Branch::Chou,
            Branch::Yin,
            Branch::Mao,
            Branch::Chen,
            Branch::Si,
            Branch::Wu,
            Branch::Wei,
            Branch::Shen,
            Branch::You,
            Branch::Xu,
            Branch::Hai,
        ]
    }

    /// Returns the 0-based position in the canonical order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the branch `steps` positions further along the cycle.
    pub fn offset(&self, steps: usize) -> Branch {
        Branch::all()[(self.index() + steps) % Branch::COUNT]
    }

    pub fn element(&self) -> Element {
        match self {
            Branch::Yin | Branch::Mao => Element::Wood,
            Branch::Si | Branch::Wu => Element::Fire,
            Branch::Chou | Branch::Chen | Branch::Wei | Branch::Xu => Element::Earth,
            Branch::Shen | Branch::You => Element::Metal,
            Branch::Hai | Branch::Zi => Element::Water,
        }
    }

    pub fn polarity(&self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Hidden stems (藏干), dominant qi first.
    pub fn hidden_stems(&self) -> &'static [Stem] {
        hidden_stems::hidden_stems(*self)
    }

    /// The dominant (本气) hidden stem.
    pub fn dominant_stem(&self) -> Stem {
        hidden_stems::dominant_stem(*self)
    }

    /// The opposing branch six positions away (子午, 丑未, 寅申, 卯酉, 辰戌, 巳亥).
    pub fn clash_partner(&self) -> Branch {
        self.offset(6)
    }

    /// Returns true if the two branches form one of the six opposing pairs.
    pub fn clashes_with(&self, other: &Branch) -> bool {
        self.clash_partner() == *other
    }

    /// Returns the one-character symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Branch::Zi => "子",
            Branch::Chou => "丑",
            Branch::Yin => "寅",
            Branch::Mao => "卯",
            Branch::Chen => "辰",
            Branch::Si => "巳",
            Branch::Wu => "午",
            Branch::Wei => "未",
            Branch::Shen => "申",
            Branch::You => "酉",
            Branch::Xu => "戌",
            Branch::Hai => "亥",
        }
    }
}

impl FromStr for Branch {
    type Err = MalformedChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Branch::all()
            .iter()
            .find(|branch| branch.symbol() == s)
            .copied()
            .ok_or_else(|| MalformedChartError::unknown_branch(s))
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_12_branches_in_order() {
        let all = Branch::all();
        assert_eq!(all.len(), 12);
        for (i, branch) in all.iter().enumerate() {
            assert_eq!(branch.index(), i);
        }
    }

    #[test]
    fn element_matches_traditional_assignment() {
        assert_eq!(Branch::Zi.element(), Element::Water);
        assert_eq!(Branch::Chou.element(), Element::Earth);
        assert_eq!(Branch::Yin.element(), Element::Wood);
        assert_eq!(Branch::Si.element(), Element::Fire);
        assert_eq!(Branch::Shen.element(), Element::Metal);
        assert_eq!(Branch::Xu.element(), Element::Earth);
        assert_eq!(Branch::Hai.element(), Element::Water);
    }

    #[test]
    fn offset_wraps_around() {
        assert_eq!(Branch::Hai.offset(1), Branch::Zi);
        assert_eq!(Branch::Xu.offset(4), Branch::Yin);
        assert_eq!(Branch::Zi.offset(12), Branch::Zi);
    }

    #[test]
    fn clash_pairs_are_the_six_traditional_pairs() {
        assert_eq!(Branch::Zi.clash_partner(), Branch::Wu);
        assert_eq!(Branch::Chou.clash_partner(), Branch::Wei);
        assert_eq!(Branch::Yin.clash_partner(), Branch::Shen);
        assert_eq!(Branch::Mao.clash_partner(), Branch::You);
        assert_eq!(Branch::Chen.clash_partner(), Branch::Xu);
        assert_eq!(Branch::Si.clash_partner(), Branch::Hai);
    }

    #[test]
    fn clash_is_symmetric_and_never_reflexive() {
        for a in Branch::all() {
            assert!(!a.clashes_with(a));
            for b in Branch::all() {
                assert_eq!(a.clashes_with(b), b.clashes_with(a));
            }
        }
    }

    #[test]
    fn parses_from_symbol() {
        assert_eq!("亥".parse::<Branch>().unwrap(), Branch::Hai);
        assert_eq!(
            "甲".parse::<Branch>().unwrap_err(),
            MalformedChartError::unknown_branch("甲")
        );
    }

    #[test]
    fn padded_symbol_is_rejected_verbatim() {
        assert_eq!(
            "子 ".parse::<Branch>().unwrap_err(),
            MalformedChartError::unknown_branch("子 ")
        );
    }

    #[test]
    fn serializes_as_symbol() {
        assert_eq!(serde_json::to_string(&Branch::Mao).unwrap(), "\"卯\"");
    }
}
