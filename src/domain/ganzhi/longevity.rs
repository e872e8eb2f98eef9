//! Twelve Longevity (十二长生) cycle.
//!
//! Each stem walks the twelve branches starting at its own birth branch:
//! Yang stems in canonical forward order, Yin stems in reverse.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Branch, Stem};

/// The twelve life stages in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LongevityStage {
    Birth,
    Bath,
    Crown,
    Officer,
    Peak,
    Decline,
    Sickness,
    Death,
    Tomb,
    Extinction,
    Conception,
    Nurture,
}

impl LongevityStage {
    /// Returns all stages in cycle order.
    pub fn all() -> &'static [LongevityStage; 12] {
        &[
            LongevityStage::Birth,
            LongevityStage::Bath,
            LongevityStage::Crown,
            LongevityStage::Officer,
            LongevityStage::Peak,
            LongevityStage::Decline,
            LongevityStage::Sickness,
            LongevityStage::Death,
            LongevityStage::Tomb,
            LongevityStage::Extinction,
            LongevityStage::Conception,
            LongevityStage::Nurture,
        ]
    }

    /// True for the five stages that hold seasonal command:
    /// 长生, 沐浴, 冠带, 临官, 帝旺.
    pub fn is_ascending(&self) -> bool {
        matches!(
            self,
            LongevityStage::Birth
                | LongevityStage::Bath
                | LongevityStage::Crown
                | LongevityStage::Officer
                | LongevityStage::Peak
        )
    }

    /// Returns the Chinese stage name.
    pub fn label(&self) -> &'static str {
        match self {
            LongevityStage::Birth => "长生",
            LongevityStage::Bath => "沐浴",
            LongevityStage::Crown => "冠带",
            LongevityStage::Officer => "临官",
            LongevityStage::Peak => "帝旺",
            LongevityStage::Decline => "衰",
            LongevityStage::Sickness => "病",
            LongevityStage::Death => "死",
            LongevityStage::Tomb => "墓",
            LongevityStage::Extinction => "绝",
            LongevityStage::Conception => "胎",
            LongevityStage::Nurture => "养",
        }
    }
}

impl fmt::Display for LongevityStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Branch sequence per stem, in canonical stem order. Position `i` holds the
/// branch at which the stem reaches `LongevityStage::all()[i]`.
const SEQUENCES: [[Branch; 12]; Stem::COUNT] = {
    use Branch::*;
    [
        // 甲: forward from 亥
        [Hai, Zi, Chou, Yin, Mao, Chen, Si, Wu, Wei, Shen, You, Xu],
        // 乙: reverse from 午
        [Wu, Si, Chen, Mao, Yin, Chou, Zi, Hai, Xu, You, Shen, Wei],
        // 丙: forward from 寅
        [Yin, Mao, Chen, Si, Wu, Wei, Shen, You, Xu, Hai, Zi, Chou],
        // 丁: reverse from 酉
        [You, Shen, Wei, Wu, Si, Chen, Mao, Yin, Chou, Zi, Hai, Xu],
        // 戊: shares 丙
        [Yin, Mao, Chen, Si, Wu, Wei, Shen, You, Xu, Hai, Zi, Chou],
        // 己: shares 丁
        [You, Shen, Wei, Wu, Si, Chen, Mao, Yin, Chou, Zi, Hai, Xu],
        // 庚: forward from 巳
        [Si, Wu, Wei, Shen, You, Xu, Hai, Zi, Chou, Yin, Mao, Chen],
        // 辛: reverse from 子
        [Zi, Hai, Xu, You, Shen, Wei, Wu, Si, Chen, Mao, Yin, Chou],
        // 壬: forward from 申
        [Shen, You, Xu, Hai, Zi, Chou, Yin, Mao, Chen, Si, Wu, Wei],
        // 癸: reverse from 卯
        [Mao, Yin, Chou, Zi, Hai, Xu, You, Shen, Wei, Wu, Si, Chen],
    ]
};

/// Returns the branch sequence a stem walks, starting at its 长生 branch.
pub fn sequence(stem: Stem) -> &'static [Branch; 12] {
    &SEQUENCES[stem.index()]
}

/// Returns the stage `stem` occupies in `branch`.
///
/// Counts steps from the stem's 长生 branch in its walking direction, so the
/// result is defined for all 120 pairs.
pub fn longevity_stage(stem: Stem, branch: Branch) -> LongevityStage {
    let birth = sequence(stem)[0].index();
    let steps = if stem.is_yang() {
        (branch.index() + Branch::COUNT - birth) % Branch::COUNT
    } else {
        (birth + Branch::COUNT - branch.index()) % Branch::COUNT
    };
    LongevityStage::all()[steps]
}
