//! Sixty-term stem/branch cycle (六十甲子): void branches and Na Yin.

use serde::Serialize;
use std::fmt;

use super::{Branch, Stem};

/// Length of the stem/branch cycle.
pub const CYCLE_LENGTH: usize = 60;

/// Returns the 0-based position of a stem/branch pair in the sixty-term
/// cycle, or `None` when the pair mixes polarities and never occurs.
pub fn sexagenary_index(stem: Stem, branch: Branch) -> Option<usize> {
    (0..CYCLE_LENGTH / Stem::COUNT)
        .map(|decade| stem.index() + decade * Stem::COUNT)
        .find(|n| n % Branch::COUNT == branch.index())
}

/// Void pair per decade (旬), starting with the 甲子 decade.
const DECADE_VOIDS: [[Branch; 2]; 6] = [
    [Branch::Xu, Branch::Hai],   // 甲子旬
    [Branch::Shen, Branch::You], // 甲戌旬
    [Branch::Wu, Branch::Wei],   // 甲申旬
    [Branch::Chen, Branch::Si],  // 甲午旬
    [Branch::Yin, Branch::Mao],  // 甲辰旬
    [Branch::Zi, Branch::Chou],  // 甲寅旬
];

/// Returns the two void (空亡) branches for a day pillar.
///
/// `None` for a pair outside the cycle; callers treat that as "no void
/// branches" rather than a failure.
pub fn void_branches(day_stem: Stem, day_branch: Branch) -> Option<[Branch; 2]> {
    sexagenary_index(day_stem, day_branch).map(|n| DECADE_VOIDS[n / Stem::COUNT])
}

/// Returns true if `branch` is void relative to the given day pillar.
pub fn is_void(day_stem: Stem, day_branch: Branch, branch: Branch) -> bool {
    void_branches(day_stem, day_branch)
        .map(|pair| pair.contains(&branch))
        .unwrap_or(false)
}

/// Na Yin (纳音) sound element shared by each consecutive pair of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NaYin(&'static str);

const NA_YIN: [&str; CYCLE_LENGTH / 2] = [
    "海中金", "炉中火", "大林木", "路旁土", "剑锋金", "山头火",
    "涧下水", "城头土", "白蜡金", "杨柳木", "泉中水", "屋上土",
    "霹雳火", "松柏木", "长流水", "沙中金", "山下火", "平地木",
    "壁上土", "金箔金", "覆灯火", "天河水", "大驿土", "钗钏金",
    "桑柘木", "大溪水", "沙中土", "天上火", "石榴木", "大海水",
];

impl NaYin {
    /// Looks up the Na Yin of a pillar; `None` outside the cycle.
    pub fn of(stem: Stem, branch: Branch) -> Option<NaYin> {
        sexagenary_index(stem, branch).map(|n| NaYin(NA_YIN[n / 2]))
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for NaYin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
