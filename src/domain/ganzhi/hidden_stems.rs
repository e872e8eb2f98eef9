//! Hidden stems (藏干) held by each branch.

use super::{Branch, Stem};

/// Hidden stems per branch in canonical branch order, dominant qi first.
const HIDDEN_STEMS: [&[Stem]; Branch::COUNT] = [
    &[Stem::Gui],                        // 子
    &[Stem::Ji, Stem::Xin, Stem::Gui],   // 丑
    &[Stem::Jia, Stem::Bing, Stem::Wu],  // 寅
    &[Stem::Yi],                         // 卯
    &[Stem::Wu, Stem::Yi, Stem::Gui],    // 辰
    &[Stem::Bing, Stem::Wu, Stem::Geng], // 巳
    &[Stem::Ding, Stem::Ji],             // 午
    &[Stem::Ji, Stem::Ding, Stem::Yi],   // 未
    &[Stem::Geng, Stem::Ren, Stem::Wu],  // 申
    &[Stem::Xin],                        // 酉
    &[Stem::Wu, Stem::Xin, Stem::Ding],  // 戌
    &[Stem::Ren, Stem::Jia],             // 亥
];

/// Returns the ordered hidden stems of a branch (1 to 3 entries).
pub fn hidden_stems(branch: Branch) -> &'static [Stem] {
    HIDDEN_STEMS[branch.index()]
}

/// Returns the dominant (本气) hidden stem of a branch.
pub fn dominant_stem(branch: Branch) -> Stem {
    // Every row of the table is non-empty.
    HIDDEN_STEMS[branch.index()][0]
}

/// Returns true if `stem` is the dominant hidden stem of `branch`.
pub fn is_dominant(branch: Branch, stem: Stem) -> bool {
    dominant_stem(branch) == stem
}
