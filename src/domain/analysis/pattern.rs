//! Pattern Analyzer - Named Ten-God combinations, branch clashes and
//! palace readings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::chart::{AnnotatedChart, HiddenStem};
use crate::domain::foundation::PillarRole;
use crate::domain::ganzhi::{Branch, TenGod};

/// Auspicious Ten-God combinations, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuspiciousPattern {
    EatingGodRestrainsKillings,
    HurtingOfficerWithResource,
    EatingGodGeneratesWealth,
}

impl AuspiciousPattern {
    pub fn all() -> &'static [AuspiciousPattern] {
        &[
            AuspiciousPattern::EatingGodRestrainsKillings,
            AuspiciousPattern::HurtingOfficerWithResource,
            AuspiciousPattern::EatingGodGeneratesWealth,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuspiciousPattern::EatingGodRestrainsKillings => "食神制杀",
            AuspiciousPattern::HurtingOfficerWithResource => "伤官配印",
            AuspiciousPattern::EatingGodGeneratesWealth => "食伤生财",
        }
    }

    fn matches(&self, chart: &AnnotatedChart) -> bool {
        let has = |god: TenGod| chart.has_stem_god(|g| *g == god);
        match self {
            AuspiciousPattern::EatingGodRestrainsKillings => {
                has(TenGod::EatingGod) && has(TenGod::SevenKillings)
            }
            AuspiciousPattern::HurtingOfficerWithResource => {
                chart.has_stem_god(TenGod::is_output) && chart.has_stem_god(TenGod::is_resource)
            }
            AuspiciousPattern::EatingGodGeneratesWealth => {
                has(TenGod::EatingGod) && chart.has_stem_god(TenGod::is_wealth)
            }
        }
    }
}

impl fmt::Display for AuspiciousPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Inauspicious Ten-God combinations, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InauspiciousPattern {
    HurtingOfficerMeetsOfficer,
    IndirectResourceSnatchesFood,
    CompanionsSnatchWealth,
}

impl InauspiciousPattern {
    pub fn all() -> &'static [InauspiciousPattern] {
        &[
            InauspiciousPattern::HurtingOfficerMeetsOfficer,
            InauspiciousPattern::IndirectResourceSnatchesFood,
            InauspiciousPattern::CompanionsSnatchWealth,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            InauspiciousPattern::HurtingOfficerMeetsOfficer => "伤官见官",
            InauspiciousPattern::IndirectResourceSnatchesFood => "枭神夺食",
            InauspiciousPattern::CompanionsSnatchWealth => "比劫夺财",
        }
    }

    fn matches(&self, chart: &AnnotatedChart) -> bool {
        let has = |god: TenGod| chart.has_stem_god(|g| *g == god);
        match self {
            InauspiciousPattern::HurtingOfficerMeetsOfficer => {
                has(TenGod::HurtingOfficer) && has(TenGod::DirectOfficer)
            }
            InauspiciousPattern::IndirectResourceSnatchesFood => {
                has(TenGod::IndirectResource) && has(TenGod::EatingGod)
            }
            InauspiciousPattern::CompanionsSnatchWealth => {
                chart.has_stem_god(TenGod::is_companion) && chart.has_stem_god(TenGod::is_wealth)
            }
        }
    }
}

impl fmt::Display for InauspiciousPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Two chart branches standing in opposition (六冲).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BranchClash {
    pub first_role: PillarRole,
    pub first: Branch,
    pub second_role: PillarRole,
    pub second: Branch,
}

impl fmt::Display for BranchClash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}与{}相冲", self.first, self.second)
    }
}

/// The month branch's hidden stems; its dominant stem's Ten God is the
/// core of the pattern (月令).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthFocus {
    pub branch: Branch,
    pub hidden_stems: Vec<HiddenStem>,
    pub core: Option<TenGod>,
}

/// Ten-God groups sitting in their traditional palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PalaceHint {
    /// Wealth among the Day branch's hidden stems.
    WealthInSpousePalace,
    /// Resource on the Year pillar.
    ResourceInAncestorPalace,
    /// Officer or Killings on the Month pillar.
    AuthorityInCareerPalace,
}

impl PalaceHint {
    pub fn reading(&self) -> &'static str {
        match self {
            PalaceHint::WealthInSpousePalace => "财星在妻宫（日支）：妻子贤惠或得妻财。",
            PalaceHint::ResourceInAncestorPalace => "印星在母宫（年柱）：得母亲关爱。",
            PalaceHint::AuthorityInCareerPalace => "官星在事业宫（月柱）：事业心强。",
        }
    }
}

/// Everything the pattern scan found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternReport {
    pub auspicious: Option<AuspiciousPattern>,
    pub inauspicious: Option<InauspiciousPattern>,
    pub clashes: Vec<BranchClash>,
    pub month_focus: MonthFocus,
    pub palace_hints: Vec<PalaceHint>,
}

impl PatternReport {
    /// Explanation lines for the pattern stage.
    pub fn explanation(&self) -> Vec<String> {
        let mut lines = Vec::new();

        let hidden: Vec<String> = self
            .month_focus
            .hidden_stems
            .iter()
            .map(|h| format!("{}({})", h.stem, h.ten_god))
            .collect();
        lines.push(format!(
            "1. 聚焦月令：月支{}藏干为{}，本气十神{}为格局核心。",
            self.month_focus.branch,
            hidden.join("、"),
            self.month_focus.core.map(|g| g.label()).unwrap_or("无"),
        ));

        lines.push("2. 分析十神组合：".to_string());
        lines.push(match self.auspicious {
            Some(pattern) => format!("   存在吉神组合: {}，主富贵。", pattern),
            None => "   暂未发现明显吉神组合。".to_string(),
        });
        lines.push(match self.inauspicious {
            Some(pattern) => format!("   存在凶神组合: {}，主波折。", pattern),
            None => "   暂未发现明显凶神组合。".to_string(),
        });

        lines.push("3. 星宫同参：将十神与所在的宫位结合看。".to_string());
        if self.palace_hints.is_empty() {
            lines.push("   十神未落入特定宫位。".to_string());
        } else {
            for hint in &self.palace_hints {
                lines.push(format!("   - {}", hint.reading()));
            }
        }

        lines.push("4. 察地支刑冲合害：分析地支间的相互作用。".to_string());
        if self.clashes.is_empty() {
            lines.push("   地支间无明显刑冲合害关系。".to_string());
        } else {
            let clashes: Vec<String> = self.clashes.iter().map(|c| c.to_string()).collect();
            lines.push(format!("   地支关系: {}", clashes.join("，")));
        }

        lines
    }
}

/// Analyzer for Ten-God combinations and branch interactions.
pub struct PatternAnalyzer;

impl PatternAnalyzer {
    /// Runs every scan over the chart.
    ///
    /// # Algorithm
    /// Combination scans read stem-level Ten Gods only and stop at the first
    /// pattern that matches. The clash scan reports every opposing pair.
    pub fn analyze(chart: &AnnotatedChart) -> PatternReport {
        PatternReport {
            auspicious: Self::auspicious(chart),
            inauspicious: Self::inauspicious(chart),
            clashes: Self::clashes(chart),
            month_focus: Self::month_focus(chart),
            palace_hints: Self::palace_hints(chart),
        }
    }

    pub fn auspicious(chart: &AnnotatedChart) -> Option<AuspiciousPattern> {
        AuspiciousPattern::all()
            .iter()
            .find(|p| p.matches(chart))
            .copied()
    }

    pub fn inauspicious(chart: &AnnotatedChart) -> Option<InauspiciousPattern> {
        InauspiciousPattern::all()
            .iter()
            .find(|p| p.matches(chart))
            .copied()
    }

    /// Opposing branch pairs in Year-Month, Year-Day, Year-Hour,
    /// Month-Day, Month-Hour, Day-Hour order.
    pub fn clashes(chart: &AnnotatedChart) -> Vec<BranchClash> {
        let pillars = chart.pillars();
        let mut clashes = Vec::new();

        for i in 0..pillars.len() {
            for j in (i + 1)..pillars.len() {
                let (a, b) = (&pillars[i], &pillars[j]);
                if a.branch.clashes_with(&b.branch) {
                    clashes.push(BranchClash {
                        first_role: a.role,
                        first: a.branch,
                        second_role: b.role,
                        second: b.branch,
                    });
                }
            }
        }

        clashes
    }

    pub fn month_focus(chart: &AnnotatedChart) -> MonthFocus {
        let month = chart.pillar(PillarRole::Month);
        MonthFocus {
            branch: month.branch,
            hidden_stems: month.hidden_stems.clone(),
            core: month.hidden_stems.first().map(|h| h.ten_god),
        }
    }

    pub fn palace_hints(chart: &AnnotatedChart) -> Vec<PalaceHint> {
        let in_pillar = |role: PillarRole, group: fn(&TenGod) -> bool| {
            let pillar = chart.pillar(role);
            pillar.ten_god.iter().any(group) || pillar.hidden_ten_gods().any(|g| group(&g))
        };

        let mut hints = Vec::new();
        if chart
            .pillar(PillarRole::Day)
            .hidden_ten_gods()
            .any(|g| g.is_wealth())
        {
            hints.push(PalaceHint::WealthInSpousePalace);
        }
        if in_pillar(PillarRole::Year, TenGod::is_resource) {
            hints.push(PalaceHint::ResourceInAncestorPalace);
        }
        if in_pillar(PillarRole::Month, TenGod::is_authority) {
            hints.push(PalaceHint::AuthorityInCareerPalace);
        }
        hints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::{ChartAssembler, RawChart};

    fn chart(pairs: &[(&str, &str)]) -> AnnotatedChart {
        ChartAssembler::assemble(&RawChart::from_symbols(pairs)).unwrap()
    }

    #[test]
    fn year_zi_month_wu_clash() {
        let report = PatternAnalyzer::analyze(&chart(&[
            ("甲", "子"),
            ("庚", "午"),
            ("甲", "寅"),
            ("丙", "寅"),
        ]));
        assert_eq!(report.clashes.len(), 1);
        assert_eq!(report.clashes[0].to_string(), "子与午相冲");
        assert_eq!(report.clashes[0].first_role, PillarRole::Year);
        assert_eq!(report.clashes[0].second_role, PillarRole::Month);
    }

    #[test]
    fn all_clashes_reported_in_scan_order() {
        // Year-Month, Year-Hour, Month-Day, Day-Hour
        let clashes = PatternAnalyzer::clashes(&chart(&[
            ("甲", "子"),
            ("庚", "午"),
            ("甲", "子"),
            ("丙", "午"),
        ]));
        let labels: Vec<_> = clashes.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            labels,
            vec!["子与午相冲", "子与午相冲", "午与子相冲", "子与午相冲"]
        );
    }

    #[test]
    fn no_clash_when_branches_are_compatible() {
        let clashes = PatternAnalyzer::clashes(&chart(&[
            ("甲", "子"),
            ("乙", "丑"),
            ("甲", "寅"),
            ("丙", "卯"),
        ]));
        assert!(clashes.is_empty());
    }

    #[test]
    fn eating_god_with_killings_wins_over_later_patterns() {
        // 甲 day: 丙 食神, 庚 七杀, 壬 偏印 (would also match the second pattern)
        let found = PatternAnalyzer::auspicious(&chart(&[
            ("丙", "子"),
            ("庚", "午"),
            ("甲", "寅"),
            ("壬", "申"),
        ]));
        assert_eq!(found, Some(AuspiciousPattern::EatingGodRestrainsKillings));
    }

    #[test]
    fn hurting_officer_with_resource() {
        // 甲 day: 丁 伤官, 癸 正印
        let found = PatternAnalyzer::auspicious(&chart(&[
            ("丁", "子"),
            ("癸", "丑"),
            ("甲", "寅"),
            ("甲", "子"),
        ]));
        assert_eq!(found, Some(AuspiciousPattern::HurtingOfficerWithResource));
    }

    #[test]
    fn eating_god_generates_wealth() {
        // 甲 day: 丙 食神, 戊 偏财
        let found = PatternAnalyzer::auspicious(&chart(&[
            ("丙", "子"),
            ("戊", "辰"),
            ("甲", "寅"),
            ("甲", "子"),
        ]));
        assert_eq!(found, Some(AuspiciousPattern::EatingGodGeneratesWealth));
    }

    #[test]
    fn day_master_is_not_a_companion_for_patterns() {
        // Only the Day pillar is 甲; 戊 偏财 alone should not form 比劫夺财
        let report = PatternAnalyzer::analyze(&chart(&[
            ("戊", "辰"),
            ("戊", "辰"),
            ("甲", "寅"),
            ("戊", "辰"),
        ]));
        assert_eq!(report.inauspicious, None);
        assert_eq!(report.auspicious, None);
    }

    #[test]
    fn inauspicious_priority_order() {
        // 甲 day: 丁 伤官 + 辛 正官 first, 乙 劫财 + 己 正财 also present
        let found = PatternAnalyzer::inauspicious(&chart(&[
            ("丁", "子"),
            ("辛", "丑"),
            ("甲", "寅"),
            ("乙", "卯"),
        ]));
        assert_eq!(found, Some(InauspiciousPattern::HurtingOfficerMeetsOfficer));

        let found = PatternAnalyzer::inauspicious(&chart(&[
            ("壬", "子"),
            ("丙", "丑"),
            ("甲", "寅"),
            ("乙", "卯"),
        ]));
        assert_eq!(found, Some(InauspiciousPattern::IndirectResourceSnatchesFood));

        let found = PatternAnalyzer::inauspicious(&chart(&[
            ("乙", "子"),
            ("己", "丑"),
            ("甲", "寅"),
            ("乙", "卯"),
        ]));
        assert_eq!(found, Some(InauspiciousPattern::CompanionsSnatchWealth));
    }

    #[test]
    fn month_focus_reads_month_hidden_stems() {
        let focus = PatternAnalyzer::month_focus(&chart(&[
            ("甲", "寅"),
            ("乙", "亥"),
            ("甲", "子"),
            ("癸", "酉"),
        ]));
        assert_eq!(focus.branch, Branch::Hai);
        assert_eq!(focus.hidden_stems.len(), 2);
        assert_eq!(focus.core, Some(TenGod::IndirectResource));
    }

    #[test]
    fn palace_hints_in_fixed_order() {
        // 甲 day on 辰 (戊 偏财 hidden), 癸 正印 on Year, 辛 正官 on Month
        let hints = PatternAnalyzer::palace_hints(&chart(&[
            ("癸", "卯"),
            ("辛", "卯"),
            ("甲", "辰"),
            ("甲", "子"),
        ]));
        assert_eq!(
            hints,
            vec![
                PalaceHint::WealthInSpousePalace,
                PalaceHint::ResourceInAncestorPalace,
                PalaceHint::AuthorityInCareerPalace,
            ]
        );
    }

    #[test]
    fn explanation_mentions_findings() {
        let report = PatternAnalyzer::analyze(&chart(&[
            ("甲", "子"),
            ("庚", "午"),
            ("甲", "寅"),
            ("丙", "寅"),
        ]));
        let lines = report.explanation();
        assert!(lines.iter().any(|l| l.contains("食神制杀")));
        assert!(lines.iter().any(|l| l.contains("子与午相冲")));
    }
}
