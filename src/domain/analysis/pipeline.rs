//! Analysis Pipeline - The five stages in fixed order.

use serde::{Deserialize, Serialize};

use super::{
    AnalysisReport, AnalysisStage, ElementPreference, FavorableElementResolver, PatternAnalyzer,
    PatternReport, VitalityAssessor, VitalityScore,
};
use crate::domain::chart::{AnnotatedChart, ChartAssembler, RawChart};
use crate::domain::foundation::{MalformedChartError, PillarRole};
use crate::domain::ganzhi::Element;

pub const STAGE_ESTABLISH: &str = "第一步：排盘与定盘";
pub const STAGE_VITALITY: &str = "第二步：定旺衰，识体性";
pub const STAGE_FAVORABLE: &str = "第三步：明喜忌，定方向";
pub const STAGE_PATTERN: &str = "第四步：析格局，观组合";
pub const STAGE_GUIDANCE: &str = "第五步：推大运，断流年";

/// Report rendering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Include the "做什么/怎么做" method lines in each stage.
    pub include_methodology: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            include_methodology: true,
        }
    }
}

/// Orchestrates chart assembly and the five analysis stages.
///
/// Each stage reads the annotated chart and, for stages three and five, the
/// structured output of an earlier stage. Nothing is re-derived from text.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisPipeline {
    options: ReportOptions,
}

impl AnalysisPipeline {
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    /// Assembles the chart and runs every stage.
    ///
    /// # Errors
    /// `MalformedChartError` from assembly; no partial report is built.
    pub fn run(&self, name: &str, raw: &RawChart) -> Result<AnalysisReport, MalformedChartError> {
        let chart = ChartAssembler::assemble(raw)?;
        Ok(self.run_annotated(name, &chart))
    }

    /// Runs every stage over an assembled chart.
    pub fn run_annotated(&self, name: &str, chart: &AnnotatedChart) -> AnalysisReport {
        let vitality = VitalityAssessor::assess(chart);
        let preference =
            FavorableElementResolver::resolve(vitality.strength, chart.day_master().element());
        let patterns = PatternAnalyzer::analyze(chart);

        AnalysisReport {
            name: name.to_string(),
            stages: vec![
                self.establish_stage(name, chart),
                self.vitality_stage(chart, &vitality),
                self.favorable_stage(&vitality, &preference),
                self.pattern_stage(&patterns),
                self.guidance_stage(chart, &preference),
            ],
        }
    }

    fn establish_stage(&self, name: &str, chart: &AnnotatedChart) -> AnalysisStage {
        let mut lines = Vec::new();
        if self.options.include_methodology {
            lines.extend(
                [
                    "做什么：将出生时间转换为天干地支表示的四柱八字，并确认其准确性。",
                    "怎么做：",
                    "1. 年柱：以立春为界，非农历正月初一。",
                    "2. 月柱：以节气为界（如立春-惊蛰为寅月，惊蛰-清明为卯月）。",
                    "3. 日柱：直接查询。",
                    "4. 时柱：将北京时间换算为真太阳时。",
                    "5. 定十神：以日干为我，为所有天干和地支藏干标注十神。",
                    "",
                ]
                .map(String::from),
            );
        }

        if !name.is_empty() {
            lines.push(format!("命主：{}", name));
        }
        lines.push("您的八字排盘结果：".to_string());
        for pillar in chart.pillars() {
            lines.push(format!(
                "{}: {}{} ({}{})",
                pillar.role.label(),
                pillar.stem,
                pillar.branch,
                pillar.stem_element.label(),
                pillar.branch_element.label(),
            ));
        }

        lines.push(String::new());
        lines.push("十神分析：".to_string());
        for pillar in chart.pillars() {
            let hidden: Vec<String> = pillar
                .hidden_stems
                .iter()
                .map(|h| format!("{}{}", h.stem, h.ten_god))
                .collect();
            lines.push(format!(
                "{}: 天干({})为{}，藏干{}，{}，{}",
                pillar.role.label(),
                pillar.stem,
                pillar.ten_god_label(),
                hidden.join("、"),
                pillar.life_stage,
                pillar.self_seat,
            ));
        }

        let voids = chart.day_void_branches();
        if !voids.is_empty() {
            let symbols: Vec<String> = voids.iter().map(|b| b.to_string()).collect();
            lines.push(format!("空亡：{}", symbols.join("")));
        }

        let stars: Vec<String> = chart
            .activated_stars()
            .iter()
            .map(|s| format!("{}({})", s.star, s.branch))
            .collect();
        if !stars.is_empty() {
            lines.push(format!("神煞：{}", stars.join("、")));
        }

        AnalysisStage::new(STAGE_ESTABLISH, lines)
    }

    fn vitality_stage(&self, chart: &AnnotatedChart, vitality: &VitalityScore) -> AnalysisStage {
        let mut lines = Vec::new();
        if self.options.include_methodology {
            lines.push(
                "做什么：判断日主在整个八字中的能量状态（身强/身弱），这是选择喜用神的根本依据。"
                    .to_string(),
            );
        }
        let day = chart.pillar(PillarRole::Day);
        lines.push(format!("您的日主为: {}, 地支为: {}", day.stem, day.branch));
        if self.options.include_methodology {
            lines.push(String::new());
            lines.push("怎么做：从四个维度综合评估（权重：得令 > 得地 > 得势/得助）。".to_string());
        }
        lines.extend(vitality.explanation());

        AnalysisStage::new(STAGE_VITALITY, lines)
    }

    fn favorable_stage(
        &self,
        vitality: &VitalityScore,
        preference: &ElementPreference,
    ) -> AnalysisStage {
        let mut lines = Vec::new();
        if self.options.include_methodology {
            lines.push("做什么：根据身强身弱，确定平衡八字的五行十神。".to_string());
        }
        lines.push(format!("您的日主状态为: {}", vitality.strength));
        if self.options.include_methodology && !preference.is_undetermined() {
            lines.push("怎么做：".to_string());
        }
        lines.extend(preference.explanation());

        AnalysisStage::new(STAGE_FAVORABLE, lines)
    }

    fn pattern_stage(&self, patterns: &PatternReport) -> AnalysisStage {
        let mut lines = Vec::new();
        if self.options.include_methodology {
            lines.push("做什么：分析十神的分布、组合和力量，解读人生轨迹。".to_string());
            lines.push("怎么做：".to_string());
        }
        lines.extend(patterns.explanation());

        AnalysisStage::new(STAGE_PATTERN, lines)
    }

    fn guidance_stage(
        &self,
        chart: &AnnotatedChart,
        preference: &ElementPreference,
    ) -> AnalysisStage {
        let mut lines = Vec::new();
        if self.options.include_methodology {
            lines.extend(
                [
                    "做什么：将大运和流年代入原局，看如何引动和改变原局的平衡。",
                    "怎么做：",
                    "1. 大运分析：看十年一大运是增强了喜用神还是忌神的力量。",
                    "2. 流年应期：流年干支像一把钥匙，会引动原局中潜伏的信息。",
                    "",
                ]
                .map(String::from),
            );
        }

        let join = |elements: Vec<Element>| {
            elements
                .iter()
                .map(|e| e.label())
                .collect::<Vec<_>>()
                .join("、")
        };

        if preference.is_undetermined() {
            lines.push(format!(
                "您的日主为{}，身高中和，喜用神无通用规则可循，需参照第四步的组合分析。",
                chart.day_master()
            ));
        } else {
            let favorable = join(preference.favorable_elements());
            lines.push(format!(
                "您的日主为{}，喜用神为{}。",
                chart.day_master(),
                favorable
            ));
            lines.push(format!(
                "当大运或流年出现{}五行时，通常代表运势较好。",
                favorable
            ));
            lines.push(format!(
                "当大运或流年出现{}五行时，需谨慎应对可能出现的挑战。",
                join(preference.unfavorable_elements())
            ));
        }

        AnalysisStage::new(STAGE_GUIDANCE, lines)
    }
}
