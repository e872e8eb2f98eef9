//! Integration tests for the chart engine.
//!
//! These tests drive the public entry points end to end:
//! 1. Raw chart is validated and annotated
//! 2. Vitality, favorable elements and patterns are computed
//! 3. The five-stage report is assembled, or the call fails as a whole

use auspire::application::{
    AnalyzeChartHandler, AnalyzeChartQuery, AnnotateChartHandler, AnnotateChartQuery,
    GetFavorableElementsHandler, GetFavorableElementsQuery,
};
use auspire::domain::analysis::{
    AnalysisPipeline, FavorableElementResolver, PatternAnalyzer, ReportOptions, Strength,
    VitalityAssessor, STAGE_FAVORABLE, STAGE_GUIDANCE, STAGE_PATTERN, STAGE_VITALITY,
};
use auspire::domain::chart::{ChartAssembler, RawChart, RawPillar};
use auspire::domain::foundation::{ErrorCode, MalformedChartError, PillarRole};
use auspire::domain::ganzhi::{longevity_stage, Branch, Element, LongevityStage, Stem};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Day Master 甲 with two companions (甲, 乙) and one Direct Resource (癸).
fn strong_wood_chart() -> RawChart {
    RawChart::from_symbols(&[("甲", "寅"), ("乙", "亥"), ("甲", "子"), ("癸", "酉")])
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn jia_in_hai_month_holds_command() {
    assert_eq!(longevity_stage(Stem::Jia, Branch::Hai), LongevityStage::Birth);
    assert_eq!(LongevityStage::Birth.label(), "长生");

    let chart = ChartAssembler::assemble(&strong_wood_chart()).unwrap();
    let score = VitalityAssessor::assess(&chart);
    assert!(score.command.in_command);
}

#[test]
fn zi_year_and_wu_month_clash() {
    let raw = RawChart::from_symbols(&[("甲", "子"), ("壬", "午"), ("丙", "寅"), ("戊", "戌")]);
    let chart = ChartAssembler::assemble(&raw).unwrap();
    let report = PatternAnalyzer::analyze(&chart);

    let labels: Vec<String> = report.clashes.iter().map(|c| c.to_string()).collect();
    assert_eq!(labels, vec!["子与午相冲".to_string()]);

    let full = AnalysisPipeline::default().run("", &raw).unwrap();
    let stage = full.stage(STAGE_PATTERN).unwrap();
    assert!(stage.lines.iter().any(|l| l.contains("子与午相冲")));
}

#[test]
fn strong_wood_day_master_favors_metal_earth_fire() {
    let chart = ChartAssembler::assemble(&strong_wood_chart()).unwrap();
    let score = VitalityAssessor::assess(&chart);

    assert!(score.command.in_command);
    assert!(score.root.grade.is_present());
    assert!(score.allies.grade.is_present());
    assert!(score.support.grade.is_present());
    assert_eq!(score.strength, Strength::Strong);

    let preference = FavorableElementResolver::resolve(score.strength, Element::Wood);
    assert_eq!(
        preference.favorable_elements(),
        vec![Element::Metal, Element::Earth, Element::Fire]
    );
    assert_eq!(
        preference.unfavorable_elements(),
        vec![Element::Wood, Element::Water]
    );
}

#[test]
fn three_pillars_fail_without_partial_result() {
    let raw = RawChart::from_symbols(&[("甲", "寅"), ("乙", "亥"), ("甲", "子")]);

    assert_eq!(
        ChartAssembler::assemble(&raw),
        Err(MalformedChartError::pillar_count(3))
    );
    assert!(AnalysisPipeline::default().run("", &raw).is_err());

    let err = AnalyzeChartHandler::default()
        .handle(AnalyzeChartQuery {
            name: "测试".to_string(),
            chart: raw,
        })
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::MalformedChart);
}

#[test]
fn misordered_roles_are_rejected() {
    let raw = RawChart::new(vec![
        RawPillar::new(PillarRole::Year, "甲", "寅"),
        RawPillar::new(PillarRole::Day, "甲", "子"),
        RawPillar::new(PillarRole::Month, "乙", "亥"),
        RawPillar::new(PillarRole::Hour, "癸", "酉"),
    ]);
    let err = AnnotateChartHandler::new()
        .handle(AnnotateChartQuery { chart: raw })
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::MalformedChart);
    assert_eq!(err.details.get("position"), Some(&"1".to_string()));
}

#[test]
fn balanced_chart_defers_to_pattern_analysis() {
    // 甲 in 午 month (死) yet rooted in 寅 with resource in 子: the gap case
    let raw = RawChart::from_symbols(&[("丙", "寅"), ("庚", "午"), ("甲", "戌"), ("丙", "子")]);
    let chart = ChartAssembler::assemble(&raw).unwrap();
    let score = VitalityAssessor::assess(&chart);

    assert!(!score.command.in_command);
    assert!(score.root.grade.is_present());
    assert!(score.allies.grade.is_present());
    assert!(score.support.grade.is_present());
    assert_eq!(score.strength, Strength::Balanced);

    let report = AnalysisPipeline::default().run("", &raw).unwrap();
    let guidance = report.stage(STAGE_GUIDANCE).unwrap();
    assert!(guidance.lines.iter().any(|l| l.contains("需参照第四步的组合分析")));
}

#[test]
fn rootless_day_master_out_of_command_is_weak() {
    // 甲 in 巳 month (病), no Wood hidden in any branch
    let weak = RawChart::from_symbols(&[("庚", "午"), ("丁", "巳"), ("甲", "午"), ("戊", "戌")]);
    let result = GetFavorableElementsHandler::new()
        .handle(GetFavorableElementsQuery { chart: weak })
        .unwrap();
    assert_eq!(result.vitality.strength, Strength::Weak);
    assert_eq!(
        result.preference.favorable_elements(),
        vec![Element::Water, Element::Wood]
    );
}

#[test]
fn full_report_threads_typed_results_between_stages() {
    let report = AnalyzeChartHandler::new(ReportOptions::default())
        .handle(AnalyzeChartQuery {
            name: "张三".to_string(),
            chart: strong_wood_chart(),
        })
        .unwrap();

    assert_eq!(report.name, "张三");
    assert_eq!(report.stages.len(), 5);

    let vitality = report.stage(STAGE_VITALITY).unwrap();
    assert!(vitality.lines.iter().any(|l| l.starts_with("身旺/强")));

    let favorable = report.stage(STAGE_FAVORABLE).unwrap();
    assert!(favorable.lines.contains(&"   官杀(金)、财星(土)、食伤(火)".to_string()));

    let guidance = report.stage(STAGE_GUIDANCE).unwrap();
    assert!(guidance.lines.contains(&"您的日主为甲，喜用神为金、土、火。".to_string()));
}

#[test]
fn report_serializes_as_ordered_stages() {
    let report = AnalysisPipeline::default()
        .run("", &strong_wood_chart())
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    let stages = json["stages"].as_array().unwrap();
    assert_eq!(stages.len(), 5);
    assert_eq!(stages[0]["title"], "第一步：排盘与定盘");
    assert!(stages[4]["lines"].as_array().unwrap().len() > 1);
}

#[test]
fn yaml_chart_request_is_accepted() {
    let yaml = r#"
name: 王五
pillars:
  - { role: year, stem: 甲, branch: 寅 }
  - { role: month, stem: 乙, branch: 亥 }
  - { role: day, stem: 甲, branch: 子 }
  - { role: hour, stem: 癸, branch: 酉 }
"#;
    let query: AnalyzeChartQuery = serde_yaml::from_str(yaml).unwrap();
    let report = AnalyzeChartHandler::default().handle(query).unwrap();
    assert_eq!(report.name, "王五");
}
