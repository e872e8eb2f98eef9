//! Vitality Assessor - Day Master strength from four dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::chart::AnnotatedChart;
use crate::domain::foundation::PillarRole;
use crate::domain::ganzhi::hidden_stems::is_dominant;
use crate::domain::ganzhi::{LongevityStage, Stem, TenGod};

/// Graded outcome of a counted dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Strong,
    Weak,
    Absent,
}

impl Grade {
    /// Strong and Weak both count as present for classification.
    pub fn is_present(&self) -> bool {
        !matches!(self, Grade::Absent)
    }

    /// Grade for the Ten-God counting dimensions: two or more is strong.
    fn from_backing_count(count: usize) -> Self {
        match count {
            0 => Grade::Absent,
            1 => Grade::Weak,
            _ => Grade::Strong,
        }
    }
}

/// Overall Day Master classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    Strong,
    Weak,
    Balanced,
}

impl Strength {
    pub fn label(&self) -> &'static str {
        match self {
            Strength::Strong => "身旺",
            Strength::Weak => "身弱",
            Strength::Balanced => "身高中和",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 得令: the Day Master's stage at the Month branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandScore {
    pub month_stage: LongevityStage,
    pub in_command: bool,
}

/// 得地: hidden stems sharing the Day Master's element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RootScore {
    pub grade: Grade,
    pub count: usize,
    pub dominant_roots: usize,
}

/// 得势 or 得助: Ten Gods of one group across stems and hidden stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BackingScore {
    pub grade: Grade,
    pub count: usize,
}

/// The four dimensions and the classification derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VitalityScore {
    pub day_master: Stem,
    pub command: CommandScore,
    pub root: RootScore,
    pub allies: BackingScore,
    pub support: BackingScore,
    pub strength: Strength,
}

impl VitalityScore {
    /// Human-readable breakdown, in priority order Command, Root, then
    /// Allies and Support.
    pub fn explanation(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let stage = self.command.month_stage;

        lines.push("1. 得令（看月令）:".to_string());
        lines.push(if self.command.in_command {
            format!("   日主{}在月令的状态为: 得令（{}），趋势强", self.day_master, stage)
        } else {
            format!("   日主{}在月令的状态为: 失令（{}），趋势弱", self.day_master, stage)
        });

        lines.push("2. 得地（看根气）:".to_string());
        lines.push(match (self.root.grade, self.root.dominant_roots) {
            (Grade::Strong, n) if n > 0 => "   有本气强根，得地力强".to_string(),
            (Grade::Strong, _) => format!("   同五行藏干数量为{}个，得地力强", self.root.count),
            (Grade::Weak, _) => format!("   同五行藏干数量为{}个，得地力弱", self.root.count),
            (Grade::Absent, _) => "   完全无根为\"虚浮\"，力量弱".to_string(),
        });

        lines.push("3. 得势（看比劫）:".to_string());
        lines.push(match self.allies.grade {
            Grade::Strong => format!(
                "   天干和地支藏干中比肩、劫财数量为{}，势众，得势",
                self.allies.count
            ),
            Grade::Weak => format!(
                "   天干和地支藏干中比肩、劫财数量为{}，势弱",
                self.allies.count
            ),
            Grade::Absent => "   天干和地支藏干中无比肩、劫财，不得势".to_string(),
        });

        lines.push("4. 得助（看印星）:".to_string());
        lines.push(match self.support.grade {
            Grade::Strong => format!(
                "   天干和地支藏干中印星数量为{}，得生助之力强，得助",
                self.support.count
            ),
            Grade::Weak => format!(
                "   天干和地支藏干中印星数量为{}，得生助之力弱",
                self.support.count
            ),
            Grade::Absent => "   天干和地支藏干中无印星，不得助".to_string(),
        });

        lines.push(String::new());
        lines.push("综合判断:".to_string());
        lines.push(match self.strength {
            Strength::Strong => "身旺/强：得令 + (得地、得势、得助满足其一或多项)".to_string(),
            Strength::Weak => "身弱/衰：失令 + (不得地、不得势、不得助满足其一或多项)".to_string(),
            Strength::Balanced => "身高中和：八字五行相对平衡".to_string(),
        });

        lines
    }
}

/// Assessor for Day Master vitality.
pub struct VitalityAssessor;

impl VitalityAssessor {
    /// Scores the four dimensions and classifies overall strength.
    ///
    /// # Algorithm
    /// - Command: the Month stage is one of the five ascending stages.
    /// - Root: hidden stems of the Day Master's element in all four
    ///   branches. Any dominant-qi match, or three or more matches, is
    ///   strong; one or two is weak.
    /// - Allies: Peer/Rival among the stem-level and hidden-stem Ten Gods.
    /// - Support: Direct/Indirect Resource, counted the same way.
    ///
    /// # Edge Cases
    /// Strong needs Command plus any present dimension; Weak needs no
    /// Command plus any absent dimension. Everything else is Balanced,
    /// including Command with nothing else present.
    pub fn assess(chart: &AnnotatedChart) -> VitalityScore {
        let day_master = chart.day_master();
        let command = Self::command(chart);
        let root = Self::root(chart);
        let allies = Self::backing(chart, TenGod::is_companion);
        let support = Self::backing(chart, TenGod::is_resource);
        let strength = Self::classify(
            command.in_command,
            root.grade.is_present(),
            allies.grade.is_present(),
            support.grade.is_present(),
        );

        VitalityScore {
            day_master,
            command,
            root,
            allies,
            support,
            strength,
        }
    }

    /// Applies the Strong/Weak/Balanced rule to the four booleans.
    pub fn classify(command: bool, root: bool, allies: bool, support: bool) -> Strength {
        if command && (root || allies || support) {
            Strength::Strong
        } else if !command && (!root || !allies || !support) {
            Strength::Weak
        } else {
            Strength::Balanced
        }
    }

    fn command(chart: &AnnotatedChart) -> CommandScore {
        let month_stage = chart.pillar(PillarRole::Month).life_stage;
        CommandScore {
            month_stage,
            in_command: month_stage.is_ascending(),
        }
    }

    fn root(chart: &AnnotatedChart) -> RootScore {
        let element = chart.day_master().element();
        let mut count = 0;
        let mut dominant_roots = 0;

        for pillar in chart.pillars() {
            for hidden in &pillar.hidden_stems {
                if hidden.stem.element() == element {
                    count += 1;
                    if is_dominant(pillar.branch, hidden.stem) {
                        dominant_roots += 1;
                    }
                }
            }
        }

        let grade = if dominant_roots > 0 || count >= 3 {
            Grade::Strong
        } else if count > 0 {
            Grade::Weak
        } else {
            Grade::Absent
        };

        RootScore {
            grade,
            count,
            dominant_roots,
        }
    }

    fn backing(chart: &AnnotatedChart, group: impl Fn(&TenGod) -> bool) -> BackingScore {
        let count = chart
            .stem_ten_gods()
            .chain(chart.hidden_ten_gods())
            .filter(|god| group(god))
            .count();

        BackingScore {
            grade: Grade::from_backing_count(count),
            count,
        }
    }
}
