// Core data structures shared by the loader, the pipeline and the HTTP layer

use serde::Serialize;

/// Version values that disable version filtering. `ALL` is what the
/// dashboard form submits; the label is accepted too for hand-written URLs.
pub const ALL_VERSIONS_SENTINELS: [&str; 2] = ["ALL", "Select All Versions"];

/// One row of the score workbook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRecord {
    pub username: String,
    pub test: String,
    pub country: String,
    pub version: String,
    pub skill_or_passage: String,
    /// Fraction of the maximum score, nominally 0.0 - 1.0.
    pub average_score: f64,
}

impl ScoreRecord {
    pub fn percentage(&self) -> f64 {
        self.average_score * 100.0
    }

    pub fn category(&self) -> Category {
        Category::of(&self.skill_or_passage)
    }
}

/// Aggregation category of a raw skill/passage label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Skill,
    NonSkill,
}

impl Category {
    pub const SKILL_MARKER: &'static str = "-SK-";

    pub fn of(label: &str) -> Self {
        if label.contains(Self::SKILL_MARKER) {
            Category::Skill
        } else {
            Category::NonSkill
        }
    }
}

/// Current state of the four dashboard selectors. Empty fields mean
/// "no filtering on this column". Built from the query string by
/// `api_json::selection_from_pairs`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub student: Option<String>,
    pub tests: Vec<String>,
    pub countries: Vec<String>,
    pub versions: Vec<String>,
}

impl FilterSelection {
    pub fn all_versions(&self) -> bool {
        self.versions
            .iter()
            .any(|v| ALL_VERSIONS_SENTINELS.contains(&v.trim()))
    }
}

/// Behavior switches that differ between deployments of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Variant {
    /// Color gauges red/blue/green by score band; otherwise always blue.
    pub color_coded: bool,
    /// Also strip the bare `A-`..`D-` tokens, not just `A-SK-`..`D-SK-`.
    pub strip_bare_prefixes: bool,
}

impl Default for Variant {
    fn default() -> Self {
        Variant {
            color_coded: true,
            strip_bare_prefixes: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GaugeColor {
    Red,
    Blue,
    Green,
}

impl GaugeColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            GaugeColor::Red => "red",
            GaugeColor::Blue => "blue",
            GaugeColor::Green => "green",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGauge {
    /// Raw skill/passage label as found in the workbook.
    pub skill: String,
    /// Normalized and wrapped label for display.
    pub label: String,
    pub percentage: f64,
    pub color: GaugeColor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestSection {
    pub test: String,
    pub gauges: Vec<SkillGauge>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalGauge {
    pub title: String,
    pub label: String,
    pub percentage: f64,
    pub color: GaugeColor,
    pub count: usize,
}

/// Everything the dashboard shows for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub row_count: usize,
    pub sections: Vec<TestSection>,
    pub skill_totals: Vec<TotalGauge>,
    pub non_skill_totals: Vec<TotalGauge>,
}

impl Dashboard {
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }
}
