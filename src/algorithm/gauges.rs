use crate::algorithm::text::display_label;
use crate::models::{GaugeColor, ScoreRecord, SkillGauge, TestSection, Variant};

pub const LOW_SCORE_BELOW: f64 = 40.0;
pub const HIGH_SCORE_ABOVE: f64 = 80.0;

/// Color band of a percentage. Both thresholds are exclusive, so 40 and 80
/// are still blue.
pub fn gauge_color(percentage: f64, color_coded: bool) -> GaugeColor {
    if !color_coded {
        GaugeColor::Blue
    } else if percentage < LOW_SCORE_BELOW {
        GaugeColor::Red
    } else if percentage > HIGH_SCORE_ABOVE {
        GaugeColor::Green
    } else {
        GaugeColor::Blue
    }
}

/// One section per distinct test (first-seen order), one gauge per distinct
/// raw skill label within it. Repeated test+skill rows are not averaged:
/// the first row decides the value.
pub fn build_per_test_gauges(rows: &[&ScoreRecord], variant: Variant) -> Vec<TestSection> {
    let mut sections: Vec<TestSection> = Vec::new();

    for row in rows {
        let idx = match sections.iter().position(|s| s.test == row.test) {
            Some(i) => i,
            None => {
                sections.push(TestSection {
                    test: row.test.clone(),
                    gauges: Vec::new(),
                });
                sections.len() - 1
            }
        };
        let section = &mut sections[idx];
        if section.gauges.iter().any(|g| g.skill == row.skill_or_passage) {
            continue;
        }

        let percentage = row.percentage();
        section.gauges.push(SkillGauge {
            skill: row.skill_or_passage.clone(),
            label: display_label(&row.skill_or_passage, variant.strip_bare_prefixes),
            percentage,
            color: gauge_color(percentage, variant.color_coded),
        });
    }

    sections
}
