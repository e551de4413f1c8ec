//! Row filter for the dashboard selectors.
//!
//! Each selector narrows the rows only when it holds a value; all active
//! selectors must match (AND). Row order is kept.

use crate::models::{FilterSelection, ScoreRecord};

/// Applies every active selector to `rows` and returns the surviving rows
/// in input order. An empty result is a valid answer.
pub fn filter_rows<'a>(rows: &'a [ScoreRecord], selection: &FilterSelection) -> Vec<&'a ScoreRecord> {
    let mut kept: Vec<&ScoreRecord> = rows.iter().collect();

    if let Some(student) = active_student(selection) {
        kept.retain(|r| r.username == student);
    }

    let tests = active_values(&selection.tests);
    if !tests.is_empty() {
        kept.retain(|r| tests.contains(&r.test.as_str()));
    }

    let countries = active_values(&selection.countries);
    if !countries.is_empty() {
        kept.retain(|r| countries.contains(&r.country.as_str()));
    }

    let versions = active_values(&selection.versions);
    if !versions.is_empty() && !selection.all_versions() {
        kept.retain(|r| versions.contains(&r.version.as_str()));
    }

    kept
}

/// Student selector value, ignoring a blank submission.
fn active_student(selection: &FilterSelection) -> Option<&str> {
    selection
        .student
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn active_values(values: &[String]) -> Vec<&str> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect()
}
