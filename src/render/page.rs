//! Dashboard HTML page.
//!
//! A single self-contained page: the selector form on top, one section per
//! test with its skill gauges, then the totals. Gauges are inline SVG.

use crate::error::RenderError;
use crate::excel::SelectorOptions;
use crate::models::{Dashboard, FilterSelection, SkillGauge, TestSection, TotalGauge, ALL_VERSIONS_SENTINELS};
use crate::render::gauge::{gauge_svg, GaugeSpec, SKILL_GAUGE_SIZE, TOTAL_GAUGE_SIZE};

pub const PAGE_TITLE: &str = "Student Performance Dashboard";
pub const EMPTY_NOTE: &str = "No scores match the current selection.";
pub const ALL_VERSIONS_LABEL: &str = "Select All Versions";

/// Renders the full page for the current selection.
pub fn dashboard_page(
    options: &SelectorOptions,
    selection: &FilterSelection,
    dashboard: &Dashboard,
) -> Result<String, RenderError> {
    let content = if dashboard.is_empty() {
        format!(r#"<p class="empty">{}</p>"#, EMPTY_NOTE)
    } else {
        let mut sections = String::new();
        for section in &dashboard.sections {
            sections.push_str(&render_test_section(section)?);
        }
        format!("{}{}", sections, render_totals(dashboard)?)
    };

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        <h1>{title}</h1>
        {form}
        {content}
    </div>
</body>
</html>"#,
        title = PAGE_TITLE,
        css = inline_css(),
        form = render_form(options, selection),
        content = content,
    ))
}

fn render_form(options: &SelectorOptions, selection: &FilterSelection) -> String {
    let student_selected = selection.student.as_deref().unwrap_or("");
    let mut students = String::from(r#"<option value="">Search for a student</option>"#);
    for s in &options.students {
        students.push_str(&option(s, s, s == student_selected));
    }

    let version_all_selected = selection.all_versions();
    let mut versions = option(ALL_VERSIONS_SENTINELS[0], ALL_VERSIONS_LABEL, version_all_selected);
    versions.push_str(&multi_options(&options.versions, &selection.versions));

    format!(
        r#"<form method="get" action="/" class="filters">
            <label>Student<select name="student" onchange="this.form.submit()">{students}</select></label>
            <label>Test(s)<select name="tests" multiple>{tests}</select></label>
            <label>Country<select name="countries" multiple>{countries}</select></label>
            <label>Test Version<select name="versions" multiple>{versions}</select></label>
            <button type="submit">Apply</button>
        </form>"#,
        students = students,
        tests = multi_options(&options.tests, &selection.tests),
        countries = multi_options(&options.countries, &selection.countries),
        versions = versions,
    )
}

fn multi_options(values: &[String], selected: &[String]) -> String {
    values
        .iter()
        .map(|v| option(v, v, selected.contains(v)))
        .collect()
}

fn option(value: &str, label: &str, selected: bool) -> String {
    format!(
        r#"<option value="{}"{}>{}</option>"#,
        html_escape(value),
        if selected { " selected" } else { "" },
        html_escape(label)
    )
}

fn render_test_section(section: &TestSection) -> Result<String, RenderError> {
    let mut gauges = String::new();
    for g in &section.gauges {
        gauges.push_str(&skill_gauge_cell(g)?);
    }
    Ok(format!(
        r#"<section class="test"><h3>{}</h3><div class="grid">{}</div></section>"#,
        html_escape(&section.test),
        gauges
    ))
}

fn skill_gauge_cell(g: &SkillGauge) -> Result<String, RenderError> {
    let svg = gauge_svg(&GaugeSpec {
        value: g.percentage,
        title: &g.label,
        color: g.color,
        size: SKILL_GAUGE_SIZE,
    })?;
    Ok(format!(
        r#"<div class="gauge" title="{}">{}</div>"#,
        html_escape(&g.skill),
        svg
    ))
}

fn total_gauge_cell(g: &TotalGauge) -> Result<String, RenderError> {
    let svg = gauge_svg(&GaugeSpec {
        value: g.percentage,
        title: &g.label,
        color: g.color,
        size: TOTAL_GAUGE_SIZE,
    })?;
    Ok(format!(
        r#"<div class="gauge total" title="{} ({} rows)">{}</div>"#,
        html_escape(&g.title),
        g.count,
        svg
    ))
}

fn render_totals(dashboard: &Dashboard) -> Result<String, RenderError> {
    let mut out = String::from(r#"<section class="totals">"#);
    for (heading, gauges) in [
        ("Skill Totals", &dashboard.skill_totals),
        ("Passage Totals", &dashboard.non_skill_totals),
    ] {
        if gauges.is_empty() {
            continue;
        }
        out.push_str(&format!(r#"<h2>{}</h2><div class="grid">"#, heading));
        for g in gauges {
            out.push_str(&total_gauge_cell(g)?);
        }
        out.push_str("</div>");
    }
    out.push_str("</section>");
    Ok(out)
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn inline_css() -> &'static str {
    r#"
body { font-family: sans-serif; background: #fff; color: #212529; margin: 0; }
.container { max-width: 1100px; margin: 0 auto; padding: 16px; }
h1 { text-align: center; margin-bottom: 24px; }
.filters { display: grid; grid-template-columns: repeat(2, 1fr); gap: 12px; margin-bottom: 24px; }
.filters label { display: flex; flex-direction: column; font-size: 14px; gap: 4px; }
.filters select { min-height: 32px; }
.test { border: 1px solid #dee2e6; padding: 15px; background: #f8f9fa; margin-bottom: 24px; }
.test h3, .totals h2 { text-align: center; }
.grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 10px; justify-items: center; }
.gauge svg { max-width: 100%; height: auto; }
.empty { text-align: center; color: #6c757d; }
"#
}
