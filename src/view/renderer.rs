// src/view/renderer.rs
//! Result Renderer: turns one analysis response into one HTML fragment

use std::fmt::Write;

use crate::types::{AnalysisResponse, Critique, FocusArea};

const DEFAULT_TITLE: &str = "Job Analysis";
const HIDDEN_SKILLS_NOTE: &str = "These skills are commonly associated with the explicit requirements but weren't directly mentioned.";

/// Escape text for insertion into HTML element content or attribute values
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Fraction in 0..1 as a whole percentage, halves rounded up
pub fn percent(value: f64) -> i64 {
    (value * 100.0 + 0.5).floor() as i64
}

/// Build the complete report fragment. The caller swaps it into the view in one step.
pub fn render_report(report: &AnalysisResponse) -> String {
    let mut html = String::with_capacity(4096);

    render_header(&mut html, report);

    if let Some(alignment) = report.resume_alignment {
        render_resume_match(&mut html, alignment);
    }

    render_focus_areas(&mut html, &report.focus_areas);

    render_skill_section(
        &mut html,
        "explicit-skills",
        "💡",
        "Explicit Skills",
        &report.explicit_skills,
        None,
    );

    if !report.hidden_skills.is_empty() {
        render_skill_section(
            &mut html,
            "hidden-skills",
            "🔍",
            "Hidden Skills",
            &report.hidden_skills,
            Some(HIDDEN_SKILLS_NOTE),
        );
    }

    if !report.interview_stages.is_empty() {
        render_interview_stages(&mut html, &report.interview_stages);
    }

    render_critiques(&mut html, &report.critiques);
    render_print_button(&mut html);

    html
}

fn render_header(html: &mut String, report: &AnalysisResponse) {
    let title = report
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(DEFAULT_TITLE);

    let _ = write!(
        html,
        r#"<div class="result-header">
    <h2 class="result-title">{}</h2>
    <div class="result-summary">{}</div>
</div>
"#,
        escape_html(title),
        escape_html(&report.summary)
    );
}

fn render_resume_match(html: &mut String, alignment: f64) {
    let _ = write!(
        html,
        r#"<div class="result-section" id="resume-match">
    <div class="resume-match">
        <div class="match-score">{}%</div>
        <div class="match-label">Resume Match Score</div>
    </div>
</div>
"#,
        percent(alignment)
    );
}

fn render_focus_areas(html: &mut String, areas: &[FocusArea]) {
    html.push_str(
        r#"<div class="result-section" id="focus-areas">
    <h3><span>🎯</span> Focus Areas</h3>
    <div class="focus-areas">
"#,
    );

    for area in areas {
        let _ = write!(
            html,
            r#"        <div class="focus-area">
            <div class="focus-area-header">
                <div class="focus-area-name">{}</div>
                <div class="focus-area-weight">{}%</div>
            </div>
"#,
            escape_html(&area.name),
            percent(area.weight)
        );
        render_skill_tags(html, &area.skills);
        html.push_str("        </div>\n");
    }

    html.push_str("    </div>\n</div>\n");
}

fn render_skill_section(
    html: &mut String,
    id: &str,
    icon: &str,
    heading: &str,
    skills: &[String],
    note: Option<&str>,
) {
    let _ = write!(
        html,
        r#"<div class="result-section" id="{}">
    <h3><span>{}</span> {} ({})</h3>
"#,
        id,
        icon,
        heading,
        skills.len()
    );
    render_skill_tags(html, skills);

    if let Some(note) = note {
        let _ = writeln!(html, r#"    <p class="section-note">{}</p>"#, escape_html(note));
    }

    html.push_str("</div>\n");
}

fn render_skill_tags(html: &mut String, skills: &[String]) {
    html.push_str(r#"<div class="skill-tags">"#);
    for skill in skills {
        let _ = write!(html, r#"<span class="skill-tag">{}</span>"#, escape_html(skill));
    }
    html.push_str("</div>\n");
}

fn render_interview_stages(html: &mut String, stages: &[String]) {
    let _ = write!(
        html,
        r#"<div class="result-section" id="interview-stages">
    <h3><span>🗂️</span> Interview Stages ({})</h3>
    <ol class="interview-stages">"#,
        stages.len()
    );
    for stage in stages {
        let _ = write!(html, "<li>{}</li>", escape_html(stage));
    }
    html.push_str("</ol>\n</div>\n");
}

fn render_critiques(html: &mut String, critiques: &[Critique]) {
    let _ = write!(
        html,
        r#"<div class="result-section" id="critiques">
    <h3><span>⚠️</span> Requirement Critiques ({})</h3>
    <div class="critique-list">
"#,
        critiques.len()
    );

    for critique in critiques {
        // Severity is a closed enum, safe to use as a class name unescaped.
        let _ = write!(
            html,
            r#"        <div class="critique-item {severity}">
            <span class="critique-severity">{severity}</span>
            <p>{message}</p>
        </div>
"#,
            severity = critique.severity.as_str(),
            message = escape_html(&critique.message)
        );
    }

    html.push_str("    </div>\n</div>\n");
}

fn render_print_button(html: &mut String) {
    html.push_str(
        r#"<div class="report-actions">
    <button type="button" onclick="window.print()" class="btn btn-secondary">Print Report</button>
</div>
"#,
    );
}
