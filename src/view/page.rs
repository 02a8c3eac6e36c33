// src/view/page.rs
//! Page shell: input tabs, form, notices and the results container

use std::fmt::Write;

use crate::view::controller::ViewSnapshot;
use crate::view::renderer::escape_html;
use crate::view::state::InputTab;

const STYLESHEET: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 2rem; color: #1f2937; }
.tabs { display: flex; gap: .5rem; margin-bottom: 1rem; }
.tab-btn { padding: .5rem 1rem; border: 1px solid #d1d5db; border-radius: .5rem; text-decoration: none; color: inherit; }
.tab-btn.active { background: #4f46e5; color: #fff; border-color: #4f46e5; }
.tab-content { display: none; }
.tab-content.active { display: block; }
textarea, input[type=url] { width: 100%; box-sizing: border-box; padding: .75rem; margin-bottom: 1rem; }
.btn { padding: .75rem 1.5rem; border-radius: .5rem; border: none; cursor: pointer; }
.btn-analyze { background: #4f46e5; color: #fff; }
.btn-analyze.loading, .btn-analyze:disabled { opacity: .6; cursor: wait; }
.hidden { display: none; }
.result-section { margin-top: 2rem; }
.skill-tags { display: flex; flex-wrap: wrap; gap: .5rem; }
.skill-tag { background: #eef2ff; padding: .25rem .75rem; border-radius: 999px; font-size: .875rem; }
.focus-area { border: 1px solid #e5e7eb; border-radius: .5rem; padding: 1rem; margin-bottom: 1rem; }
.focus-area-header { display: flex; justify-content: space-between; font-weight: 600; }
.match-score { font-size: 3rem; font-weight: 700; color: #4f46e5; }
.critique-item { border-left: 4px solid #3b82f6; padding: .5rem 1rem; margin-bottom: .5rem; }
.critique-item.warning { border-color: #f59e0b; }
.critique-item.critical { border-color: #ef4444; }
.critique-severity { text-transform: uppercase; font-size: .75rem; font-weight: 700; }
.section-note { margin-top: 1rem; color: #6b7280; font-size: .875rem; }
.report-actions { margin-top: 2rem; text-align: center; }
@media print { .analysis-form, .tabs, .notices, .report-actions { display: none; } }
"#;

pub fn render_page(snapshot: &ViewSnapshot) -> String {
    let mut html = String::with_capacity(8192);

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>AJIPS - Job Posting Analysis</title>
<style>{}</style>
</head>
<body>
<header><h1>AJIPS</h1><p>Automated Job Intelligence Profiling System</p></header>
<main>
"#,
        STYLESHEET
    );

    render_tabs(&mut html, snapshot.active_tab);
    render_form(&mut html, snapshot);
    render_notices(&mut html, snapshot);
    render_results(&mut html, snapshot.results.as_deref());

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

/// Standalone report document, used by the CLI
pub fn render_report_document(title: &str, fragment: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{}</title>
<style>{}</style>
</head>
<body>
<section id="results" class="results">
{}</section>
</body>
</html>
"#,
        escape_html(title),
        STYLESHEET,
        fragment
    )
}

fn render_tabs(html: &mut String, active: InputTab) {
    html.push_str("<nav class=\"tabs\">\n");
    for (tab, label) in [(InputTab::Text, "Paste Text"), (InputTab::Url, "From URL")] {
        let class = if tab == active { "tab-btn active" } else { "tab-btn" };
        let _ = writeln!(
            html,
            r#"    <a class="{}" data-tab="{}" href="/tab/{}">{}</a>"#,
            class, tab, tab, label
        );
    }
    html.push_str("</nav>\n");
}

fn render_form(html: &mut String, snapshot: &ViewSnapshot) {
    let active_class = |tab: InputTab| {
        if tab == snapshot.active_tab {
            "tab-content active"
        } else {
            "tab-content"
        }
    };

    let (button_class, disabled) = if snapshot.submitting {
        ("btn btn-analyze loading", " disabled")
    } else {
        ("btn btn-analyze", "")
    };

    let _ = write!(
        html,
        r#"<form id="analysisForm" class="analysis-form" method="post" action="/analyze">
    <div class="{text_class}" data-content="text">
        <label for="job_text">Job description</label>
        <textarea id="job_text" name="job_text" rows="12" placeholder="Paste the job posting here...">{job_text}</textarea>
    </div>
    <div class="{url_class}" data-content="url">
        <label for="job_url">Job posting URL</label>
        <input type="url" id="job_url" name="job_url" placeholder="https://..." value="{job_url}">
    </div>
    <label for="resume_text">Your resume (optional)</label>
    <textarea id="resume_text" name="resume_text" rows="8" placeholder="Paste your resume to get a match score...">{resume_text}</textarea>
    <button type="submit" class="{button_class}"{disabled}>Analyze Job Posting</button>
</form>
"#,
        text_class = active_class(InputTab::Text),
        url_class = active_class(InputTab::Url),
        job_text = escape_html(&snapshot.fields.job_text),
        job_url = escape_html(&snapshot.fields.job_url),
        resume_text = escape_html(&snapshot.fields.resume_text),
        button_class = button_class,
        disabled = disabled,
    );
}

fn render_notices(html: &mut String, snapshot: &ViewSnapshot) {
    html.push_str("<div class=\"notices\">\n");
    for notice in &snapshot.notices {
        let _ = write!(
            html,
            r#"    <div class="critique-item critical notice" id="notice-{id}">
        <span class="critique-severity">Error</span>
        <p>{message}</p>
        <form method="post" action="/notices/{id}/dismiss"><button type="submit" class="btn">Dismiss</button></form>
    </div>
"#,
            id = notice.id,
            message = escape_html(&notice.message)
        );
    }
    html.push_str("</div>\n");
}

fn render_results(html: &mut String, results: Option<&str>) {
    match results {
        Some(fragment) => {
            let _ = write!(
                html,
                "<section id=\"results\" class=\"results\">\n{}</section>\n",
                fragment
            );
        }
        None => html.push_str("<section id=\"results\" class=\"results hidden\"></section>\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::state::FormFields;
    use scraper::{Html, Selector};

    fn snapshot() -> ViewSnapshot {
        ViewSnapshot {
            active_tab: InputTab::Text,
            fields: FormFields::default(),
            submitting: false,
            notices: Vec::new(),
            results: None,
        }
    }

    fn count(html: &str, selector: &str) -> usize {
        let document = Html::parse_document(html);
        let selector = Selector::parse(selector).unwrap();
        document.select(&selector).count()
    }

    #[test]
    fn active_tab_is_marked() {
        let mut snap = snapshot();
        snap.active_tab = InputTab::Url;
        let html = render_page(&snap);

        assert_eq!(count(&html, r#".tab-btn.active[data-tab="url"]"#), 1);
        assert_eq!(count(&html, r#".tab-content.active[data-content="url"]"#), 1);
        assert_eq!(count(&html, r#".tab-content.active[data-content="text"]"#), 0);
    }

    #[test]
    fn submit_button_disabled_while_in_flight() {
        let mut snap = snapshot();
        assert_eq!(count(&render_page(&snap), "button.btn-analyze[disabled]"), 0);

        snap.submitting = true;
        assert_eq!(count(&render_page(&snap), "button.btn-analyze.loading[disabled]"), 1);
    }

    #[test]
    fn results_container_hidden_when_empty() {
        let mut snap = snapshot();
        assert_eq!(count(&render_page(&snap), "#results.hidden"), 1);

        snap.results = Some("<div class=\"result-header\"></div>".to_string());
        let html = render_page(&snap);
        assert_eq!(count(&html, "#results.hidden"), 0);
        assert_eq!(count(&html, "#results .result-header"), 1);
    }

    #[test]
    fn typed_fields_are_escaped_back_into_the_form() {
        let mut snap = snapshot();
        snap.fields.job_text = "</textarea><script>x</script>".to_string();
        snap.fields.job_url = r#"https://x.io/?q="><b>"#.to_string();

        let html = render_page(&snap);
        assert_eq!(count(&html, "script"), 0);
        assert_eq!(count(&html, "b"), 0);
    }
}
