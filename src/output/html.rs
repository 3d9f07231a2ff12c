//! HTML report written to the report directory

use crate::domain::{CategoryResult, EvaluationOptions, Verdict};
use crate::output::ALL_FIXED;
use html_escape::encode_text;

/// Renders the HTML report
pub fn render_html(verdict: &Verdict, options: &EvaluationOptions) -> String {
    if verdict.is_okay() {
        return ALL_FIXED.to_string();
    }

    let sections = verdict
        .reported_categories(options)
        .map(render_section)
        .collect::<Vec<_>>()
        .join("<br/>");

    format!("<html><body>{}</body></html>", sections)
}

fn render_section(result: &CategoryResult) -> String {
    let items: String = result
        .entries()
        .map(|entry| {
            format!(
                "<li>{}: {}</li>",
                encode_text(&entry.name),
                encode_text(&entry.version_specifier)
            )
        })
        .collect();

    format!("<h1>{}</h1><ul>{}</ul>", result.category.heading(), items)
}
