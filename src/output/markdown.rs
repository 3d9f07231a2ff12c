//! Markdown body for the pull request comment

use crate::domain::{CategoryResult, EvaluationOptions, Verdict};
use crate::output::ALL_FIXED;

/// First line of the comment when something is unfixed
pub const COMMENT_HEADER: &str =
    "You have unfixed dependencies in your package.json please fix them:";

/// Renders the pull request comment
pub fn render_comment(verdict: &Verdict, options: &EvaluationOptions) -> String {
    if verdict.is_okay() {
        return ALL_FIXED.to_string();
    }

    let sections = verdict
        .reported_categories(options)
        .map(render_section)
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("{}\n\n{}", COMMENT_HEADER, sections)
}

fn render_section(result: &CategoryResult) -> String {
    let items = result
        .entries()
        .map(|entry| {
            format!(
                "- {}: {}",
                escape(&entry.name),
                escape(&entry.version_specifier)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("### {}\n{}", result.category.heading(), items)
}

/// Backslash-escapes inline Markdown syntax and flattens line breaks
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '~' | '|' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\r' | '\n' => escaped.push(' '),
            _ => escaped.push(c),
        }
    }
    escaped
}
