//! One-line status summary used as the commit status description

use crate::domain::{Category, EvaluationOptions, Verdict};
use crate::output::ALL_FIXED;

/// Renders the short status text
pub fn render_short_text(verdict: &Verdict, options: &EvaluationOptions) -> String {
    if verdict.is_okay() {
        return ALL_FIXED.to_string();
    }

    verdict
        .reported_categories(options)
        .map(|result| match result.category {
            Category::Dependencies => format!("{} unfixed dependencies", result.len()),
            Category::DevDependencies => format!("{} unfixed devDependencies", result.len()),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
