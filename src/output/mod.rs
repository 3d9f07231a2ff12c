//! Output rendering for verdicts
//!
//! This module provides:
//! - Short status text for the commit status description
//! - HTML report for the report file
//! - Markdown body for the pull request comment
//! - Text output for human-readable terminal display
//! - JSON output for machine processing

mod html;
mod json;
mod markdown;
mod short;
mod text;

pub use html::render_html;
pub use json::{render_json, write_json};
pub use markdown::{render_comment, COMMENT_HEADER};
pub use short::render_short_text;
pub use text::TextFormatter;

use crate::domain::{EvaluationOptions, Verdict};

/// Rendered when no checked category has unstable entries
pub const ALL_FIXED: &str = "All dependencies are fixed";

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Minimal output
    Quiet,
    /// Normal output
    #[default]
    Normal,
    /// Detailed output with additional information
    Verbose,
}

impl Verbosity {
    /// Derive verbosity from CLI flags; quiet wins over verbose
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// The three textual forms handed to delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// One-line status summary
    pub short_text: String,
    /// HTML report
    pub html: String,
    /// Markdown comment body
    pub comment: String,
}

impl Rendered {
    /// Render all forms from the same verdict
    pub fn new(verdict: &Verdict, options: &EvaluationOptions) -> Self {
        Self {
            short_text: render_short_text(verdict, options),
            html: render_html(verdict, options),
            comment: render_comment(verdict, options),
        }
    }
}
