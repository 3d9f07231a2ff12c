//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Colored pass/fail summary line
//! - Unstable entries per checked category, aligned by name
//! - Specifier kinds and unchecked categories in verbose mode

use crate::domain::{CategoryResult, EvaluationOptions, Verdict};
use crate::output::{render_short_text, Verbosity};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

/// Text formatter for terminal output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Format the verdict and the report location
    pub fn format(
        &self,
        verdict: &Verdict,
        options: &EvaluationOptions,
        report: Option<&Path>,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        self.format_summary(verdict, options, writer)?;

        if self.verbosity == Verbosity::Quiet {
            return Ok(());
        }

        for result in verdict.reported_categories(options) {
            writeln!(writer)?;
            self.format_category(result, false, writer)?;
        }

        if self.verbosity == Verbosity::Verbose {
            let unchecked = [verdict.dependencies(), verdict.dev_dependencies()]
                .into_iter()
                .filter(|r| !options.is_enabled(r.category) && !r.is_empty());
            for result in unchecked {
                writeln!(writer)?;
                self.format_category(result, true, writer)?;
            }
        }

        if let Some(path) = report {
            writeln!(writer)?;
            let line = format!("Report written to {}", path.display());
            if self.color {
                writeln!(writer, "{}", line.dimmed())?;
            } else {
                writeln!(writer, "{}", line)?;
            }
        }

        Ok(())
    }

    /// Format just the pass/fail line
    pub fn format_summary(
        &self,
        verdict: &Verdict,
        options: &EvaluationOptions,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let text = render_short_text(verdict, options);
        match (verdict.is_okay(), self.color) {
            (true, true) => writeln!(writer, "{} {}", "✓".green().bold(), text.green()),
            (false, true) => writeln!(writer, "{} {}", "✗".red().bold(), text.red()),
            (true, false) => writeln!(writer, "✓ {}", text),
            (false, false) => writeln!(writer, "✗ {}", text),
        }
    }

    fn format_category(
        &self,
        result: &CategoryResult,
        unchecked: bool,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let heading = result.category.heading();
        match (self.color, unchecked) {
            (true, false) => writeln!(writer, "{}", heading.bold())?,
            (true, true) => writeln!(
                writer,
                "{} {}",
                heading.bold(),
                "(not checked)".dimmed()
            )?,
            (false, false) => writeln!(writer, "{}", heading)?,
            (false, true) => writeln!(writer, "{} (not checked)", heading)?,
        }

        let width = result
            .entries()
            .map(|e| e.name.chars().count())
            .max()
            .unwrap_or(0);

        for classified in result.classified() {
            let name = format!("{:width$}", classified.entry.name, width = width);
            let spec = &classified.entry.version_specifier;
            let kind = if self.verbosity == Verbosity::Verbose {
                format!(" [{}]", classified.kind)
            } else {
                String::new()
            };

            if self.color {
                writeln!(writer, "  {} {}{}", name, spec.yellow(), kind.dimmed())?;
            } else {
                writeln!(writer, "  {} {}{}", name, spec, kind)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DependencyEntry;
    use crate::evaluation::aggregate;

    fn render(verbosity: Verbosity, options: EvaluationOptions, report: Option<&Path>) -> String {
        let verdict = aggregate(
            &[
                DependencyEntry::new("lodash", "^4.17.21"),
                DependencyEntry::new("react", "18.2.0"),
            ],
            &[DependencyEntry::new("jest", "~29.0.0")],
            &options,
        );
        let formatter = TextFormatter::with_color(verbosity, false);
        let mut output = Vec::new();
        formatter
            .format(&verdict, &options, report, &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_quiet_prints_only_summary() {
        let text = render(Verbosity::Quiet, EvaluationOptions::default(), None);
        assert_eq!(
            text,
            "✗ 1 unfixed dependencies, 1 unfixed devDependencies\n"
        );
    }

    #[test]
    fn test_normal_lists_checked_categories() {
        let text = render(
            Verbosity::Normal,
            EvaluationOptions::new(true, false),
            Some(Path::new("dependencies/index.html")),
        );
        assert!(text.starts_with("✗ 1 unfixed dependencies\n"));
        assert!(text.contains("Dependencies\n  lodash ^4.17.21\n"));
        assert!(!text.contains("jest"));
        assert!(text.contains("Report written to dependencies/index.html"));
    }

    #[test]
    fn test_verbose_shows_kind_and_unchecked() {
        let text = render(Verbosity::Verbose, EvaluationOptions::new(true, false), None);
        assert!(text.contains("lodash ^4.17.21 [caret range]"));
        assert!(text.contains("Dev dependencies (not checked)"));
        assert!(text.contains("jest ~29.0.0 [tilde range]"));
    }

    #[test]
    fn test_okay_summary() {
        let options = EvaluationOptions::default();
        let verdict = aggregate(&[DependencyEntry::new("a", "1.0.0")], &[], &options);
        let formatter = TextFormatter::with_color(Verbosity::Normal, false);
        let mut output = Vec::new();
        formatter
            .format(&verdict, &options, None, &mut output)
            .unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "✓ All dependencies are fixed\n"
        );
    }

    #[test]
    fn test_names_are_aligned() {
        let options = EvaluationOptions::default();
        let verdict = aggregate(
            &[
                DependencyEntry::new("a", "^1.0.0"),
                DependencyEntry::new("longer-name", "*"),
            ],
            &[],
            &options,
        );
        let formatter = TextFormatter::with_color(Verbosity::Normal, false);
        let mut output = Vec::new();
        formatter
            .format(&verdict, &options, None, &mut output)
            .unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("  a           ^1.0.0\n"));
        assert!(text.contains("  longer-name *\n"));
    }

    #[test]
    fn test_non_ascii_names_are_aligned_by_characters() {
        let options = EvaluationOptions::default();
        let verdict = aggregate(
            &[
                DependencyEntry::new("émoji-ü", "^1.0.0"),
                DependencyEntry::new("abcdefg", "*"),
            ],
            &[],
            &options,
        );
        let formatter = TextFormatter::with_color(Verbosity::Normal, false);
        let mut output = Vec::new();
        formatter
            .format(&verdict, &options, None, &mut output)
            .unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("  émoji-ü ^1.0.0\n"));
        assert!(text.contains("  abcdefg *\n"));
    }
}
