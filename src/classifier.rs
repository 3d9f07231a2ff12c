//! Stability classifier for npm version specifiers
//!
//! A specifier is stable only when it names one exact release:
//! - Stable: `1.2.3`, `v1.2.3`, `1.2.3+build.7`
//! - Pre-release: `1.2.3-beta.1`, `1.0.0-rc.1`
//! - Caret / Tilde: `^1.2.3`, `~1.2.3`
//! - Comparison: `>=1.2.3`, `>1.2.3`, `<=1.2.3`, `<1.2.3`, `=1.2.3`
//! - Wildcard: `*`, `x`, `1.x`, `1.2.*`, `1.2`, empty string
//! - Range: `>=1.0.0 <2.0.0`, `1.0.0 - 2.0.0`, `^1.0.0 || ^2.0.0`
//!
//! Anything not recognized (dist-tags, URLs, `file:` paths) is unstable.

use crate::domain::{ClassifiedEntry, DependencyEntry, SpecifierKind};
use regex::Regex;
use semver::Version;
use std::sync::LazyLock;

// `>= 1.2.3` is a single comparator; glue operators to their operand first
static OPERATOR_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([<>=^~]+)\s+").unwrap());
static RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|\||\s-\s|\S\s+\S").unwrap());
static WILDCARD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v?(?:\d+|[xX*])(?:\.(?:\d+|[xX*])){0,2}$").unwrap()
});

/// Returns true if the specifier pins a single stable release.
///
/// Total over any input: unparseable specifiers are unstable.
pub fn classify(specifier: &str) -> bool {
    specifier_kind(specifier).is_stable()
}

/// Determines what kind of specifier this is
pub fn specifier_kind(specifier: &str) -> SpecifierKind {
    let trimmed = specifier.trim();

    if let Some(version) = parse_release(trimmed) {
        return if version.pre.is_empty() {
            SpecifierKind::Exact
        } else {
            SpecifierKind::Prerelease
        };
    }

    let normalized = OPERATOR_SPACE_RE.replace_all(trimmed, "$1");

    if RANGE_RE.is_match(&normalized) {
        return SpecifierKind::Range;
    }

    if normalized.is_empty() || WILDCARD_RE.is_match(&normalized) {
        return SpecifierKind::Wildcard;
    }

    match normalized.chars().next() {
        Some('^') => SpecifierKind::Caret,
        Some('~') => SpecifierKind::Tilde,
        Some('>' | '<' | '=') => SpecifierKind::Comparison,
        _ => SpecifierKind::Other,
    }
}

/// Classifies a manifest entry
pub fn classify_entry(entry: DependencyEntry) -> ClassifiedEntry {
    let kind = specifier_kind(&entry.version_specifier);
    ClassifiedEntry::new(entry, kind)
}

/// Parses a strict `MAJOR.MINOR.PATCH[-pre][+build]` version, allowing one leading `v`
fn parse_release(specifier: &str) -> Option<Version> {
    let candidate = specifier.strip_prefix('v').unwrap_or(specifier);
    Version::parse(candidate).ok()
}
