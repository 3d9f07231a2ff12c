//! Version specifier kinds for package.json entries
//!
//! Only an exact release such as `1.2.3` counts as fixed. Everything else,
//! e.g. `^1.2.3`, `~1.2.3`, `>=1.0.0`, `1.2.3-beta.1`, `*`, `latest`,
//! leaves the resolved version open.

use super::DependencyEntry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a version specifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecifierKind {
    /// Exact release version (e.g., `1.2.3`, `v1.2.3`, `1.2.3+build.5`)
    Exact,
    /// Exact version carrying a pre-release identifier (e.g., `1.2.3-rc.1`)
    Prerelease,
    /// Caret range (e.g., `^1.2.3`)
    Caret,
    /// Tilde range (e.g., `~1.2.3`)
    Tilde,
    /// Single comparator (e.g., `>=1.2.3`, `<2.0.0`, `=1.2.3`)
    Comparison,
    /// Wildcard or partial version (e.g., `*`, `1.x`, `1.2`, empty string)
    Wildcard,
    /// Compound range (e.g., `>=1.0.0 <2.0.0`, `1.0.0 - 2.0.0`, `^1 || ^2`)
    Range,
    /// Anything else: dist-tags, URLs, git and file references
    Other,
}

impl SpecifierKind {
    /// Returns true if this kind pins a single stable release
    pub fn is_stable(&self) -> bool {
        matches!(self, SpecifierKind::Exact)
    }

    /// Short human readable label
    pub fn label(&self) -> &'static str {
        match self {
            SpecifierKind::Exact => "exact",
            SpecifierKind::Prerelease => "pre-release",
            SpecifierKind::Caret => "caret range",
            SpecifierKind::Tilde => "tilde range",
            SpecifierKind::Comparison => "comparison",
            SpecifierKind::Wildcard => "wildcard",
            SpecifierKind::Range => "range",
            SpecifierKind::Other => "unrecognized",
        }
    }
}

impl fmt::Display for SpecifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A dependency entry together with the classification of its specifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedEntry {
    /// The entry as declared in the manifest
    pub entry: DependencyEntry,
    /// What the specifier was recognized as
    pub kind: SpecifierKind,
}

impl ClassifiedEntry {
    /// Creates a new classified entry
    pub fn new(entry: DependencyEntry, kind: SpecifierKind) -> Self {
        Self { entry, kind }
    }

    /// Returns true if the specifier pins a stable release
    pub fn is_stable(&self) -> bool {
        self.kind.is_stable()
    }
}
