//! Dependency information structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// The manifest section a dependency is declared in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Runtime dependencies (`dependencies`)
    Dependencies,
    /// Development dependencies (`devDependencies`)
    DevDependencies,
}

impl Category {
    /// Returns all categories in report order
    pub fn all() -> &'static [Category] {
        &[Category::Dependencies, Category::DevDependencies]
    }

    /// Key of this section in package.json
    pub fn manifest_key(&self) -> &'static str {
        match self {
            Category::Dependencies => "dependencies",
            Category::DevDependencies => "devDependencies",
        }
    }

    /// Heading used in HTML and Markdown reports
    pub fn heading(&self) -> &'static str {
        match self {
            Category::Dependencies => "Dependencies",
            Category::DevDependencies => "Dev dependencies",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.manifest_key())
    }
}

/// A single `name: specifier` pair declared in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyEntry {
    /// Package name
    pub name: String,
    /// Version specifier exactly as written in the manifest
    pub version_specifier: String,
}

impl DependencyEntry {
    /// Creates a new dependency entry
    pub fn new(name: impl Into<String>, version_specifier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version_specifier: version_specifier.into(),
        }
    }
}

impl fmt::Display for DependencyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.version_specifier)
    }
}
