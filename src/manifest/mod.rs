//! Manifest location and reading
//!
//! This module provides functionality to:
//! - Locate package.json relative to a working directory or a CI workspace
//! - Read and parse the `dependencies` and `devDependencies` sections

mod package_json;

pub use package_json::parse;

use crate::domain::{Category, DependencyEntry};
use crate::error::ManifestError;
use std::path::{Path, PathBuf};

/// Manifest file name
pub const MANIFEST_FILENAME: &str = "package.json";

/// Where to find the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestLocator {
    /// `<dir>/package.json`
    WorkingDir(PathBuf),
    /// `<root>/<repository>/package.json`, as laid out by CI runners
    Workspace { root: PathBuf, repository: String },
}

impl ManifestLocator {
    /// Directory that contains the manifest
    pub fn directory(&self) -> PathBuf {
        match self {
            ManifestLocator::WorkingDir(dir) => dir.clone(),
            ManifestLocator::Workspace { root, repository } => {
                // "owner/name" resolves to the checkout directory "name"
                let name = repository.rsplit('/').next().unwrap_or(repository);
                root.join(name)
            }
        }
    }

    /// Full path of the manifest file
    pub fn path(&self) -> PathBuf {
        self.directory().join(MANIFEST_FILENAME)
    }
}

/// Dependencies declared in a manifest, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// Entries of `dependencies`
    pub dependencies: Vec<DependencyEntry>,
    /// Entries of `devDependencies`
    pub dev_dependencies: Vec<DependencyEntry>,
}

impl Manifest {
    /// Returns the entries of a category
    pub fn entries(&self, category: Category) -> &[DependencyEntry] {
        match category {
            Category::Dependencies => &self.dependencies,
            Category::DevDependencies => &self.dev_dependencies,
        }
    }
}

/// Reads and parses the manifest the locator points at
pub fn read_manifest(locator: &ManifestLocator) -> Result<Manifest, ManifestError> {
    read_manifest_file(&locator.path())
}

/// Reads and parses a manifest file
pub fn read_manifest_file(path: &Path) -> Result<Manifest, ManifestError> {
    tracing::debug!(path = %path.display(), "reading manifest");

    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ManifestError::not_found(path)
        } else {
            ManifestError::read_error(path, e)
        }
    })?;

    let manifest = parse(&content, path)?;
    tracing::debug!(
        dependencies = manifest.dependencies.len(),
        dev_dependencies = manifest.dev_dependencies.len(),
        "parsed manifest"
    );
    Ok(manifest)
}
