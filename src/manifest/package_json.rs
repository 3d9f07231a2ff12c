//! package.json parser
//!
//! Handles:
//! - dependencies
//! - devDependencies
//!
//! A missing section is treated as empty. Entries keep their declaration order.

use crate::domain::{Category, DependencyEntry};
use crate::error::ManifestError;
use crate::manifest::Manifest;
use serde_json::{Map, Value};
use std::path::Path;

/// Parses the contents of a package.json file
pub fn parse(content: &str, path: &Path) -> Result<Manifest, ManifestError> {
    let json: Value =
        serde_json::from_str(content).map_err(|e| ManifestError::parse_error(path, e.to_string()))?;

    let root = json
        .as_object()
        .ok_or_else(|| ManifestError::parse_error(path, "expected a JSON object at the top level"))?;

    Ok(Manifest {
        dependencies: parse_section(root, Category::Dependencies, path)?,
        dev_dependencies: parse_section(root, Category::DevDependencies, path)?,
    })
}

fn parse_section(
    root: &Map<String, Value>,
    category: Category,
    path: &Path,
) -> Result<Vec<DependencyEntry>, ManifestError> {
    let key = category.manifest_key();

    let section = match root.get(key) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Object(section)) => section,
        Some(_) => {
            return Err(ManifestError::parse_error(
                path,
                format!("\"{}\" must be an object", key),
            ))
        }
    };

    section
        .iter()
        .map(|(name, value)| match value.as_str() {
            Some(specifier) => Ok(DependencyEntry::new(name.clone(), specifier)),
            None => Err(ManifestError::parse_error(
                path,
                format!("version of \"{}\" in \"{}\" must be a string", name, key),
            )),
        })
        .collect()
}
