//! Verdict aggregation
//!
//! Classifies every declared entry, keeps the unstable ones per category in
//! declaration order, and derives the overall verdict from the enabled checks.

use crate::classifier::classify_entry;
use crate::domain::{Category, CategoryResult, DependencyEntry, EvaluationOptions, Verdict};
use crate::error::ManifestError;
use crate::manifest::{read_manifest, ManifestLocator};

/// Aggregates both categories into a verdict
pub fn aggregate(
    dependencies: &[DependencyEntry],
    dev_dependencies: &[DependencyEntry],
    options: &EvaluationOptions,
) -> Verdict {
    let verdict = Verdict::new(
        collect_unstable(Category::Dependencies, dependencies),
        collect_unstable(Category::DevDependencies, dev_dependencies),
        options,
    );

    tracing::debug!(
        is_okay = verdict.is_okay(),
        unstable_dependencies = verdict.dependencies().len(),
        unstable_dev_dependencies = verdict.dev_dependencies().len(),
        "aggregated verdict"
    );
    verdict
}

/// Reads the manifest and aggregates it
pub fn evaluate(
    locator: &ManifestLocator,
    options: &EvaluationOptions,
) -> Result<Verdict, ManifestError> {
    let manifest = read_manifest(locator)?;
    Ok(aggregate(
        &manifest.dependencies,
        &manifest.dev_dependencies,
        options,
    ))
}

fn collect_unstable(category: Category, entries: &[DependencyEntry]) -> CategoryResult {
    let unstable = entries
        .iter()
        .cloned()
        .map(classify_entry)
        .filter(|classified| !classified.is_stable())
        .collect();
    CategoryResult::new(category, unstable)
}
