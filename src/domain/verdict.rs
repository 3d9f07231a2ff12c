//! Evaluation options and the aggregated verdict
//!
//! A `Verdict` is built once per run. `is_okay` is derived at construction
//! and can only be read afterwards.

use super::{Category, ClassifiedEntry, DependencyEntry};
use serde::{Deserialize, Serialize};

/// Which categories gate the pass/fail decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationOptions {
    /// Whether `dependencies` participates in the verdict
    pub check_dependencies: bool,
    /// Whether `devDependencies` participates in the verdict
    pub check_dev_dependencies: bool,
}

impl EvaluationOptions {
    /// Creates a new set of options
    pub fn new(check_dependencies: bool, check_dev_dependencies: bool) -> Self {
        Self {
            check_dependencies,
            check_dev_dependencies,
        }
    }

    /// Returns true if the given category is checked
    pub fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::Dependencies => self.check_dependencies,
            Category::DevDependencies => self.check_dev_dependencies,
        }
    }
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self::new(true, true)
    }
}

/// The unstable members of one category, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryResult {
    /// Category these entries were declared in
    pub category: Category,
    unstable: Vec<ClassifiedEntry>,
}

impl CategoryResult {
    /// Creates a new result from the unstable entries of a category
    pub fn new(category: Category, unstable: Vec<ClassifiedEntry>) -> Self {
        Self { category, unstable }
    }

    /// Returns the number of unstable entries
    pub fn len(&self) -> usize {
        self.unstable.len()
    }

    /// Returns true if every entry of the category is fixed
    pub fn is_empty(&self) -> bool {
        self.unstable.is_empty()
    }

    /// Returns the unstable entries with their classification
    pub fn classified(&self) -> &[ClassifiedEntry] {
        &self.unstable
    }

    /// Returns the unstable entries
    pub fn entries(&self) -> impl Iterator<Item = &DependencyEntry> {
        self.unstable.iter().map(|c| &c.entry)
    }
}

/// Aggregated result of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    is_okay: bool,
    dependencies: CategoryResult,
    dev_dependencies: CategoryResult,
}

impl Verdict {
    /// Builds a verdict, deriving `is_okay` from the enabled categories
    pub fn new(
        dependencies: CategoryResult,
        dev_dependencies: CategoryResult,
        options: &EvaluationOptions,
    ) -> Self {
        let gate = |result: &CategoryResult| {
            !options.is_enabled(result.category) || result.is_empty()
        };
        let is_okay = gate(&dependencies) && gate(&dev_dependencies);

        Self {
            is_okay,
            dependencies,
            dev_dependencies,
        }
    }

    /// Returns true if no checked category has unstable entries
    pub fn is_okay(&self) -> bool {
        self.is_okay
    }

    /// Unstable runtime dependencies
    pub fn dependencies(&self) -> &CategoryResult {
        &self.dependencies
    }

    /// Unstable development dependencies
    pub fn dev_dependencies(&self) -> &CategoryResult {
        &self.dev_dependencies
    }

    /// Returns the result for a category
    pub fn category(&self, category: Category) -> &CategoryResult {
        match category {
            Category::Dependencies => &self.dependencies,
            Category::DevDependencies => &self.dev_dependencies,
        }
    }

    /// Categories that belong in a report: enabled and nonempty, in fixed order
    pub fn reported_categories<'a>(
        &'a self,
        options: &'a EvaluationOptions,
    ) -> impl Iterator<Item = &'a CategoryResult> + 'a {
        Category::all()
            .iter()
            .filter(move |c| options.is_enabled(**c))
            .map(move |c| self.category(*c))
            .filter(|r| !r.is_empty())
    }
}
