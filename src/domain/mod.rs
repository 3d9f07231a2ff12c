//! Core domain models for fixed-deps
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency entries and the manifest category they belong to
//! - Specifier kinds and classified entries
//! - Evaluation options and the aggregated verdict

mod dependency;
mod verdict;
mod version_spec;

pub use dependency::{Category, DependencyEntry};
pub use verdict::{CategoryResult, EvaluationOptions, Verdict};
pub use version_spec::{ClassifiedEntry, SpecifierKind};
