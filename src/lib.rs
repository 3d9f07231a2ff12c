//! fixed-deps - dependency pinning check library
//!
//! This library provides the core functionality for checking that every
//! dependency declared in a package.json is fixed to an exact release:
//! - Manifest reading (package.json)
//! - Version specifier classification
//! - Verdict aggregation with per-category check policy
//! - Rendering (status text, HTML report, Markdown comment)
//! - Delivery to GitHub commit statuses and pull request comments

pub mod classifier;
pub mod cli;
pub mod context;
pub mod delivery;
pub mod domain;
pub mod error;
pub mod evaluation;
pub mod manifest;
pub mod orchestrator;
pub mod output;
