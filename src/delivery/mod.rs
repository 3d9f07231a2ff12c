//! Delivery of results to the outside world
//!
//! This module provides:
//! - The `Delivery` seam for commit statuses and pull request comments
//! - A GitHub REST implementation with retry logic
//! - A dry-run implementation that only logs
//! - The HTML report file writer

mod github;
mod report_file;

pub use github::{GitHubClient, GitHubDelivery};
pub use report_file::{write_report, DEFAULT_REPORT_DIR, REPORT_FILENAME};

use crate::error::DeliveryError;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

/// State of a commit status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusState {
    /// Check is running
    Pending,
    /// Check passed
    Success,
    /// Check found problems or could not run
    Failure,
}

impl StatusState {
    /// Success or failure for a finished check
    pub fn from_outcome(is_okay: bool) -> Self {
        if is_okay {
            StatusState::Success
        } else {
            StatusState::Failure
        }
    }

    /// Wire name of the state
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusState::Pending => "pending",
            StatusState::Success => "success",
            StatusState::Failure => "failure",
        }
    }
}

impl fmt::Display for StatusState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A status update keyed by the step name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    /// Status context, e.g. `fixed-dependencies`
    pub step: String,
    /// State to report
    pub state: StatusState,
    /// Human readable description
    pub description: String,
}

impl StatusUpdate {
    /// Creates a new status update
    pub fn new(step: impl Into<String>, state: StatusState, description: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            state,
            description: description.into(),
        }
    }

    /// `Running <step>`
    pub fn pending(step: &str) -> Self {
        Self::new(step, StatusState::Pending, format!("Running {}", step))
    }

    /// `Failed: <step>`
    pub fn failed(step: &str) -> Self {
        Self::new(step, StatusState::Failure, format!("Failed: {}", step))
    }
}

/// Trait for delivering statuses and comments
#[async_trait]
pub trait Delivery: Send + Sync {
    /// Post a commit status
    async fn set_status(&self, update: &StatusUpdate) -> Result<(), DeliveryError>;

    /// Post a pull request comment; returns false when there is no pull request
    async fn post_comment(&self, body: &str) -> Result<bool, DeliveryError>;
}

/// Delivery that only logs what would be sent
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunDelivery;

#[async_trait]
impl Delivery for DryRunDelivery {
    async fn set_status(&self, update: &StatusUpdate) -> Result<(), DeliveryError> {
        tracing::info!(
            step = %update.step,
            state = %update.state,
            description = %update.description,
            "dry-run: skipping commit status"
        );
        Ok(())
    }

    async fn post_comment(&self, body: &str) -> Result<bool, DeliveryError> {
        tracing::info!(bytes = body.len(), "dry-run: skipping pull request comment");
        Ok(false)
    }
}
