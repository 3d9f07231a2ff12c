//! Run orchestrator for the dependency check
//!
//! This module provides:
//! - Workflow coordination: pending status → evaluate → report → final status → comment
//! - Failure status when the evaluation cannot complete
//! - Delivery injection so the workflow runs against GitHub or in dry-run mode

use crate::delivery::{write_report, Delivery, StatusState, StatusUpdate, DEFAULT_REPORT_DIR};
use crate::domain::{EvaluationOptions, Verdict};
use crate::error::AppError;
use crate::evaluation::evaluate;
use crate::manifest::ManifestLocator;
use crate::output::Rendered;
use std::path::PathBuf;

/// Default status context
pub const DEFAULT_STEP: &str = "fixed-dependencies";

/// Settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// Where the manifest lives
    pub locator: ManifestLocator,
    /// Which categories gate the verdict
    pub options: EvaluationOptions,
    /// Directory the HTML report is written to
    pub report_dir: PathBuf,
    /// Status context name
    pub step: String,
    /// Whether to post the Markdown comment
    pub post_comment: bool,
}

impl RunSettings {
    /// Settings with default report directory and step name
    pub fn new(locator: ManifestLocator, options: EvaluationOptions) -> Self {
        Self {
            locator,
            options,
            report_dir: PathBuf::from(DEFAULT_REPORT_DIR),
            step: DEFAULT_STEP.to_string(),
            post_comment: false,
        }
    }
}

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Aggregated verdict
    pub verdict: Verdict,
    /// Rendered forms of the verdict
    pub rendered: Rendered,
    /// Path of the written HTML report
    pub report_path: PathBuf,
    /// Whether a comment was posted
    pub commented: bool,
}

impl RunOutcome {
    /// Returns true if the check passed
    pub fn is_okay(&self) -> bool {
        self.verdict.is_okay()
    }
}

/// Orchestrator for the check workflow
pub struct Orchestrator {
    settings: RunSettings,
    delivery: Box<dyn Delivery>,
}

impl Orchestrator {
    /// Create a new orchestrator
    pub fn new(settings: RunSettings, delivery: Box<dyn Delivery>) -> Self {
        Self { settings, delivery }
    }

    /// Run the workflow
    pub async fn run(&self) -> Result<RunOutcome, AppError> {
        let step = &self.settings.step;
        self.delivery.set_status(&StatusUpdate::pending(step)).await?;

        let (verdict, rendered, report_path) = match self.evaluate_and_report() {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(error = %e, "{} failed", step);
                if let Err(status_err) = self.delivery.set_status(&StatusUpdate::failed(step)).await {
                    tracing::warn!(error = %status_err, "could not report failure status");
                }
                return Err(e);
            }
        };

        let state = StatusState::from_outcome(verdict.is_okay());
        self.delivery
            .set_status(&StatusUpdate::new(step.as_str(), state, rendered.short_text.as_str()))
            .await?;

        let commented = if self.settings.post_comment {
            self.delivery.post_comment(&rendered.comment).await?
        } else {
            false
        };

        tracing::info!(is_okay = verdict.is_okay(), summary = %rendered.short_text, "check finished");

        Ok(RunOutcome {
            verdict,
            rendered,
            report_path,
            commented,
        })
    }

    fn evaluate_and_report(&self) -> Result<(Verdict, Rendered, PathBuf), AppError> {
        let options = &self.settings.options;
        let verdict = evaluate(&self.settings.locator, options)?;
        let rendered = Rendered::new(&verdict, options);
        let report_path = write_report(&self.settings.report_dir, &rendered.html)?;
        Ok((verdict, rendered, report_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DeliveryError, ManifestError};
    use async_trait::async_trait;
    use std::fs;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Status(StatusState, String),
        Comment(String),
    }

    #[derive(Clone, Default)]
    struct RecordingDelivery {
        events: Arc<Mutex<Vec<Event>>>,
        is_pull_request: bool,
    }

    impl RecordingDelivery {
        fn events(&self) -> Vec<Event> {
            self.events.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Delivery for RecordingDelivery {
        async fn set_status(&self, update: &StatusUpdate) -> Result<(), DeliveryError> {
            self.events
                .lock()
                .unwrap()
                .push(Event::Status(update.state, update.description.clone()));
            Ok(())
        }

        async fn post_comment(&self, body: &str) -> Result<bool, DeliveryError> {
            if !self.is_pull_request {
                return Ok(false);
            }
            self.events
                .lock()
                .unwrap()
                .push(Event::Comment(body.to_string()));
            Ok(true)
        }
    }

    struct FailingDelivery;

    #[async_trait]
    impl Delivery for FailingDelivery {
        async fn set_status(&self, _update: &StatusUpdate) -> Result<(), DeliveryError> {
            Err(DeliveryError::rejected("commit status", 403, "Resource not accessible"))
        }

        async fn post_comment(&self, _body: &str) -> Result<bool, DeliveryError> {
            Ok(false)
        }
    }

    fn project(manifest: Option<&str>) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        if let Some(content) = manifest {
            fs::write(dir.path().join("package.json"), content).unwrap();
        }
        dir
    }

    fn settings(dir: &TempDir, options: EvaluationOptions) -> RunSettings {
        let mut settings = RunSettings::new(
            ManifestLocator::WorkingDir(dir.path().to_path_buf()),
            options,
        );
        settings.report_dir = dir.path().join("dependencies");
        settings
    }

    #[test]
    fn test_run_settings_defaults() {
        let settings = RunSettings::new(
            ManifestLocator::WorkingDir(PathBuf::from(".")),
            EvaluationOptions::default(),
        );
        assert_eq!(settings.report_dir, PathBuf::from("dependencies"));
        assert_eq!(settings.step, "fixed-dependencies");
        assert!(!settings.post_comment);
    }

    #[tokio::test]
    async fn test_run_passing_manifest() {
        let dir = project(Some(r#"{"dependencies": {"a": "1.0.0"}, "devDependencies": {}}"#));
        let delivery = RecordingDelivery::default();
        let orchestrator = Orchestrator::new(
            settings(&dir, EvaluationOptions::default()),
            Box::new(delivery.clone()),
        );

        let outcome = orchestrator.run().await.unwrap();

        assert!(outcome.is_okay());
        assert_eq!(outcome.rendered.short_text, "All dependencies are fixed");
        assert_eq!(
            fs::read_to_string(&outcome.report_path).unwrap(),
            "All dependencies are fixed"
        );
        assert_eq!(
            delivery.events(),
            vec![
                Event::Status(StatusState::Pending, "Running fixed-dependencies".into()),
                Event::Status(StatusState::Success, "All dependencies are fixed".into()),
            ]
        );
    }

    #[tokio::test]
    async fn test_run_failing_manifest_posts_comment() {
        let dir = project(Some(
            r#"{"dependencies": {"a": "^1.0.0", "b": "2.0.0"}, "devDependencies": {"c": "*"}}"#,
        ));
        let delivery = RecordingDelivery {
            is_pull_request: true,
            ..Default::default()
        };
        let mut settings = settings(&dir, EvaluationOptions::new(true, false));
        settings.post_comment = true;
        let orchestrator = Orchestrator::new(settings, Box::new(delivery.clone()));

        let outcome = orchestrator.run().await.unwrap();

        assert!(!outcome.is_okay());
        assert!(outcome.commented);
        let html = fs::read_to_string(&outcome.report_path).unwrap();
        assert!(html.contains("<li>a: ^1.0.0</li>"));
        assert!(!html.contains("Dev dependencies"));

        let events = delivery.events();
        assert_eq!(
            events[1],
            Event::Status(StatusState::Failure, "1 unfixed dependencies".into())
        );
        match &events[2] {
            Event::Comment(body) => assert!(body.contains("- a: ^1.0.0")),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_comment_skipped_when_disabled() {
        let dir = project(Some(r#"{"dependencies": {"a": "^1.0.0"}}"#));
        let delivery = RecordingDelivery {
            is_pull_request: true,
            ..Default::default()
        };
        let orchestrator = Orchestrator::new(
            settings(&dir, EvaluationOptions::default()),
            Box::new(delivery.clone()),
        );

        let outcome = orchestrator.run().await.unwrap();

        assert!(!outcome.commented);
        assert_eq!(delivery.events().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_manifest_reports_failure_without_report() {
        let dir = project(None);
        let delivery = RecordingDelivery::default();
        let settings = settings(&dir, EvaluationOptions::default());
        let report_dir = settings.report_dir.clone();
        let orchestrator = Orchestrator::new(settings, Box::new(delivery.clone()));

        let err = orchestrator.run().await.unwrap_err();

        assert!(matches!(
            err,
            AppError::Manifest(ManifestError::NotFound { .. })
        ));
        assert!(!report_dir.exists());
        assert_eq!(
            delivery.events(),
            vec![
                Event::Status(StatusState::Pending, "Running fixed-dependencies".into()),
                Event::Status(StatusState::Failure, "Failed: fixed-dependencies".into()),
            ]
        );
    }

    #[tokio::test]
    async fn test_malformed_manifest_is_fatal() {
        let dir = project(Some("{ not json"));
        let orchestrator = Orchestrator::new(
            settings(&dir, EvaluationOptions::default()),
            Box::new(RecordingDelivery::default()),
        );

        let err = orchestrator.run().await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Manifest(ManifestError::ParseError { .. })
        ));
    }

    #[tokio::test]
    async fn test_delivery_failure_is_fatal() {
        let dir = project(Some(r#"{"dependencies": {"a": "1.0.0"}}"#));
        let orchestrator = Orchestrator::new(
            settings(&dir, EvaluationOptions::default()),
            Box::new(FailingDelivery),
        );

        let err = orchestrator.run().await.unwrap_err();
        assert!(matches!(err, AppError::Delivery(DeliveryError::Rejected { .. })));
    }
}
