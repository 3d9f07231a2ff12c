//! CLI argument parsing module for fixed-deps

use crate::delivery::DEFAULT_REPORT_DIR;
use crate::domain::EvaluationOptions;
use crate::error::ContextError;
use crate::manifest::ManifestLocator;
use crate::orchestrator::{RunSettings, DEFAULT_STEP};
use crate::output::Verbosity;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Parse a boolean input the way workflow inputs are passed: only `true` is true
fn parse_flag(s: &str) -> Result<bool, String> {
    Ok(s.trim().eq_ignore_ascii_case("true"))
}

/// Check package.json for unfixed dependency versions
#[derive(Parser, Debug, Clone)]
#[command(
    name = "fixed-deps",
    version,
    about = "Check package.json for unfixed dependency versions"
)]
pub struct CliArgs {
    /// Directory containing package.json (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    // Manifest location
    /// Workspace root; the manifest is read from <DIR>/<repository>/package.json
    #[arg(long, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Repository name used with --workspace (default: from GITHUB_CONTEXT)
    #[arg(long, value_name = "NAME")]
    pub repository: Option<String>,

    // Check policy
    /// Fail on unfixed entries in "dependencies"
    #[arg(
        long,
        env = "INPUT_CHECK-DEPENDENCIES",
        value_name = "BOOL",
        default_value = "true",
        action = ArgAction::Set,
        value_parser = parse_flag
    )]
    pub check_dependencies: bool,

    /// Fail on unfixed entries in "devDependencies"
    #[arg(
        long,
        env = "INPUT_CHECK-DEV-DEPENDENCIES",
        value_name = "BOOL",
        default_value = "true",
        action = ArgAction::Set,
        value_parser = parse_flag
    )]
    pub check_dev_dependencies: bool,

    // Delivery
    /// Directory the HTML report is written to
    #[arg(long, value_name = "DIR", default_value = DEFAULT_REPORT_DIR)]
    pub output_dir: PathBuf,

    /// Commit status context name
    #[arg(long, value_name = "NAME", default_value = DEFAULT_STEP)]
    pub step: String,

    /// Post the result as a pull request comment
    #[arg(
        long,
        env = "INPUT_POST-COMMENT",
        value_name = "BOOL",
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = parse_flag
    )]
    pub comment: bool,

    // General options
    /// Dry run mode - log statuses and comments instead of posting them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Which categories gate the verdict
    pub fn evaluation_options(&self) -> EvaluationOptions {
        EvaluationOptions::new(self.check_dependencies, self.check_dev_dependencies)
    }

    /// Output verbosity
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.quiet)
    }

    /// Returns true if the repository name must come from somewhere
    pub fn needs_repository(&self) -> bool {
        self.workspace.is_some() && self.repository.is_none()
    }

    /// Resolve the manifest locator; `context_repository` is used when `--repository` is absent
    pub fn locator(&self, context_repository: Option<&str>) -> Result<ManifestLocator, ContextError> {
        let Some(root) = &self.workspace else {
            return Ok(ManifestLocator::WorkingDir(self.path.clone()));
        };

        let repository = self
            .repository
            .as_deref()
            .or(context_repository)
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| ContextError::missing("repository"))?;

        let name = repository.rsplit('/').next().unwrap_or(repository);
        if name.is_empty() || name == "." || name == ".." {
            return Err(ContextError::invalid(
                "repository",
                format!("'{}' does not name a checkout directory", repository),
            ));
        }

        Ok(ManifestLocator::Workspace {
            root: root.clone(),
            repository: repository.to_string(),
        })
    }

    /// Build the run settings
    pub fn run_settings(&self, context_repository: Option<&str>) -> Result<RunSettings, ContextError> {
        let mut settings = RunSettings::new(
            self.locator(context_repository)?,
            self.evaluation_options(),
        );
        settings.report_dir = self.output_dir.clone();
        settings.step = self.step.clone();
        settings.post_comment = self.comment;
        Ok(settings)
    }
}
