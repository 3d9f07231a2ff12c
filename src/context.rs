//! Runtime context supplied by the CI environment
//!
//! Variables:
//! - `GITHUB_CONTEXT`: JSON dump of the workflow context (`toJson(github)`)
//! - `GITHUB_TOKEN`: token used for the status and comment API calls
//! - `GITHUB_API_URL`: optional API base URL (GitHub Enterprise)

use crate::error::ContextError;
use serde::Deserialize;

/// Name of the variable holding the workflow context
pub const GITHUB_CONTEXT_VAR: &str = "GITHUB_CONTEXT";

/// Name of the variable holding the API token
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Name of the variable overriding the API base URL
pub const GITHUB_API_URL_VAR: &str = "GITHUB_API_URL";

/// Public GitHub API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// The subset of the workflow context this tool needs
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GitHubContext {
    /// `owner/name`
    pub repository: String,
    /// Commit that triggered the workflow
    pub sha: String,
    /// Event payload
    #[serde(default)]
    pub event: GitHubEvent,
}

/// Event payload of the workflow context
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GitHubEvent {
    /// Present on `pull_request` events
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
}

/// Pull request of a `pull_request` event
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
    /// Pull request number
    pub number: u64,
    /// Head of the pull request branch
    pub head: PullRequestHead,
}

/// Head commit of a pull request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequestHead {
    /// Head commit SHA
    pub sha: String,
}

impl GitHubContext {
    /// Parse the JSON workflow context and check the repository format
    pub fn from_json(json: &str) -> Result<Self, ContextError> {
        let context: GitHubContext = serde_json::from_str(json)
            .map_err(|e| ContextError::invalid(GITHUB_CONTEXT_VAR, e.to_string()))?;

        match context.repository.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() => Ok(context),
            _ => Err(ContextError::invalid(
                GITHUB_CONTEXT_VAR,
                format!(
                    "repository '{}' is not of the form owner/name",
                    context.repository
                ),
            )),
        }
    }

    /// Repository owner
    pub fn owner(&self) -> &str {
        self.repository
            .split_once('/')
            .map(|(owner, _)| owner)
            .unwrap_or(&self.repository)
    }

    /// Repository name without the owner
    pub fn repo(&self) -> &str {
        self.repository
            .split_once('/')
            .map(|(_, name)| name)
            .unwrap_or(&self.repository)
    }

    /// Commit the status is attached to: the PR head on pull requests
    pub fn status_sha(&self) -> &str {
        self.event
            .pull_request
            .as_ref()
            .map(|pr| pr.head.sha.as_str())
            .unwrap_or(&self.sha)
    }

    /// Pull request number, if the run was triggered by one
    pub fn pull_request_number(&self) -> Option<u64> {
        self.event.pull_request.as_ref().map(|pr| pr.number)
    }
}

/// Everything the GitHub delivery needs, validated up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeContext {
    /// Parsed workflow context
    pub github: GitHubContext,
    /// API token
    pub token: String,
    /// API base URL without trailing slash
    pub api_url: String,
}

impl RuntimeContext {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ContextError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ContextError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ContextError::missing(name))
        };

        let github = GitHubContext::from_json(&required(GITHUB_CONTEXT_VAR)?)?;
        let token = required(GITHUB_TOKEN_VAR)?;
        let api_url = lookup(GITHUB_API_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            github,
            token,
            api_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const PUSH_CONTEXT: &str = r#"{
        "repository": "octo-org/app",
        "sha": "abc123",
        "event": {}
    }"#;

    const PR_CONTEXT: &str = r#"{
        "repository": "octo-org/app",
        "sha": "merge456",
        "event": {
            "pull_request": {
                "number": 42,
                "head": { "sha": "head789" }
            }
        }
    }"#;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_push_context() {
        let context = GitHubContext::from_json(PUSH_CONTEXT).unwrap();
        assert_eq!(context.owner(), "octo-org");
        assert_eq!(context.repo(), "app");
        assert_eq!(context.status_sha(), "abc123");
        assert_eq!(context.pull_request_number(), None);
    }

    #[test]
    fn test_pull_request_context() {
        let context = GitHubContext::from_json(PR_CONTEXT).unwrap();
        assert_eq!(context.status_sha(), "head789");
        assert_eq!(context.pull_request_number(), Some(42));
    }

    #[test]
    fn test_context_without_event() {
        let context =
            GitHubContext::from_json(r#"{"repository": "o/r", "sha": "s"}"#).unwrap();
        assert_eq!(context.pull_request_number(), None);
    }

    #[test]
    fn test_invalid_json() {
        let err = GitHubContext::from_json("not json").unwrap_err();
        assert!(matches!(err, ContextError::Invalid { .. }));
    }

    #[test]
    fn test_repository_without_owner() {
        let err = GitHubContext::from_json(r#"{"repository": "app", "sha": "s"}"#).unwrap_err();
        assert!(format!("{}", err).contains("owner/name"));
    }

    #[test]
    fn test_runtime_context_from_lookup() {
        let context = RuntimeContext::from_lookup(lookup(&[
            (GITHUB_CONTEXT_VAR, PUSH_CONTEXT),
            (GITHUB_TOKEN_VAR, "secret"),
        ]))
        .unwrap();
        assert_eq!(context.token, "secret");
        assert_eq!(context.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_runtime_context_custom_api_url() {
        let context = RuntimeContext::from_lookup(lookup(&[
            (GITHUB_CONTEXT_VAR, PUSH_CONTEXT),
            (GITHUB_TOKEN_VAR, "secret"),
            (GITHUB_API_URL_VAR, "https://github.example.com/api/v3/"),
        ]))
        .unwrap();
        assert_eq!(context.api_url, "https://github.example.com/api/v3");
    }

    #[test]
    fn test_missing_context() {
        let err = RuntimeContext::from_lookup(lookup(&[(GITHUB_TOKEN_VAR, "secret")])).unwrap_err();
        match err {
            ContextError::Missing { name } => assert_eq!(name, GITHUB_CONTEXT_VAR),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_token_is_missing() {
        let err = RuntimeContext::from_lookup(lookup(&[
            (GITHUB_CONTEXT_VAR, PUSH_CONTEXT),
            (GITHUB_TOKEN_VAR, ""),
        ]))
        .unwrap_err();
        match err {
            ContextError::Missing { name } => assert_eq!(name, GITHUB_TOKEN_VAR),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
