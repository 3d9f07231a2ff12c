//! GitHub REST delivery
//!
//! This module provides:
//! - An HTTP client with timeout, User-Agent and bearer authentication
//! - Exponential backoff retry for transport errors, 5xx and 429 (max 3 retries)
//! - Commit status and issue comment endpoints

use crate::context::{GitHubContext, RuntimeContext};
use crate::delivery::{Delivery, StatusState, StatusUpdate};
use crate::error::DeliveryError;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;

/// Default timeout for HTTP requests (30 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("fixed-deps/", env!("CARGO_PKG_VERSION"));

/// Maximum number of retry attempts
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (in milliseconds)
const BASE_DELAY_MS: u64 = 100;

/// GitHub rejects status descriptions longer than this
const MAX_DESCRIPTION_CHARS: usize = 140;

/// HTTP client for the GitHub REST API
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    api_url: String,
    token: String,
    max_retries: u32,
}

impl GitHubClient {
    /// Create a new client with default settings
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Result<Self, DeliveryError> {
        Self::with_config(api_url, token, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new client with custom timeout and User-Agent
    pub fn with_config(
        api_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                DeliveryError::network("HTTP client", format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self::with_client(client, api_url, token))
    }

    /// Wrap an existing reqwest client
    pub fn with_client(client: Client, api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            token: token.into(),
            max_retries: MAX_RETRIES,
        }
    }

    /// Set the maximum number of retries
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// POST a JSON body, retrying transient failures
    pub async fn post_json<T>(&self, path: &str, body: &T, target: &str) -> Result<(), DeliveryError>
    where
        T: Serialize + ?Sized + Sync,
    {
        let url = self.url(path);
        let mut last_error = None;
        let mut delay = BASE_DELAY_MS;

        for attempt in 0..=self.max_retries {
            let request = self
                .client
                .post(&url)
                .bearer_auth(&self.token)
                .header(ACCEPT, "application/vnd.github+json")
                .json(body);

            match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        tracing::debug!(request = target, %url, status = status.as_u16(), "posted to GitHub");
                        return Ok(());
                    }

                    let text = response.text().await.unwrap_or_default();
                    let error = DeliveryError::rejected(target, status.as_u16(), text);
                    let transient =
                        status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS;
                    if !transient {
                        return Err(error);
                    }
                    last_error = Some(error);
                }
                Err(e) => {
                    last_error = Some(if e.is_timeout() {
                        DeliveryError::timeout(target)
                    } else {
                        DeliveryError::network(target, e.to_string())
                    });
                }
            }

            if attempt < self.max_retries {
                tracing::warn!(request = target, attempt = attempt + 1, "retrying GitHub request");
                // Wait before retrying with exponential backoff
                tokio::time::sleep(Duration::from_millis(delay)).await;
                delay *= 2;
            }
        }

        Err(last_error.unwrap_or_else(|| DeliveryError::network(target, "unknown error")))
    }
}

#[derive(Serialize)]
struct StatusBody<'a> {
    state: StatusState,
    context: &'a str,
    description: String,
}

#[derive(Serialize)]
struct CommentBody<'a> {
    body: &'a str,
}

/// Delivery to the repository the workflow runs in
pub struct GitHubDelivery {
    client: GitHubClient,
    context: GitHubContext,
}

impl GitHubDelivery {
    /// Creates a new delivery
    pub fn new(client: GitHubClient, context: GitHubContext) -> Self {
        Self { client, context }
    }

    /// Creates a delivery from a validated runtime context
    pub fn from_runtime(runtime: &RuntimeContext) -> Result<Self, DeliveryError> {
        let client = GitHubClient::new(runtime.api_url.clone(), runtime.token.clone())?;
        Ok(Self::new(client, runtime.github.clone()))
    }

    fn status_path(&self) -> String {
        format!(
            "repos/{}/{}/statuses/{}",
            self.context.owner(),
            self.context.repo(),
            self.context.status_sha()
        )
    }

    fn comment_path(&self, number: u64) -> String {
        format!(
            "repos/{}/{}/issues/{}/comments",
            self.context.owner(),
            self.context.repo(),
            number
        )
    }
}

#[async_trait]
impl Delivery for GitHubDelivery {
    async fn set_status(&self, update: &StatusUpdate) -> Result<(), DeliveryError> {
        let body = StatusBody {
            state: update.state,
            context: &update.step,
            description: truncate_description(&update.description),
        };
        tracing::info!(step = %update.step, state = %update.state, "setting commit status");
        self.client
            .post_json(&self.status_path(), &body, "commit status")
            .await
    }

    async fn post_comment(&self, body: &str) -> Result<bool, DeliveryError> {
        let Some(number) = self.context.pull_request_number() else {
            tracing::info!("not a pull request, skipping comment");
            return Ok(false);
        };

        tracing::info!(pull_request = number, "posting comment");
        self.client
            .post_json(&self.comment_path(number), &CommentBody { body }, "comment")
            .await?;
        Ok(true)
    }
}

fn truncate_description(text: &str) -> String {
    if text.chars().count() <= MAX_DESCRIPTION_CHARS {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(MAX_DESCRIPTION_CHARS - 1).collect();
    truncated.push('…');
    truncated
}
