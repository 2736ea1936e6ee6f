//! HTTP client for the research service
//!
//! This module implements the invocation contract: one POST per research
//! request, bounded by a fixed deadline, with every failure path collapsed
//! into a descriptive [`Outcome`]. Only a malformed success body escapes as
//! an error, since that is a protocol mismatch the caller cannot recover
//! from.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde_json::json;

use crate::config::ServiceConfig;
use crate::error::{CrewError, Result};
use crate::reporter::{LogReporter, ProgressReporter};
use crate::service::types::{HealthReport, ModelTags, Outcome, ResearchReport, ResearchRequest};

/// Bound for the lightweight status endpoints (`/health`, `/models`).
/// These answer immediately or not at all, unlike `/research`.
const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the research service
pub struct ResearchClient {
    http: Client,
    config: ServiceConfig,
    reporter: Arc<dyn ProgressReporter>,
}

impl ResearchClient {
    /// Create a client that reports progress to the log
    pub fn new(config: ServiceConfig) -> Result<Self> {
        Self::with_reporter(config, Arc::new(LogReporter))
    }

    /// Create a client with an explicit progress sink
    pub fn with_reporter(
        config: ServiceConfig,
        reporter: Arc<dyn ProgressReporter>,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| CrewError::Http(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            config,
            reporter,
        })
    }

    /// Run one research invocation.
    ///
    /// Issues exactly one request; the deadline is fixed at client
    /// construction and there is no internal retry. All network and status
    /// failures come back as an [`Outcome`] variant, never as `Err`.
    pub async fn invoke(&self, request: ResearchRequest) -> Result<Outcome> {
        if request.topic.trim().is_empty() {
            return Err(CrewError::InvalidRequest(
                "topic must not be empty".to_string(),
            ));
        }

        let depth = request
            .depth
            .as_deref()
            .unwrap_or(&self.config.depth)
            .to_string();

        self.reporter.report(&format!(
            "Researching '{}' (depth: {})",
            request.topic, depth
        ));

        let url = self.endpoint("/research");
        tracing::debug!(url = %url, topic = %request.topic, "sending research request");

        let response = match self
            .http
            .post(&url)
            .json(&json!({
                "topic": request.topic,
                "depth": depth,
            }))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                return Ok(Outcome::TransportError {
                    message: self.unreachable(e).to_string(),
                });
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            self.reporter.report(&format!(
                "Research request failed with status {}",
                status.as_u16()
            ));
            return Ok(Outcome::RemoteError {
                status: status.as_u16(),
                body,
            });
        }

        let report: ResearchReport = response
            .json()
            .await
            .map_err(|e| CrewError::Malformed(e.to_string()))?;

        self.reporter.report(&format!(
            "Research finished in {}s (agents: {})",
            report.duration_seconds,
            report.agents_used.join(", ")
        ));

        Ok(Outcome::Success(report.result))
    }

    /// Check service health, including its view of the Ollama backend
    pub async fn health(&self) -> Result<HealthReport> {
        let response = self
            .http
            .get(self.endpoint("/health"))
            .timeout(STATUS_TIMEOUT)
            .send()
            .await
            .map_err(|e| self.unreachable(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            return Err(CrewError::Service {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| CrewError::Malformed(e.to_string()))
    }

    /// List model names the service's backend currently has available
    pub async fn models(&self) -> Result<Vec<String>> {
        let response = self
            .http
            .get(self.endpoint("/models"))
            .timeout(STATUS_TIMEOUT)
            .send()
            .await
            .map_err(|e| self.unreachable(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            return Err(CrewError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let tags: ModelTags = response
            .json()
            .await
            .map_err(|e| CrewError::Malformed(e.to_string()))?;

        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn unreachable(&self, e: reqwest::Error) -> CrewError {
        let message = if e.is_timeout() {
            format!("no response within {}s", self.config.timeout().as_secs())
        } else {
            e.to_string()
        };
        CrewError::Unreachable {
            base_url: self.config.base_url.clone(),
            message,
        }
    }
}

impl std::fmt::Debug for ResearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResearchClient")
            .field("base_url", &self.config.base_url)
            .field("timeout_ms", &self.config.timeout_ms)
            .finish()
    }
}
