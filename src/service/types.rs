//! Wire types for the research service API

use serde::Deserialize;

use crate::error::CrewError;

/// A single research invocation. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct ResearchRequest {
    /// Topic to research (must be non-empty)
    pub topic: String,

    /// Research depth; `None` falls back to the configured default
    pub depth: Option<String>,
}

impl ResearchRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            depth: None,
        }
    }

    pub fn with_depth(mut self, depth: impl Into<String>) -> Self {
        self.depth = Some(depth.into());
        self
    }
}

/// Success body of `POST /research`
#[derive(Debug, Clone, Deserialize)]
pub struct ResearchReport {
    #[serde(default)]
    pub topic: String,

    /// The finished article/report text
    pub result: String,

    /// Wall-clock seconds the workflow took, as measured by the service
    pub duration_seconds: f64,

    #[serde(default)]
    pub model: Option<String>,

    /// Agents that contributed, in execution order. Absent means none
    /// were reported, not that the field is invalid.
    #[serde(default)]
    pub agents_used: Vec<String>,
}

/// Body of `GET /health`. The service reports `degraded` with a hint when
/// its Ollama backend is unreachable, so most fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthReport {
    pub status: String,

    #[serde(default)]
    pub ollama: Option<String>,

    #[serde(default)]
    pub available_models: Vec<String>,

    #[serde(default)]
    pub configured_model: Option<String>,

    #[serde(default)]
    pub hint: Option<String>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Body of `GET /models` (the Ollama tags payload the service proxies)
#[derive(Debug, Deserialize)]
pub(crate) struct ModelTags {
    #[serde(default)]
    pub models: Vec<ModelTag>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ModelTag {
    pub name: String,
}

/// Terminal outcome of one research invocation.
///
/// Exactly one variant is produced per call; there are no partial states.
/// Every variant carries enough text for the caller to act on without
/// access to logs - the typical caller is an automation agent, not a
/// developer with a debugger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The service completed the workflow; carries the result text
    Success(String),

    /// The service was reachable but answered with a failure status
    RemoteError { status: u16, body: String },

    /// The service never answered (unreachable or deadline exceeded)
    TransportError { message: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Collapse the outcome into a single descriptive string: the result
    /// text on success, otherwise a failure description.
    pub fn into_text(self) -> String {
        match self {
            Outcome::Success(text) => text,
            Outcome::RemoteError { status, body } => {
                CrewError::Service { status, body }.to_string()
            }
            Outcome::TransportError { message } => message,
        }
    }
}
