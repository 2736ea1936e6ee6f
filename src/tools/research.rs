//! research tool - invoke the remote research crew on a topic

use async_trait::async_trait;
use serde_json::Value;

use super::{Tool, ToolResult};
use crate::service::{Outcome, ResearchClient, ResearchRequest};

/// Exposes the research service as an agent-callable tool.
///
/// The calling agent sees either the finished report text or a failure
/// description it can relay verbatim; it never has to interpret statuses
/// or transport errors itself.
pub struct ResearchTool {
    client: ResearchClient,
}

impl ResearchTool {
    pub fn new(client: ResearchClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for ResearchTool {
    fn name(&self) -> &'static str {
        "research"
    }

    fn description(&self) -> &'static str {
        "Run the multi-agent research crew on a topic and return a written report. \
         Research can take several minutes for deep topics."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "topic": {
                    "type": "string",
                    "description": "The topic to research"
                },
                "depth": {
                    "type": "string",
                    "description": "Research depth: brief, medium, or deep (default: medium)"
                }
            },
            "required": ["topic"]
        })
    }

    async fn execute(&self, input: Value) -> Result<ToolResult, eyre::Error> {
        let topic = input["topic"].as_str().unwrap_or("").trim();
        if topic.is_empty() {
            return Ok(ToolResult::error("topic is required"));
        }

        let mut request = ResearchRequest::new(topic);
        if let Some(depth) = input["depth"].as_str() {
            request = request.with_depth(depth);
        }

        // Malformed success bodies propagate; every other failure is
        // folded into the result text.
        match self.client.invoke(request).await? {
            Outcome::Success(text) => Ok(ToolResult::success(text)),
            failure => Ok(ToolResult::error(failure.into_text())),
        }
    }
}
