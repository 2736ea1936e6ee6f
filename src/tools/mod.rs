//! Tool surface for agent hosts
//!
//! Agent platforms call capabilities through a uniform name/schema/execute
//! contract. Each tool folds its own failures into a [`ToolResult`] so the
//! calling agent always gets text it can act on; only protocol mismatches
//! escape as errors.

mod research;

pub use research::ResearchTool;

use async_trait::async_trait;
use serde_json::Value;

/// A capability callable by an agent host
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name as the host invokes it
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters
    fn input_schema(&self) -> Value;

    /// Execute the tool
    async fn execute(&self, input: Value) -> Result<ToolResult, eyre::Error>;
}

/// Result from tool execution
#[derive(Debug, Clone)]
pub struct ToolResult {
    pub content: String,
    pub is_error: bool,
}

impl ToolResult {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: false,
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_result_success() {
        let result = ToolResult::success("report text");
        assert_eq!(result.content, "report text");
        assert!(!result.is_error);
    }

    #[test]
    fn test_tool_result_error() {
        let result = ToolResult::error("service unreachable");
        assert_eq!(result.content, "service unreachable");
        assert!(result.is_error);
    }
}
