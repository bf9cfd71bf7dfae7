//! Toolset capability traits.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::error::Result;
use crate::types::{ReadonlyContext, ToolOutput};

/// Tool interface for atomic operations.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the unique name of the tool.
    fn name(&self) -> &str;

    /// Get the human-readable description.
    fn description(&self) -> &str;

    /// Get the JSON Schema for parameters.
    fn parameters(&self) -> Value;

    /// Execute the tool with the given arguments.
    async fn execute(&self, args: Value) -> Result<ToolOutput>;
}

/// A group of tools exposed to an agent.
///
/// Implementations fall into two camps: local toolsets that hold invocable
/// tool objects, and pass-through toolsets that only declare remote
/// endpoints and never instantiate tools in this process. Callers treat
/// both uniformly, so `close` must be safe to call on either, any number
/// of times.
#[async_trait]
pub trait Toolset: Send + Sync {
    /// List the tools available in the given context.
    ///
    /// `context` may be `None` when no invocation is in flight.
    async fn list_tools(&self, context: Option<&ReadonlyContext>) -> Result<Vec<Arc<dyn Tool>>>;

    /// Release any resources held by the toolset. Idempotent.
    async fn close(&self) -> Result<()>;
}
