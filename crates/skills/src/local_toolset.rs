//! Registry-backed toolset for in-process tools.

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

use toolbridge_core::{
    traits::{Tool, Toolset},
    types::{ReadonlyContext, ToolDefinition, ToolOutput},
    Error, Result,
};

/// Toolset holding locally executable tools, keyed by name.
pub struct LocalToolset {
    tools: DashMap<String, Arc<dyn Tool>>,
}

impl LocalToolset {
    /// Create an empty toolset.
    pub fn new() -> Self {
        Self {
            tools: DashMap::new(),
        }
    }

    /// Register a tool under its own name.
    pub fn register(&self, tool: Box<dyn Tool>) -> Result<()> {
        let name = tool.name().to_string();
        tracing::info!(tool = %name, "Registering tool");

        if self.tools.contains_key(&name) {
            return Err(Error::internal(format!(
                "Tool '{}' is already registered",
                name
            )));
        }

        self.tools.insert(name, Arc::from(tool));
        Ok(())
    }

    /// Execute a registered tool by name.
    pub async fn execute(&self, name: &str, args: serde_json::Value) -> Result<ToolOutput> {
        let tool = self
            .tools
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::tool_not_found(name))?;

        tracing::debug!(tool = %name, "Executing tool");
        tool.execute(args).await
    }

    /// Definitions of the registered tools, for listings and prompts.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .iter()
            .map(|entry| ToolDefinition {
                name: entry.value().name().to_string(),
                description: entry.value().description().to_string(),
                parameters: entry.value().parameters(),
            })
            .collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for LocalToolset {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Toolset for LocalToolset {
    async fn list_tools(&self, _context: Option<&ReadonlyContext>) -> Result<Vec<Arc<dyn Tool>>> {
        Ok(self.tools.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn close(&self) -> Result<()> {
        tracing::debug!(tools = self.tools.len(), "Closing local toolset");
        self.tools.clear();
        Ok(())
    }
}
