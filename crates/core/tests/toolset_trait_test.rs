use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use toolbridge_core::traits::{Tool, Toolset};
use toolbridge_core::types::{ReadonlyContext, ToolOutput};
use toolbridge_core::Result;

struct PingTool;

#[async_trait]
impl Tool for PingTool {
    fn name(&self) -> &str {
        "ping"
    }
    fn description(&self) -> &str {
        "Reply with pong"
    }
    fn parameters(&self) -> serde_json::Value {
        json!({})
    }
    async fn execute(&self, _args: serde_json::Value) -> Result<ToolOutput> {
        Ok(ToolOutput::text("pong"))
    }
}

// Minimal fixed-inventory implementor standing in for a local toolset.
struct StaticToolset {
    tools: Vec<Arc<dyn Tool>>,
}

#[async_trait]
impl Toolset for StaticToolset {
    async fn list_tools(&self, _context: Option<&ReadonlyContext>) -> Result<Vec<Arc<dyn Tool>>> {
        Ok(self.tools.clone())
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_listed_tools_are_invocable() {
    let toolset = StaticToolset {
        tools: vec![Arc::new(PingTool)],
    };

    let listed = toolset.list_tools(None).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name(), "ping");

    let output = listed[0].execute(json!({})).await.unwrap();
    assert!(output.success);
    assert_eq!(output.content, "pong");
}

#[tokio::test]
async fn test_listing_accepts_optional_context() {
    let toolset = StaticToolset {
        tools: vec![Arc::new(PingTool)],
    };

    let ctx = ReadonlyContext::new("planner");
    assert_eq!(toolset.list_tools(Some(&ctx)).await.unwrap().len(), 1);
    assert_eq!(toolset.list_tools(None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_close_through_trait_object_is_repeatable() {
    let toolset: Arc<dyn Toolset> = Arc::new(StaticToolset { tools: vec![] });

    toolset.close().await.unwrap();
    toolset.close().await.unwrap();
}
