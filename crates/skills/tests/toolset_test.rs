use std::sync::Arc;

use serde_json::{json, Map};
use toolbridge_core::traits::{Tool, Toolset};
use toolbridge_core::types::{ReadonlyContext, ToolOutput};
use toolbridge_skills::{LocalToolset, RemoteServerConfig, RemoteServerSet, RemoteToolset};

// Mock Tool
struct MockLocalTool;

#[async_trait::async_trait]
impl Tool for MockLocalTool {
    fn name(&self) -> &str {
        "local_tool"
    }
    fn description(&self) -> &str {
        "A local tool"
    }
    fn parameters(&self) -> serde_json::Value {
        json!({})
    }
    async fn execute(&self, _args: serde_json::Value) -> toolbridge_core::Result<ToolOutput> {
        Ok(ToolOutput::text("Local tool executed".to_string()))
    }
}

#[tokio::test]
async fn test_toolsets_used_polymorphically() {
    let local = LocalToolset::new();
    local.register(Box::new(MockLocalTool)).unwrap();

    let mut remote = RemoteToolset::new();
    remote
        .add_server("https://tools.example/search", None, None, None, Map::new())
        .unwrap();

    let toolsets: Vec<Arc<dyn Toolset>> = vec![Arc::new(local), Arc::new(remote)];

    let ctx = ReadonlyContext::new("planner");
    let mut listed = Vec::new();
    for toolset in &toolsets {
        listed.extend(toolset.list_tools(Some(&ctx)).await.unwrap());
    }

    // Only the local toolset contributes tool objects; the remote one
    // declares servers without instantiating anything.
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name(), "local_tool");

    // Callers close every toolset unconditionally; both kinds tolerate it.
    for toolset in &toolsets {
        toolset.close().await.unwrap();
        toolset.close().await.unwrap();
    }
}

#[tokio::test]
async fn test_remote_listing_empty_for_any_server_count() {
    let mut toolset = RemoteToolset::new();
    assert!(toolset.list_tools(None).await.unwrap().is_empty());

    for i in 0..5 {
        toolset
            .add_server(
                format!("https://tools.example/server-{}", i),
                None,
                None,
                None,
                Map::new(),
            )
            .unwrap();
    }

    assert_eq!(toolset.len(), 5);
    assert!(toolset.list_tools(None).await.unwrap().is_empty());
    let ctx = ReadonlyContext::new("worker");
    assert!(toolset.list_tools(Some(&ctx)).await.unwrap().is_empty());
}

#[test]
fn test_registration_payload_shape() {
    let mut metadata = Map::new();
    metadata.insert("auth_header".to_string(), json!("x-api-key"));

    let mut toolset = RemoteToolset::new();
    toolset
        .add_server(
            "https://tools.example/search",
            Some("sse"),
            Some("search"),
            Some("Web search capabilities"),
            metadata,
        )
        .unwrap();
    toolset
        .add_server("https://tools.example/fs", Some("http"), None, None, Map::new())
        .unwrap();

    let payload = toolset.server_configs();
    assert_eq!(payload.len(), 2);

    assert_eq!(payload[0]["server_url"], json!("https://tools.example/search"));
    assert_eq!(payload[0]["type"], json!("sse"));
    assert_eq!(payload[0]["name"], json!("search"));
    assert_eq!(payload[0]["description"], json!("Web search capabilities"));
    assert_eq!(payload[0]["auth_header"], json!("x-api-key"));

    assert_eq!(payload[1]["server_url"], json!("https://tools.example/fs"));
    assert_eq!(payload[1]["type"], json!("http"));
    assert!(!payload[1].contains_key("name"));
    assert!(!payload[1].contains_key("description"));
}

#[test]
fn test_prebuilt_set_constructor() {
    let mut set = RemoteServerSet::new();
    set.add(
        RemoteServerConfig::from_url("https://a.example", None)
            .unwrap()
            .with_name("a"),
    );
    set.add(RemoteServerConfig::from_url("https://b.example", Some("websocket")).unwrap());

    let toolset = RemoteToolset::from_config(set);
    assert_eq!(toolset.len(), 2);
    assert!(!toolset.is_empty());

    let payload = toolset.server_configs();
    assert_eq!(payload[0]["name"], json!("a"));
    assert_eq!(payload[1]["type"], json!("websocket"));
}

#[test]
fn test_metadata_collision_flows_through_toolset() {
    let mut metadata = Map::new();
    metadata.insert("type".to_string(), json!("grpc"));

    let mut toolset = RemoteToolset::new();
    toolset
        .add_server("https://tools.example/db", Some("sse"), None, None, metadata)
        .unwrap();

    // Metadata merges after the base fields, so the declared connection
    // type is overwritten in the payload.
    let payload = toolset.server_configs();
    assert_eq!(payload[0]["type"], json!("grpc"));
}
