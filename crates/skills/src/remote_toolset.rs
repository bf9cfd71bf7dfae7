//! Pass-through toolset for remotely hosted tool servers.
//!
//! Unlike [`crate::LocalToolset`], this toolset never instantiates tools
//! in-process. It only accumulates server declarations for the hosting
//! framework to forward to the remote execution platform.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

use toolbridge_core::{
    traits::{Tool, Toolset},
    types::ReadonlyContext,
    Result,
};

use crate::remote_config::{RemoteServerConfig, RemoteServerSet};

/// Toolset declaring remote tool servers.
///
/// Owns its [`RemoteServerSet`] exclusively; the set is not meant to be
/// shared across toolsets or mutated from multiple contexts.
#[derive(Debug, Default)]
pub struct RemoteToolset {
    config: RemoteServerSet,
}

impl RemoteToolset {
    /// Create an empty toolset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a toolset seeded with a single server.
    pub fn with_server(
        server_url: impl Into<String>,
        connection_type: Option<&str>,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Self> {
        let mut toolset = Self::new();
        toolset.add_server(server_url, connection_type, name, description, Map::new())?;
        Ok(toolset)
    }

    /// Create a toolset around a pre-built server set.
    pub fn from_config(config: RemoteServerSet) -> Self {
        Self { config }
    }

    /// Add a server by URL.
    ///
    /// `connection_type` defaults to "sse". `metadata` entries end up
    /// merged into the server's registration payload.
    pub fn add_server(
        &mut self,
        server_url: impl Into<String>,
        connection_type: Option<&str>,
        name: Option<&str>,
        description: Option<&str>,
        metadata: Map<String, Value>,
    ) -> Result<()> {
        let mut config = RemoteServerConfig::from_url(server_url, connection_type)?;
        if let Some(name) = name {
            config = config.with_name(name);
        }
        if let Some(description) = description {
            config = config.with_description(description);
        }
        config = config.with_metadata(metadata);

        tracing::info!(
            server = %config.server_url,
            connection_type = %config.connection_type,
            "Added remote tool server"
        );
        self.config.add(config);
        Ok(())
    }

    /// Add a pre-built server config.
    pub fn add_server_config(&mut self, config: RemoteServerConfig) {
        tracing::info!(server = %config.server_url, "Added remote tool server");
        self.config.add(config);
    }

    /// Server declarations in the platform's registration payload shape.
    ///
    /// This is what the hosting framework forwards to the remote platform.
    pub fn server_configs(&self) -> Vec<Map<String, Value>> {
        self.config.to_platform_format()
    }

    /// Number of configured servers.
    pub fn len(&self) -> usize {
        self.config.len()
    }

    /// Whether no servers are configured.
    pub fn is_empty(&self) -> bool {
        self.config.is_empty()
    }
}

#[async_trait]
impl Toolset for RemoteToolset {
    /// Always empty: the configured servers execute tools remotely, so no
    /// local tool objects exist to list. Returning entries here would
    /// collide with local execution paths.
    async fn list_tools(&self, _context: Option<&ReadonlyContext>) -> Result<Vec<Arc<dyn Tool>>> {
        tracing::info!(
            servers = self.config.len(),
            "Remote toolset configured; tools are executed by the platform"
        );
        Ok(Vec::new())
    }

    /// No local connections exist, so there is nothing to release.
    async fn close(&self) -> Result<()> {
        tracing::debug!("Closing remote toolset (no-op for remote servers)");
        Ok(())
    }
}
