//! Configuration model for remote tool servers.
//!
//! Describes endpoints hosted on an external platform. Nothing here opens
//! a connection; the model only carries the fields the platform's
//! registration payload expects.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use toolbridge_core::{Error, Result};

/// Connection type used when none is given.
pub const DEFAULT_CONNECTION_TYPE: &str = "sse";

/// Configuration for a single remote tool server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteServerConfig {
    /// URL of the remote server. Not checked for well-formedness.
    pub server_url: String,

    /// Connection type, e.g. "sse", "http", "websocket". Free-form.
    pub connection_type: String,

    /// Human-readable name for the server.
    pub name: Option<String>,

    /// Description of the server's capabilities.
    pub description: Option<String>,

    /// Additional metadata merged into the registration payload.
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl RemoteServerConfig {
    /// Create a server config.
    ///
    /// Fails with [`Error::InvalidArgument`] when `server_url` or
    /// `connection_type` is empty.
    pub fn new(
        server_url: impl Into<String>,
        connection_type: impl Into<String>,
        name: Option<String>,
        description: Option<String>,
        metadata: Map<String, Value>,
    ) -> Result<Self> {
        let server_url = server_url.into();
        let connection_type = connection_type.into();

        if server_url.is_empty() {
            return Err(Error::invalid_argument("server_url must not be empty"));
        }
        if connection_type.is_empty() {
            return Err(Error::invalid_argument("connection_type must not be empty"));
        }

        Ok(Self {
            server_url,
            connection_type,
            name,
            description,
            metadata,
        })
    }

    /// Create a config from a URL, defaulting the connection type to
    /// [`DEFAULT_CONNECTION_TYPE`]. Optional fields follow via `with_*`.
    pub fn from_url(
        server_url: impl Into<String>,
        connection_type: Option<&str>,
    ) -> Result<Self> {
        Self::new(
            server_url,
            connection_type.unwrap_or(DEFAULT_CONNECTION_TYPE),
            None,
            None,
            Map::new(),
        )
    }

    /// Set the human-readable name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the metadata mapping.
    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Add one metadata entry.
    pub fn with_metadata_entry(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Convert to the platform's registration payload shape.
    ///
    /// `server_url` and `type` are always present; `name` and `description`
    /// only when non-empty. Metadata merges last and unconditionally: a
    /// metadata key colliding with a reserved key overwrites it. That
    /// last-write-wins merge is part of the payload contract with the
    /// platform.
    pub fn to_platform_format(&self) -> Map<String, Value> {
        let mut payload = Map::new();
        payload.insert(
            "server_url".to_string(),
            Value::String(self.server_url.clone()),
        );
        payload.insert(
            "type".to_string(),
            Value::String(self.connection_type.clone()),
        );

        if let Some(name) = self.name.as_deref().filter(|s| !s.is_empty()) {
            payload.insert("name".to_string(), Value::String(name.to_string()));
        }
        if let Some(description) = self.description.as_deref().filter(|s| !s.is_empty()) {
            payload.insert(
                "description".to_string(),
                Value::String(description.to_string()),
            );
        }

        for (key, value) in &self.metadata {
            payload.insert(key.clone(), value.clone());
        }

        payload
    }
}

/// Ordered collection of remote server configs.
///
/// Insertion order is meaningful: it determines payload order. Duplicate
/// URLs and names are permitted. Entries are never mutated after being
/// added, only appended.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteServerSet {
    #[serde(default)]
    servers: Vec<RemoteServerConfig>,
}

impl RemoteServerSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set from existing configs, preserving their order.
    pub fn from_configs(servers: Vec<RemoteServerConfig>) -> Self {
        Self { servers }
    }

    /// Append a server config.
    pub fn add(&mut self, config: RemoteServerConfig) {
        self.servers.push(config);
    }

    /// Construct a config from a URL and append it.
    pub fn add_url(
        &mut self,
        server_url: impl Into<String>,
        connection_type: Option<&str>,
    ) -> Result<()> {
        let config = RemoteServerConfig::from_url(server_url, connection_type)?;
        self.add(config);
        Ok(())
    }

    /// The configured servers, in insertion order.
    pub fn servers(&self) -> &[RemoteServerConfig] {
        &self.servers
    }

    /// Convert every server to the platform payload shape, in order.
    pub fn to_platform_format(&self) -> Vec<Map<String, Value>> {
        self.servers
            .iter()
            .map(RemoteServerConfig::to_platform_format)
            .collect()
    }

    /// Number of configured servers.
    pub fn len(&self) -> usize {
        self.servers.len()
    }

    /// Whether no servers are configured.
    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}
