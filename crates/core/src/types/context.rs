use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Execution Context
// =============================================================================

/// Read-only snapshot of the invocation state handed to toolsets.
///
/// Toolsets receive this when listing tools so they can tailor the listing
/// to the current agent or session. Pass-through toolsets accept it purely
/// for interface conformance and never read it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadonlyContext {
    /// Name of the agent requesting tools.
    pub agent_name: String,

    /// Unique id of the current invocation.
    pub invocation_id: String,

    /// Session state at the time of the snapshot.
    state: Map<String, Value>,
}

impl ReadonlyContext {
    /// Create a context for the given agent with a fresh invocation id.
    pub fn new(agent_name: impl Into<String>) -> Self {
        Self {
            agent_name: agent_name.into(),
            invocation_id: uuid::Uuid::new_v4().to_string(),
            state: Map::new(),
        }
    }

    /// Attach session state to the snapshot.
    pub fn with_state(mut self, state: Map<String, Value>) -> Self {
        self.state = state;
        self
    }

    /// The full state mapping.
    pub fn state(&self) -> &Map<String, Value> {
        &self.state
    }

    /// Look up a single state entry.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.state.get(key)
    }
}
