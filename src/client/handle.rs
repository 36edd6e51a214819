//! Agent handle
//!
//! An immutable reference to a remote agent: its identifiers, the API key used
//! to talk to it, and the endpoint it lives on.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::agent::AgentClient;
use super::config::DEFAULT_BASE_URL;
use crate::core::AgentResult;

/// Client-side reference to a remote agent
///
/// `agent_id` and `thread_id` are opaque and never validated locally. A handle
/// never changes after construction; creating another agent yields a new handle.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentHandle {
    agent_id: u64,
    thread_id: String,
    api_key: String,
    base_url: String,
}

impl AgentHandle {
    /// Reference an existing agent without contacting the service
    ///
    /// `base_url` falls back to the production endpoint.
    pub fn new(
        api_key: impl Into<String>,
        agent_id: u64,
        thread_id: impl Into<String>,
        base_url: Option<&str>,
    ) -> Self {
        Self {
            agent_id,
            thread_id: thread_id.into(),
            api_key: api_key.into(),
            base_url: base_url.unwrap_or(DEFAULT_BASE_URL).to_string(),
        }
    }

    pub fn agent_id(&self) -> u64 {
        self.agent_id
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send `message` to this agent through `client`
    pub async fn query(&self, client: &AgentClient, message: &str) -> AgentResult<String> {
        client.query(self, message).await
    }
}

impl fmt::Debug for AgentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentHandle")
            .field("agent_id", &self.agent_id)
            .field("thread_id", &self.thread_id)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
