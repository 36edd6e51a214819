//! Agent API client
//!
//! Issues the `create-agent` and `query-agent` GET requests and turns their
//! JSON envelopes into handles, response text, or errors.
//!
//! ```ignore
//! let client = AgentClient::new(ClientConfig::default())?;
//!
//! let agent = client.create("my-api-key", "research-bot", None).await?;
//! let reply = client.query(&agent, "What is the SOL price?").await?;
//!
//! // Attach to an agent created earlier, no request is made
//! let agent = client.get("my-api-key", 42, "t-123", None);
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::config::ClientConfig;
use super::handle::AgentHandle;
use super::wire::{encode_message, ApiResponse, CreatedAgent, Envelope, QueryReply};
use crate::core::{Action, AgentError, AgentResult, RemoteOperationError, TransportError};

/// Operations offered by the agent service
///
/// Implemented by `AgentClient`; callers can substitute their own
/// implementation in tests.
#[async_trait]
pub trait AgentApi: Send + Sync {
    /// Create a new agent and return a handle to it
    async fn create(
        &self,
        api_key: &str,
        name: &str,
        base_url: Option<&str>,
    ) -> AgentResult<AgentHandle>;

    /// Send a text message to an agent and return its reply
    async fn query(&self, handle: &AgentHandle, message: &str) -> AgentResult<String>;
}

/// HTTP client for the agent service
///
/// Holds no per-agent state; cloning shares the underlying connection pool and
/// concurrent calls from several tasks are fine.
#[derive(Debug, Clone)]
pub struct AgentClient {
    http: Client,
    config: ClientConfig,
}

impl AgentClient {
    /// Create a client from a configuration
    pub fn new(config: ClientConfig) -> AgentResult<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| AgentError::invalid_config(format!("Failed to build HTTP client: {}", e)))?;

        tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "Created agent client");

        Ok(Self { http, config })
    }

    /// Create a client using `ClientConfig::from_env`
    pub fn from_env() -> AgentResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a client on top of an existing `reqwest::Client`
    ///
    /// The configured timeout is still applied to every request.
    pub fn with_http_client(http: Client, config: ClientConfig) -> AgentResult<Self> {
        config.validate()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create a new agent named `name`
    ///
    /// The returned handle carries the service-assigned identifiers and the
    /// endpoint the agent was created on.
    pub async fn create(
        &self,
        api_key: &str,
        name: &str,
        base_url: Option<&str>,
    ) -> AgentResult<AgentHandle> {
        let base_url = base_url.unwrap_or(&self.config.base_url);
        tracing::info!(name = %name, "Creating agent");

        let created: CreatedAgent = self
            .send(
                base_url,
                Action::CreateAgent,
                &[
                    ("action", Action::CreateAgent.as_str()),
                    ("name", name),
                    ("api_key", api_key),
                ],
            )
            .await?;

        tracing::info!(
            agent_id = created.agent_id,
            thread_id = %created.thread_id,
            "Agent created"
        );

        Ok(AgentHandle::new(
            api_key,
            created.agent_id,
            created.thread_id,
            Some(base_url),
        ))
    }

    /// Reference an existing agent. No request is made.
    pub fn get(
        &self,
        api_key: &str,
        agent_id: u64,
        thread_id: &str,
        base_url: Option<&str>,
    ) -> AgentHandle {
        let base_url = base_url.unwrap_or(&self.config.base_url);
        AgentHandle::new(api_key, agent_id, thread_id, Some(base_url))
    }

    /// Send `message` to the agent behind `handle`
    ///
    /// A successful reply without a `response` field yields an empty string.
    pub async fn query(&self, handle: &AgentHandle, message: &str) -> AgentResult<String> {
        let encoded = encode_message(message);
        let agent_id = handle.agent_id().to_string();

        tracing::info!(agent_id = handle.agent_id(), "Querying agent");
        tracing::debug!(
            message_len = message.len(),
            encoded_len = encoded.len(),
            "Encoded query message"
        );

        let reply: QueryReply = self
            .send(
                handle.base_url(),
                Action::QueryAgent,
                &[
                    ("action", Action::QueryAgent.as_str()),
                    ("agent_id", agent_id.as_str()),
                    ("message", encoded.as_str()),
                    ("api_key", handle.api_key()),
                ],
            )
            .await?;

        tracing::info!(
            agent_id = handle.agent_id(),
            response_len = reply.response.len(),
            "Received agent response"
        );

        Ok(reply.response)
    }

    /// Perform one GET request and decode its envelope
    async fn send<T: DeserializeOwned>(
        &self,
        base_url: &str,
        action: Action,
        params: &[(&str, &str)],
    ) -> AgentResult<T> {
        tracing::debug!(action = %action, base_url = %base_url, "Sending request");

        let response = self
            .http
            .get(base_url)
            .query(params)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| transport_failure(action, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| transport_failure(action, e))?;

        tracing::debug!(action = %action, status = %status, "Response status");
        tracing::debug!(action = %action, "Response body: {}", body);

        let envelope = Envelope::parse(status.as_u16(), &body).map_err(|e| {
            tracing::error!(action = %action, status = %status, error = %e, "Unreadable response");
            e
        })?;

        match envelope.into_response(action)? {
            ApiResponse::Success(payload) => Ok(payload),
            ApiResponse::Failure { message } => {
                let err = RemoteOperationError::new(action, message);
                tracing::warn!(action = %action, message = %err.message, "Service reported failure");
                Err(err.into())
            }
        }
    }
}

/// Convert a reqwest failure, dropping the URL since it carries the API key
fn transport_failure(action: Action, err: reqwest::Error) -> AgentError {
    let err = TransportError::from(err.without_url());
    tracing::error!(action = %action, error = %err, "Request failed");
    err.into()
}

#[async_trait]
impl AgentApi for AgentClient {
    async fn create(
        &self,
        api_key: &str,
        name: &str,
        base_url: Option<&str>,
    ) -> AgentResult<AgentHandle> {
        AgentClient::create(self, api_key, name, base_url).await
    }

    async fn query(&self, handle: &AgentHandle, message: &str) -> AgentResult<String> {
        AgentClient::query(self, handle, message).await
    }
}
