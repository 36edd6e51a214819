//! Client error types
//!
//! Failures are split in two tiers:
//! - `TransportError` - the exchange itself failed (network, timeout, unparsable body)
//! - `RemoteOperationError` - the service answered but reported a non-success status

use std::fmt;

use thiserror::Error;

/// Message used when the service reports a failure without a `message` field
pub const DEFAULT_REMOTE_MESSAGE: &str = "no message returned by service";

/// The remote action a request was made for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateAgent,
    QueryAgent,
}

impl Action {
    /// Value of the `action` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::CreateAgent => "create-agent",
            Action::QueryAgent => "query-agent",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The request could not be completed or its response could not be read
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request did not finish within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Connection, TLS or body read failure
    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The response body was not valid JSON
    #[error("Invalid response body (HTTP {status}): {source}")]
    InvalidBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The service reported success but the payload lacks required fields
    #[error("Malformed {action} payload: {reason}")]
    MalformedPayload { action: Action, reason: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::Request(err)
        }
    }
}

/// The service returned a well-formed response with a non-success status
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{action} failed: {message}")]
pub struct RemoteOperationError {
    pub action: Action,
    /// Service-reported message, verbatim
    pub message: String,
}

impl RemoteOperationError {
    pub fn new(action: Action, message: Option<String>) -> Self {
        Self {
            action,
            message: message.unwrap_or_else(|| DEFAULT_REMOTE_MESSAGE.to_string()),
        }
    }
}

/// Errors returned by the agent client
#[derive(Error, Debug)]
pub enum AgentError {
    /// Network-level failure
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The service rejected the operation
    #[error(transparent)]
    Remote(#[from] RemoteOperationError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AgentError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        AgentError::InvalidConfig(msg.into())
    }

    /// True when the request/response exchange itself failed
    pub fn is_transport(&self) -> bool {
        matches!(self, AgentError::Transport(_))
    }

    /// True when the service explicitly reported a failure
    pub fn is_remote(&self) -> bool {
        matches!(self, AgentError::Remote(_))
    }

    /// The service's message, if this is a remote failure
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            AgentError::Remote(err) => Some(&err.message),
            _ => None,
        }
    }
}

/// Result type alias for client operations
pub type AgentResult<T> = Result<T, AgentError>;
