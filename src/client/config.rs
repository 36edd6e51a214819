//! Client Configuration
//!
//! Endpoint and transport options for `AgentClient`.

use std::env;
use std::time::Duration;

use crate::core::{AgentError, AgentResult};

/// Production endpoint of the agent API
pub const DEFAULT_BASE_URL: &str = "https://api.0x-network.com/index.php";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for an `AgentClient`
///
/// ```ignore
/// let config = ClientConfig::new()
///     .with_base_url("http://localhost:8080/index.php")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Endpoint used when an operation does not override it
    pub base_url: String,

    /// Upper bound for a whole request/response exchange
    pub timeout: Duration,

    /// `User-Agent` header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("oxnetwork-sdk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from environment variables
    ///
    /// Reads from:
    /// - `OXNETWORK_BASE_URL` (optional, defaults to the production endpoint)
    /// - `OXNETWORK_TIMEOUT_SECS` (optional, defaults to 30)
    pub fn from_env() -> AgentResult<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = env::var("OXNETWORK_BASE_URL") {
            if !base_url.trim().is_empty() {
                config.base_url = base_url;
            }
        }

        if let Ok(raw) = env::var("OXNETWORK_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                AgentError::invalid_config(format!("OXNETWORK_TIMEOUT_SECS is not a number: {}", raw))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "Loaded client config from environment");

        config.validate()?;
        Ok(config)
    }

    /// Set the default endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Check the configuration before building a client
    pub fn validate(&self) -> AgentResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(AgentError::invalid_config("base_url must not be empty"));
        }
        if self.timeout.is_zero() {
            return Err(AgentError::invalid_config("timeout must be greater than zero"));
        }
        Ok(())
    }
}
