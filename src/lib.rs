//! Client for the 0x Network agent API
//!
//! ```ignore
//! use oxnetwork_sdk::client::{AgentClient, ClientConfig};
//!
//! let client = AgentClient::new(ClientConfig::default())?;
//! let agent = client.create(&api_key, "trader", None).await?;
//! println!("{}", client.query(&agent, "gm").await?);
//! ```

pub mod client;
pub mod core;

// Optional components
pub mod cli;
pub mod logging;

pub use crate::client::{AgentApi, AgentClient, AgentHandle, ClientConfig};
pub use crate::core::{AgentError, AgentResult, RemoteOperationError, TransportError};
