//! Agent service client
//!
//! - `AgentClient` - Sends create/query requests
//! - `AgentHandle` - Immutable reference to a remote agent
//! - `ClientConfig` - Endpoint and timeout settings

pub mod agent;
pub mod config;
pub mod handle;
pub mod wire;

pub use agent::{AgentApi, AgentClient};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use handle::AgentHandle;
pub use wire::{encode_message, ApiResponse, CreatedAgent, QueryReply};
