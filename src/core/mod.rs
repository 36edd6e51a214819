//! Core types shared by the client
//!
//! - `AgentError` - Top-level error returned by every operation
//! - `TransportError` / `RemoteOperationError` - The two failure tiers

pub mod error;

pub use error::{
    Action, AgentError, AgentResult, RemoteOperationError, TransportError, DEFAULT_REMOTE_MESSAGE,
};
