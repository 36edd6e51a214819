//! Wire format of the agent API
//!
//! Every response is a JSON object of the shape
//! `{"status": "success" | ..., "message": ..., "data": {...}}`.
//! It is decoded once into an `Envelope`, then into a typed `ApiResponse`
//! for the operation that issued the request.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::{Action, TransportError};

const SUCCESS_STATUS: &str = "success";

/// Encode an outgoing message as standard base64 of its UTF-8 bytes
pub fn encode_message(message: &str) -> String {
    STANDARD.encode(message.as_bytes())
}

/// Outcome reported by the service for one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse<T> {
    /// `status == "success"` with a decoded payload
    Success(T),
    /// Any other status, with the service's message if it sent one
    Failure { message: Option<String> },
}

/// Payload of a successful `create-agent` call
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedAgent {
    #[serde(deserialize_with = "agent_id_from_number_or_string")]
    pub agent_id: u64,
    pub thread_id: String,
}

/// Payload of a successful `query-agent` call
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QueryReply {
    /// Missing or null responses decode to an empty string, non-string
    /// values to their JSON text
    #[serde(default, deserialize_with = "lenient_text")]
    pub response: String,
}

/// Untyped response envelope
#[derive(Debug, Clone)]
pub struct Envelope {
    status: Option<String>,
    message: Option<String>,
    data: Option<Value>,
}

impl Envelope {
    /// Parse a raw response body
    ///
    /// Only a body that is not JSON at all is a transport failure. A JSON value
    /// that is not an object simply has no `status`.
    pub fn parse(http_status: u16, body: &str) -> Result<Self, TransportError> {
        let value: Value = serde_json::from_str(body).map_err(|source| TransportError::InvalidBody {
            status: http_status,
            source,
        })?;

        let mut object = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        let status = object
            .remove("status")
            .and_then(|v| v.as_str().map(str::to_string));
        let message = object.remove("message").and_then(render_message);
        let data = object.remove("data").filter(|v| !v.is_null());

        Ok(Self { status, message, data })
    }

    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(SUCCESS_STATUS)
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Decode the payload for `action`
    ///
    /// An absent `data` object decodes as `{}`, so payloads whose fields all
    /// have defaults still succeed.
    pub fn into_response<T: DeserializeOwned>(
        self,
        action: Action,
    ) -> Result<ApiResponse<T>, TransportError> {
        if !self.is_success() {
            return Ok(ApiResponse::Failure {
                message: self.message,
            });
        }

        let data = self.data.unwrap_or_else(|| Value::Object(Map::new()));
        let payload = serde_json::from_value(data).map_err(|e| TransportError::MalformedPayload {
            action,
            reason: e.to_string(),
        })?;

        Ok(ApiResponse::Success(payload))
    }
}

fn render_message(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(render_message).unwrap_or_default())
}

fn agent_id_from_number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    // Ids are only carried back to the service, but the handle stores them as
    // integers, so a string id must be an exact decimal integer.
    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text
            .parse()
            .map_err(|_| de::Error::custom(format!("agent_id is not an integer: {:?}", text))),
    }
}
