//! The inbound message envelope.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An immutable message envelope delivered by the inbound transport.
///
/// Holds an opaque payload plus optional string-keyed headers. Headers are
/// JSON values so transports can attach structured metadata; destination
/// templates only read scalar headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    payload: Vec<u8>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    headers: HashMap<String, Value>,
}

impl Message {
    /// Create a message from raw payload bytes.
    pub fn new(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: payload.into(),
            headers: HashMap::new(),
        }
    }

    /// Create a message from a UTF-8 string payload.
    pub fn text(payload: impl Into<String>) -> Self {
        Self::new(payload.into().into_bytes())
    }

    /// Attach a header, consuming and returning the message.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// The payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Look up a header by name.
    pub fn header(&self, name: &str) -> Option<&Value> {
        self.headers.get(name)
    }

    /// All headers on this message.
    pub fn headers(&self) -> &HashMap<String, Value> {
        &self.headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_payload_roundtrip() {
        let msg = Message::text("Manny");
        assert_eq!(msg.payload(), b"Manny");
        assert!(msg.headers().is_empty());
    }

    #[test]
    fn headers_are_queryable() {
        let msg = Message::text("x")
            .with_header("tenant", "acme")
            .with_header("priority", 3);
        assert_eq!(msg.header("tenant"), Some(&Value::from("acme")));
        assert_eq!(msg.header("priority"), Some(&Value::from(3)));
        assert_eq!(msg.header("absent"), None);
    }
}
