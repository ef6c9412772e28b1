//! JSON encoding helpers.
//!
//! Tapdash speaks JSON text frames end to end: events are small, the
//! browser client parses them natively, and the payloads are trivially
//! inspectable in DevTools while debugging timing issues. The helpers are
//! generic so both sides of the wire (and tests acting as clients) use the
//! same entry points.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// Serializes a wire value to a JSON string.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, ProtocolError> {
    serde_json::to_string(value).map_err(ProtocolError::Encode)
}

/// Parses a JSON string into a wire value.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, ProtocolError> {
    serde_json::from_str(text).map_err(ProtocolError::Decode)
}
