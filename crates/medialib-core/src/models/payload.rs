//! Binary payload carried inside a media record.
//!
//! Bytes are kept raw in memory and in the store; every serialized form renders them
//! as a standard (padded) base64 string so a consumer can use the payload directly.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Clone, PartialEq, Eq, Default)]
pub struct BinaryPayload(Bytes);

impl BinaryPayload {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self(data.into())
    }

    /// Decode a base64 string into a payload.
    pub fn from_base64(encoded: &str) -> Result<Self, base64::DecodeError> {
        STANDARD.decode(encoded).map(|v| Self(Bytes::from(v)))
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for BinaryPayload {
    fn from(data: Vec<u8>) -> Self {
        Self(Bytes::from(data))
    }
}

impl From<Bytes> for BinaryPayload {
    fn from(data: Bytes) -> Self {
        Self(data)
    }
}

// Payloads can be megabytes; keep Debug output to the size.
impl fmt::Debug for BinaryPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinaryPayload({} bytes)", self.0.len())
    }
}

impl Serialize for BinaryPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for BinaryPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        BinaryPayload::from_base64(&encoded).map_err(de::Error::custom)
    }
}
