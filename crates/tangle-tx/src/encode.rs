//! Tag, payload, and envelope encoding helpers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Encoding and decoding errors.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Envelope could not be serialized to JSON.
    #[error("failed to serialize envelope: {source}")]
    Serialize {
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// Data did not parse as envelope JSON.
    #[error("failed to parse envelope JSON: {source}")]
    Parse {
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// Hex data could not be decoded to bytes.
    #[error("failed to decode hex data: {source}")]
    Hex {
        /// Underlying hex error.
        source: hex::FromHexError,
    },
    /// Decoded bytes are not valid UTF-8.
    #[error("decoded data is not valid UTF-8: {source}")]
    Utf8 {
        /// Underlying UTF-8 error.
        source: std::string::FromUtf8Error,
    },
}

/// Hex-encodes the UTF-8 bytes of a vehicle identifier for use as a block tag.
///
/// The result is lowercase and carries no `0x` prefix.
#[must_use]
pub fn encode_tag(vehicle_id: &str) -> String {
    hex::encode(vehicle_id.as_bytes())
}

/// Ensures payload hex carries a `0x` prefix.
///
/// Idempotent. The remainder is not validated as hex; malformed input flows
/// through to the node, which rejects it.
#[must_use]
pub fn normalize_hex(payload_hex: &str) -> String {
    if payload_hex.starts_with("0x") {
        payload_hex.to_owned()
    } else {
        format!("0x{payload_hex}")
    }
}

/// Returns hex with any leading `0x` removed.
#[must_use]
pub fn strip_hex_prefix(hex_str: &str) -> &str {
    hex_str.strip_prefix("0x").unwrap_or(hex_str)
}

/// Decodes a hex string, with or without a `0x` prefix, into a UTF-8 string.
///
/// # Errors
///
/// Returns [`EncodeError::Hex`] when the input is not valid hex and
/// [`EncodeError::Utf8`] when the decoded bytes are not UTF-8.
pub fn decode_hex_utf8(hex_str: &str) -> Result<String, EncodeError> {
    let bytes =
        hex::decode(strip_hex_prefix(hex_str)).map_err(|source| EncodeError::Hex { source })?;
    String::from_utf8(bytes).map_err(|source| EncodeError::Utf8 { source })
}

/// JSON wrapper carried as block data by the timestamped submit variant.
///
/// The `payload` field holds the payload hex exactly as received from the
/// caller; the `0x` normalization applied to the basic variant never reaches
/// the envelope.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Capture timestamp, passed through unmodified.
    pub timestamp: String,
    /// Payload hex as given by the caller.
    pub payload: String,
}

impl Envelope {
    /// Creates an envelope from a timestamp and as-given payload hex.
    #[must_use]
    pub fn new(timestamp: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            payload: payload.into(),
        }
    }

    /// Serializes the envelope to compact JSON and hex-encodes its UTF-8 bytes.
    ///
    /// The result carries no `0x` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::Serialize`] when JSON serialization fails.
    pub fn to_data_hex(&self) -> Result<String, EncodeError> {
        let json =
            serde_json::to_string(self).map_err(|source| EncodeError::Serialize { source })?;
        Ok(hex::encode(json.as_bytes()))
    }

    /// Parses an envelope back out of block data hex.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] when the data is not hex, not UTF-8, or not
    /// envelope JSON.
    pub fn from_data_hex(data_hex: &str) -> Result<Self, EncodeError> {
        let json = decode_hex_utf8(data_hex)?;
        serde_json::from_str(&json).map_err(|source| EncodeError::Parse { source })
    }
}
