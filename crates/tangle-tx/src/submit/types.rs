//! Shared submission types, errors, and the transport trait.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::encode::EncodeError;

/// Fixed public testnet node used when no other endpoint is configured.
pub const TESTNET_NODE_URL: &str = "https://api.testnet.iotaledger.net";

/// Testnet explorer base used for human-facing block links.
pub const EXPLORER_BLOCK_URL: &str = "https://explorer.iota.org/iota-testnet/block";

/// Node endpoint configuration.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NodeConfig {
    /// Base URL of the node REST API.
    pub url: String,
    /// Per-request HTTP timeout.
    pub request_timeout: Duration,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            url: TESTNET_NODE_URL.to_owned(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl NodeConfig {
    /// Creates a config for a specific node URL with the default timeout.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

/// Tag/data hex pair posted as one tagged-data block.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TaggedData {
    /// Unprefixed hex tag derived from the vehicle identifier.
    pub tag: String,
    /// Block data hex.
    pub data: String,
}

/// Node response to a posted block.
#[derive(Debug, Clone, PartialEq)]
pub struct PostedBlock {
    /// Identifier assigned to the accepted block.
    pub block_id: String,
    /// Raw response body returned by the node.
    pub raw: serde_json::Value,
}

/// One submission request; a present timestamp selects the envelope variant.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SubmitRequest {
    /// Vehicle identifier used to derive the block tag.
    pub vehicle_id: String,
    /// Payload hex as given by the caller.
    pub payload_hex: String,
    /// Optional capture timestamp; wraps the payload in a JSON envelope.
    pub timestamp: Option<String>,
}

impl SubmitRequest {
    /// Creates a basic (tag plus raw payload) submission request.
    #[must_use]
    pub fn new(vehicle_id: impl Into<String>, payload_hex: impl Into<String>) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            payload_hex: payload_hex.into(),
            timestamp: None,
        }
    }

    /// Attaches a timestamp, selecting the enveloped variant.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}

/// Summary of a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitResult {
    /// Identifier of the posted block.
    pub block_id: String,
    /// Tag hex attached to the block.
    pub tag: String,
    /// Data hex carried by the block.
    pub data: String,
    /// Raw node response for callers that need more than the identifier.
    pub raw: serde_json::Value,
}

impl SubmitResult {
    /// Returns the testnet explorer link for the posted block.
    #[must_use]
    pub fn explorer_url(&self) -> String {
        format!("{EXPLORER_BLOCK_URL}/{}", self.block_id)
    }
}

/// Low-level transport errors surfaced by block transports.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum TransportError {
    /// Invalid transport configuration.
    #[error("transport configuration invalid: {message}")]
    Config {
        /// Human-readable description.
        message: String,
    },
    /// Transport operation failed.
    #[error("transport failure: {message}")]
    Failure {
        /// Human-readable description.
        message: String,
    },
}

/// Submission-level errors.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Block data could not be encoded.
    #[error("failed to encode block data: {source}")]
    Encode {
        /// Encoding-layer failure.
        source: EncodeError,
    },
    /// Transport failed to post the block.
    #[error("failed to post block: {source}")]
    Transport {
        /// Transport-layer failure.
        source: TransportError,
    },
}

/// Block submission interface.
#[async_trait]
pub trait BlockTransport: Send + Sync {
    /// Posts one tagged-data block and returns the node's response.
    async fn post_block(&self, payload: &TaggedData) -> Result<PostedBlock, TransportError>;
}
