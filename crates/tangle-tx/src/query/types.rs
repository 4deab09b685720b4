//! Shared query types, errors, and the transport trait.

use async_trait::async_trait;
use thiserror::Error;

use crate::encode::Envelope;
use crate::submit::TransportError;

/// Default number of block ids requested per tag lookup.
pub const DEFAULT_FETCH_LIMIT: usize = 100;

/// One fetched tagged block with best-effort decoding.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TaggedBlockRecord {
    /// Block identifier.
    pub block_id: String,
    /// Raw data hex carried by the block.
    pub data_hex: String,
    /// UTF-8 decoding of the data, when valid.
    pub text: Option<String>,
    /// Parsed envelope, when the data is envelope JSON.
    pub envelope: Option<Envelope>,
}

/// Query-level errors.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Transport failed to resolve block ids for a tag.
    #[error("failed to look up blocks by tag: {source}")]
    Lookup {
        /// Transport-layer failure.
        source: TransportError,
    },
}

/// Block lookup interface.
#[async_trait]
pub trait BlockQueryTransport: Send + Sync {
    /// Returns ids of blocks carrying a tag, up to `limit`.
    async fn find_block_ids(
        &self,
        tag_hex: &str,
        limit: usize,
    ) -> Result<Vec<String>, TransportError>;

    /// Fetches one block as raw JSON.
    async fn fetch_block(&self, block_id: &str) -> Result<serde_json::Value, TransportError>;
}
