//! Query client implementation.

use std::sync::Arc;

use tracing::warn;

use super::{BlockQueryTransport, QueryError, TaggedBlockRecord};
use crate::encode::{decode_hex_utf8, encode_tag, Envelope};

/// Read-back client that lists blocks tagged with a vehicle identifier.
pub struct BlockQueryClient {
    /// Transport used to reach the node.
    transport: Arc<dyn BlockQueryTransport>,
}

impl BlockQueryClient {
    /// Creates a query client over a transport.
    #[must_use]
    pub fn new(transport: Arc<dyn BlockQueryTransport>) -> Self {
        Self { transport }
    }

    /// Finds blocks tagged with a vehicle identifier and decodes their data.
    ///
    /// A block whose fetch fails is skipped with a warning; the remaining
    /// records are still returned.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Lookup`] when the tag lookup itself fails.
    pub async fn find_tagged(
        &self,
        vehicle_id: &str,
        limit: usize,
    ) -> Result<Vec<TaggedBlockRecord>, QueryError> {
        let tag = encode_tag(vehicle_id);
        let block_ids = self
            .transport
            .find_block_ids(&tag, limit)
            .await
            .map_err(|source| QueryError::Lookup { source })?;

        let mut records = Vec::with_capacity(block_ids.len());
        for block_id in block_ids {
            match self.transport.fetch_block(&block_id).await {
                Ok(block) => records.push(Self::decode_record(block_id, &block)),
                Err(error) => warn!(%block_id, %error, "skipping block that failed to fetch"),
            }
        }
        Ok(records)
    }

    /// Builds a record from one fetched block.
    fn decode_record(block_id: String, block: &serde_json::Value) -> TaggedBlockRecord {
        let data_hex = block
            .pointer("/payload/data")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_owned();
        let text = decode_hex_utf8(&data_hex).ok();
        let envelope = Envelope::from_data_hex(&data_hex).ok();
        TaggedBlockRecord {
            block_id,
            data_hex,
            text,
            envelope,
        }
    }
}
