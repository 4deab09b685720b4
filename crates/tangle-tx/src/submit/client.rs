//! Submission client implementation.

use std::sync::Arc;

use tracing::info;

use super::{BlockTransport, PostedBlock, SubmitError, SubmitRequest, SubmitResult, TaggedData};
use crate::encode::{encode_tag, normalize_hex, Envelope};

/// Block submission client parameterized by a transport.
pub struct BlockSubmitClient {
    /// Transport used to reach the node.
    transport: Arc<dyn BlockTransport>,
}

impl BlockSubmitClient {
    /// Creates a submission client over a transport.
    #[must_use]
    pub fn new(transport: Arc<dyn BlockTransport>) -> Self {
        Self { transport }
    }

    /// Encodes and submits one request, returning the posted block summary.
    ///
    /// A request with a timestamp wraps the as-given payload in a JSON
    /// envelope before hex encoding; a request without one posts the
    /// `0x`-normalized payload directly.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError`] when envelope encoding or the transport post
    /// fails.
    pub async fn submit(&self, request: &SubmitRequest) -> Result<SubmitResult, SubmitError> {
        let payload = TaggedData {
            tag: encode_tag(&request.vehicle_id),
            data: Self::encode_data(request)?,
        };
        info!(tag = %payload.tag, "posting tagged block");
        let PostedBlock { block_id, raw } = self
            .transport
            .post_block(&payload)
            .await
            .map_err(|source| SubmitError::Transport { source })?;
        Ok(SubmitResult {
            block_id,
            tag: payload.tag,
            data: payload.data,
            raw,
        })
    }

    /// Produces the block data hex for one request.
    fn encode_data(request: &SubmitRequest) -> Result<String, SubmitError> {
        match &request.timestamp {
            Some(timestamp) => Envelope::new(timestamp, &request.payload_hex)
                .to_data_hex()
                .map_err(|source| SubmitError::Encode { source }),
            None => Ok(normalize_hex(&request.payload_hex)),
        }
    }
}
