//! Query module unit tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use super::*;
use crate::encode::Envelope;
use crate::submit::TransportError;

/// Mock query transport backed by an in-memory block map.
#[derive(Debug)]
struct MockQueryTransport {
    /// Lookup response, or a failure.
    lookup: Result<Vec<String>, TransportError>,
    /// Block JSON by identifier; missing ids fail to fetch.
    blocks: HashMap<String, serde_json::Value>,
}

#[async_trait]
impl BlockQueryTransport for MockQueryTransport {
    async fn find_block_ids(
        &self,
        _tag_hex: &str,
        limit: usize,
    ) -> Result<Vec<String>, TransportError> {
        self.lookup
            .clone()
            .map(|ids| ids.into_iter().take(limit).collect())
    }

    async fn fetch_block(&self, block_id: &str) -> Result<serde_json::Value, TransportError> {
        self.blocks
            .get(block_id)
            .cloned()
            .ok_or_else(|| TransportError::Failure {
                message: format!("block {block_id} not found"),
            })
    }
}

/// Builds block JSON carrying one tagged-data payload.
fn tagged_block(data_hex: &str) -> serde_json::Value {
    serde_json::json!({
        "protocolVersion": 2,
        "payload": { "type": 5, "tag": "0x76656869636c652d313233", "data": data_hex }
    })
}

#[tokio::test]
async fn find_tagged_decodes_plain_and_enveloped_blocks() {
    let envelope_hex = Envelope::new("1630000000", "deadbeef").to_data_hex();
    assert!(envelope_hex.is_ok());
    let envelope_hex = envelope_hex.unwrap_or_default();

    let mut blocks = HashMap::new();
    blocks.insert("blk-plain".to_owned(), tagged_block("0xdeadbeef"));
    blocks.insert("blk-env".to_owned(), tagged_block(&envelope_hex));

    let transport = Arc::new(MockQueryTransport {
        lookup: Ok(vec!["blk-plain".to_owned(), "blk-env".to_owned()]),
        blocks,
    });
    let client = BlockQueryClient::new(transport);

    let records = client.find_tagged("vehicle-123", DEFAULT_FETCH_LIMIT).await;
    assert!(records.is_ok());
    if let Ok(records) = records {
        assert_eq!(records.len(), 2);

        let plain = records.iter().find(|record| record.block_id == "blk-plain");
        assert!(plain.is_some());
        if let Some(plain) = plain {
            assert_eq!(plain.data_hex, "0xdeadbeef");
            assert_eq!(plain.envelope, None);
        }

        let enveloped = records.iter().find(|record| record.block_id == "blk-env");
        assert!(enveloped.is_some());
        if let Some(enveloped) = enveloped {
            assert_eq!(
                enveloped.envelope,
                Some(Envelope::new("1630000000", "deadbeef"))
            );
        }
    }
}

#[tokio::test]
async fn find_tagged_skips_blocks_that_fail_to_fetch() {
    let mut blocks = HashMap::new();
    blocks.insert("blk-ok".to_owned(), tagged_block("0xdeadbeef"));

    let transport = Arc::new(MockQueryTransport {
        lookup: Ok(vec!["blk-missing".to_owned(), "blk-ok".to_owned()]),
        blocks,
    });
    let client = BlockQueryClient::new(transport);

    let records = client.find_tagged("vehicle-123", DEFAULT_FETCH_LIMIT).await;
    assert!(records.is_ok());
    if let Ok(records) = records {
        assert_eq!(records.len(), 1);
        assert_eq!(
            records.first().map(|record| record.block_id.as_str()),
            Some("blk-ok")
        );
    }
}

#[tokio::test]
async fn lookup_failure_surfaces_as_query_error() {
    let transport = Arc::new(MockQueryTransport {
        lookup: Err(TransportError::Failure {
            message: "indexer unavailable".to_owned(),
        }),
        blocks: HashMap::new(),
    });
    let client = BlockQueryClient::new(transport);

    let records = client.find_tagged("vehicle-123", DEFAULT_FETCH_LIMIT).await;
    assert!(matches!(records, Err(QueryError::Lookup { .. })));
}

#[tokio::test]
async fn limit_bounds_the_lookup() {
    let mut blocks = HashMap::new();
    blocks.insert("blk-1".to_owned(), tagged_block("0x01"));
    blocks.insert("blk-2".to_owned(), tagged_block("0x02"));

    let transport = Arc::new(MockQueryTransport {
        lookup: Ok(vec!["blk-1".to_owned(), "blk-2".to_owned()]),
        blocks,
    });
    let client = BlockQueryClient::new(transport);

    let records = client.find_tagged("vehicle-123", 1).await;
    assert!(records.is_ok());
    if let Ok(records) = records {
        assert_eq!(records.len(), 1);
    }
}
