//! Lists testnet blocks tagged with a vehicle identifier.
//!
//! Prints one line per fetched block: the block identifier followed by the
//! decoded payload (envelope fields, plain text, or raw data hex).

use std::process::ExitCode;
use std::sync::Arc;

use tangle_cli::{args, CliError};
use tangle_tx::{BlockQueryClient, NodeConfig, RestQueryTransport, TaggedBlockRecord};
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    tangle_cli::init_tracing();
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("❌ {error}");
            ExitCode::FAILURE
        }
    }
}

/// Parses arguments, fetches tagged blocks, and prints them.
async fn run() -> Result<(), CliError> {
    let invocation =
        args::parse_fetch(std::env::args().skip(1)).map_err(|source| CliError::Usage { source })?;

    let transport = RestQueryTransport::new(&NodeConfig::default())
        .map_err(|source| CliError::Node { source })?;
    let client = BlockQueryClient::new(Arc::new(transport));

    let records = client
        .find_tagged(&invocation.vehicle_id, invocation.limit)
        .await
        .map_err(|source| CliError::Fetch { source })?;
    info!(
        vehicle_id = %invocation.vehicle_id,
        count = records.len(),
        "fetched tagged blocks"
    );

    for record in &records {
        println!("{} {}", record.block_id, describe(record));
    }
    Ok(())
}

/// Renders the most readable form of a record's payload.
fn describe(record: &TaggedBlockRecord) -> String {
    if let Some(envelope) = &record.envelope {
        format!(
            "timestamp={} payload={}",
            envelope.timestamp, envelope.payload
        )
    } else if let Some(text) = &record.text {
        text.clone()
    } else {
        record.data_hex.clone()
    }
}
