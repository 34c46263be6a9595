//! Driver
//!
//! Reads a sequence of commands from an input source, pushes them through
//! [`MatcherEngine`], and reports the outcome. Two entry styles:
//!
//! - [`run_from_file`]: batch JSON array on disk -> engine -> two output files.
//! - [`run_in_process`]: an already-parsed command slice -> engine -> an
//!   [`EngineOutput`] value, no disk I/O — what an embedding service would call.
//!
//! [`stream_commands`] additionally supports a streamed input style: a reader
//! of concatenated/NDJSON command objects, consumed lazily.
//!
//! No partial results are ever emitted on failure: the whole command stream
//! is consumed and the engine's in-memory state is built up first; output
//! files are only written once that succeeds.

use std::io::Read;

use common::{EngineError, EngineOutput, RawCommand};
use tracing::info;

use crate::config::Config;
use crate::engine::MatcherEngine;

/// Feeds every command in `commands` through a fresh engine, in order, and
/// returns the aggregated trades/snapshots. Fails (and drops all state) on
/// the first error — there is no per-order retry.
pub fn run_in_process(commands: &[RawCommand]) -> Result<EngineOutput, EngineError> {
    let mut engine = MatcherEngine::new();
    for cmd in commands {
        engine.ingest(cmd)?;
    }
    Ok(engine.finish())
}

/// Lazily deserializes a stream of concatenated JSON command objects (NDJSON
/// or back-to-back values both work, since `serde_json`'s reader-based
/// deserializer doesn't require a top-level array).
pub fn stream_commands<R: Read>(reader: R) -> impl Iterator<Item = Result<RawCommand, EngineError>> {
    serde_json::Deserializer::from_reader(reader)
        .into_iter::<RawCommand>()
        .map(|r| r.map_err(EngineError::from))
}

/// Runs a command stream (as opposed to a batch array) through a fresh
/// engine. Used by the binary when reading from stdin.
pub fn run_streamed<R: Read>(reader: R) -> Result<EngineOutput, EngineError> {
    let mut engine = MatcherEngine::new();
    for cmd in stream_commands(reader) {
        engine.ingest(&cmd?)?;
    }
    Ok(engine.finish())
}

/// Reads the batch command array at `config.input_path`, runs it through the
/// engine, and writes `orderbook.json`/`trades.json` at the configured paths.
pub async fn run_from_file(config: &Config) -> Result<EngineOutput, EngineError> {
    info!(path = %config.input_path, "reading command stream");
    let raw = tokio::fs::read_to_string(&config.input_path).await?;
    let commands: Vec<RawCommand> = serde_json::from_str(&raw)?;
    info!(count = commands.len(), "commands parsed");

    let output = run_in_process(&commands)?;

    let orderbook_json = serde_json::to_vec_pretty(&output.orderbooks)?;
    tokio::fs::write(&config.orderbook_out_path, orderbook_json).await?;

    let trades_json = serde_json::to_vec_pretty(&output.trades)?;
    tokio::fs::write(&config.trades_out_path, trades_json).await?;

    info!(
        trades = output.trades.len(),
        pairs = output.orderbooks.len(),
        "run complete"
    );

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{OpType, Side};

    fn create(id: &str, side: Side, price: &str, amount: &str) -> RawCommand {
        RawCommand {
            op: OpType::Create,
            account_id: "acc".to_string(),
            order_id: id.to_string(),
            pair: "BTC/USDC".to_string(),
            side,
            limit_price: price.to_string(),
            amount: amount.to_string(),
        }
    }

    #[test]
    fn run_in_process_empty_input_is_empty_output() {
        let out = run_in_process(&[]).unwrap();
        assert!(out.orderbooks.is_empty());
        assert!(out.trades.is_empty());
    }

    #[test]
    fn run_in_process_fails_whole_run_on_bad_decimal() {
        let commands = vec![create("1", Side::Buy, "not-a-number", "1")];
        assert!(run_in_process(&commands).is_err());
    }

    #[test]
    fn run_streamed_reads_concatenated_json_values() {
        let ndjson = concat!(
            r#"{"type_op":"CREATE","account_id":"a","order_id":"1","pair":"BTC/USDC","side":"SELL","limit_price":"100","amount":"1"}"#,
            "\n",
            r#"{"type_op":"CREATE","account_id":"b","order_id":"2","pair":"BTC/USDC","side":"BUY","limit_price":"100","amount":"1"}"#,
        );
        let out = run_streamed(ndjson.as_bytes()).unwrap();
        assert_eq!(out.trades.len(), 1);
    }
}
