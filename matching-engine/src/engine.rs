//! Matching engine core
//!
//! Owns every pair's order book, routes each command to the right one, and
//! at the end of a run flattens every book's trades and snapshot into a
//! single [`EngineOutput`]. The engine processes commands strictly in
//! arrival order — there is no internal concurrency here, by design:
//! the `ts` sequence and the trade stream are defined by that order, and any
//! reordering would change observable output.

use std::collections::HashMap;

use common::{EngineError, EngineOutput, RawCommand};
use tracing::instrument;

use crate::orderbook::OrderBook;

/// Maps pair symbols to their order book, in first-seen order.
#[derive(Default)]
pub struct MatcherEngine {
    books: HashMap<String, OrderBook>,
    /// Insertion order of pairs, so `finish` can emit deterministically.
    pair_order: Vec<String>,
}

impl MatcherEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes `cmd` to its book, lazily creating the book on first reference.
    #[instrument(skip(self, cmd), fields(pair = %cmd.pair, order_id = %cmd.order_id))]
    pub fn ingest(&mut self, cmd: &RawCommand) -> Result<(), EngineError> {
        let book = self.book_for(&cmd.pair);
        book.process(cmd)
    }

    /// Pair symbols are keyed on exact string equality — no normalization.
    fn book_for(&mut self, pair: &str) -> &mut OrderBook {
        if !self.books.contains_key(pair) {
            self.books.insert(pair.to_string(), OrderBook::new(pair));
            self.pair_order.push(pair.to_string());
        }
        self.books.get_mut(pair).expect("just inserted")
    }

    /// Concatenates every book's trades (book order = pair insertion order)
    /// and emits one snapshot per pair, in the same order.
    pub fn finish(&self) -> EngineOutput {
        let mut trades = Vec::new();
        let mut orderbooks = Vec::new();

        for pair in &self.pair_order {
            let book = self.books.get(pair).expect("tracked in pair_order");
            trades.extend(book.trades().iter().cloned());
            orderbooks.push(book.snapshot());
        }

        EngineOutput { orderbooks, trades }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{OpType, Side};

    fn create(pair: &str, id: &str, side: Side, price: &str, amount: &str) -> RawCommand {
        RawCommand {
            op: OpType::Create,
            account_id: "acc".to_string(),
            order_id: id.to_string(),
            pair: pair.to_string(),
            side,
            limit_price: price.to_string(),
            amount: amount.to_string(),
        }
    }

    #[test]
    fn books_are_created_lazily_and_kept_separate() {
        let mut engine = MatcherEngine::new();
        engine.ingest(&create("BTC/USDC", "1", Side::Buy, "100", "1")).unwrap();
        engine.ingest(&create("ETH/USDC", "2", Side::Buy, "10", "1")).unwrap();

        let out = engine.finish();
        assert_eq!(out.orderbooks.len(), 2);
        assert_eq!(out.orderbooks[0].pair, "BTC/USDC");
        assert_eq!(out.orderbooks[1].pair, "ETH/USDC");
    }

    #[test]
    fn pairs_differing_only_in_case_are_distinct() {
        let mut engine = MatcherEngine::new();
        engine.ingest(&create("btc/usdc", "1", Side::Buy, "100", "1")).unwrap();
        engine.ingest(&create("BTC/USDC", "2", Side::Buy, "100", "1")).unwrap();
        assert_eq!(engine.finish().orderbooks.len(), 2);
    }

    #[test]
    fn empty_run_produces_empty_output() {
        let engine = MatcherEngine::new();
        let out = engine.finish();
        assert!(out.orderbooks.is_empty() && out.trades.is_empty());
    }
}
