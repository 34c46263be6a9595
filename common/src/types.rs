//! Wire DTOs for the matching engine: the input command shape and the two
//! output shapes, trades and order-book snapshots.

use serde::{Deserialize, Serialize};

/// Order side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

/// Command kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OpType {
    Create,
    Delete,
}

/// An incoming order command, exactly as it arrives over the wire. Prices
/// and amounts stay strings until parsed into [`crate::Decimal`] by the book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCommand {
    #[serde(rename = "type_op")]
    pub op: OpType,
    pub account_id: String,
    pub order_id: String,
    pub pair: String,
    pub side: Side,
    pub limit_price: String,
    pub amount: String,
}

/// A single match between a buy and a sell order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub pair: String,
    #[serde(rename = "buyOrderId")]
    pub buy_order_id: String,
    #[serde(rename = "sellOrderId")]
    pub sell_order_id: String,
    pub price: String,
    pub amount: String,
    pub ts: u64,
}

/// One resting order as it appears in a book snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderView {
    pub id: String,
    pub account: String,
    pub price: String,
    pub remaining: String,
}

/// Residual book state for one pair, in heap array order — not sorted,
/// not price-time order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub pair: String,
    pub bids: Vec<OrderView>,
    pub asks: Vec<OrderView>,
}

/// Everything an in-process caller gets back from a completed run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EngineOutput {
    pub orderbooks: Vec<BookSnapshot>,
    pub trades: Vec<Trade>,
}
