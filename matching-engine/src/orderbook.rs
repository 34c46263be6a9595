//! Order book implementation
//!
//! Holds one pair's resting bids and asks, an order-id index, a monotonic
//! arrival-sequence counter for FIFO tie-breaking, and the trades this book
//! has produced. Crossing, cancellation and snapshot emission all live here;
//! the book never reaches across pairs — that's [`crate::engine::MatcherEngine`]'s job.

use chrono::Utc;
use common::{decimal, BookSnapshot, Decimal, EngineError, OpType, OrderView, RawCommand, Side, Trade};

use crate::queue::{AskOrder, BidOrder, BookOrder, RestingQueue};

/// One pair's resting liquidity and trade history.
pub struct OrderBook {
    pair: String,
    bids: RestingQueue<BidOrder>,
    asks: RestingQueue<AskOrder>,
    /// order_id -> (side, ts), so DELETE knows which queue to tombstone and
    /// which physical heap entry to tombstone, since the id alone stops
    /// being unique the moment it's reused after a DELETE.
    id_index: std::collections::HashMap<String, (Side, u64)>,
    seq: u64,
    trades: Vec<Trade>,
}

fn now_wall_clock_ms() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}

impl OrderBook {
    pub fn new(pair: impl Into<String>) -> Self {
        Self {
            pair: pair.into(),
            bids: RestingQueue::new(),
            asks: RestingQueue::new(),
            id_index: std::collections::HashMap::new(),
            seq: 0,
            trades: Vec::new(),
        }
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// Drives the book's state machine for one command.
    pub fn process(&mut self, cmd: &RawCommand) -> Result<(), EngineError> {
        match cmd.op {
            OpType::Delete => {
                // Unknown id: silent no-op.
                if let Some((side, ts)) = self.id_index.remove(&cmd.order_id) {
                    match side {
                        Side::Buy => self.bids.remove(&cmd.order_id, ts),
                        Side::Sell => self.asks.remove(&cmd.order_id, ts),
                    }
                }
                Ok(())
            }
            OpType::Create => {
                if self.id_index.contains_key(&cmd.order_id) {
                    return Err(EngineError::DuplicateOrderId(cmd.order_id.clone()));
                }

                let price = decimal::parse(&cmd.limit_price)?;
                let remaining = decimal::parse(&cmd.amount)?;

                // amount == 0: skipped, never indexed, never matched.
                if remaining.is_zero() {
                    return Ok(());
                }

                let ts = self.seq;
                self.seq += 1;

                let mut order = BookOrder {
                    id: cmd.order_id.clone(),
                    account: cmd.account_id.clone(),
                    price,
                    remaining,
                    ts,
                };

                match cmd.side {
                    Side::Buy => self.match_against_asks(&mut order),
                    Side::Sell => self.match_against_bids(&mut order),
                }

                if order.remaining > Decimal::ZERO {
                    self.add(cmd.side, order);
                }

                Ok(())
            }
        }
    }

    fn add(&mut self, side: Side, order: BookOrder) {
        self.id_index.insert(order.id.clone(), (side, order.ts));
        match side {
            Side::Buy => self.bids.push(order),
            Side::Sell => self.asks.push(order),
        }
    }

    /// Crossing algorithm for an incoming BUY against resting asks.
    fn match_against_asks(&mut self, incoming: &mut BookOrder) {
        loop {
            if incoming.remaining <= Decimal::ZERO {
                break;
            }
            let Some(best) = self.asks.peek() else {
                break;
            };
            if incoming.price < best.price {
                break;
            }

            let mut best = self.asks.pop().expect("peeked Some above");
            let trade_qty = incoming.remaining.min(best.remaining);

            self.trades.push(Trade {
                pair: self.pair.clone(),
                buy_order_id: incoming.id.clone(),
                sell_order_id: best.id.clone(),
                price: decimal::canonical(best.price),
                amount: decimal::canonical(trade_qty),
                ts: now_wall_clock_ms(),
            });

            incoming.remaining -= trade_qty;
            best.remaining -= trade_qty;

            if best.remaining.is_zero() {
                self.id_index.remove(&best.id);
            } else {
                self.asks.push(best);
            }
        }
    }

    /// Crossing algorithm for an incoming SELL against resting bids.
    fn match_against_bids(&mut self, incoming: &mut BookOrder) {
        loop {
            if incoming.remaining <= Decimal::ZERO {
                break;
            }
            let Some(best) = self.bids.peek() else {
                break;
            };
            if incoming.price > best.price {
                break;
            }

            let mut best = self.bids.pop().expect("peeked Some above");
            let trade_qty = incoming.remaining.min(best.remaining);

            self.trades.push(Trade {
                pair: self.pair.clone(),
                buy_order_id: best.id.clone(),
                sell_order_id: incoming.id.clone(),
                price: decimal::canonical(best.price),
                amount: decimal::canonical(trade_qty),
                ts: now_wall_clock_ms(),
            });

            incoming.remaining -= trade_qty;
            best.remaining -= trade_qty;

            if best.remaining.is_zero() {
                self.id_index.remove(&best.id);
            } else {
                self.bids.push(best);
            }
        }
    }

    /// Snapshot in heap array order — deliberately not sorted.
    pub fn snapshot(&self) -> BookSnapshot {
        let view = |o: &BookOrder| OrderView {
            id: o.id.clone(),
            account: o.account.clone(),
            price: decimal::canonical(o.price),
            remaining: decimal::canonical(o.remaining),
        };

        BookSnapshot {
            pair: self.pair.clone(),
            bids: self.bids.iter().map(view).collect(),
            asks: self.asks.iter().map(view).collect(),
        }
    }
}
