//! The cross algorithm: consumes resting liquidity against an incoming
//! order under price-time priority.

use crate::orderbook::book::BookCore;
use crate::orderbook::order::{Order, OrderKind};
use crate::orderbook::trade::ExecutionReport;
use uuid::Uuid;

impl BookCore {
    /// Matches `incoming` against the opposite side of the book.
    ///
    /// Levels are consumed in best-price-first order and, within one
    /// level, strictly FIFO. Every fill happens at the resting order's
    /// price and emits two sibling reports (aggressor first) sharing a
    /// trade id. Emptied levels are removed from their map and the
    /// cached best price on that side is refreshed.
    ///
    /// The loop stops when the incoming order is filled, the opposite
    /// side is exhausted, or a limit order reaches its limit price.
    /// Market orders skip the price check and walk arbitrarily many
    /// levels.
    pub(super) fn execute(&mut self, incoming: &mut Order) -> Vec<ExecutionReport> {
        let mut reports = Vec::new();
        let is_buy = incoming.side.is_buy();

        while incoming.remaining() > 0 {
            let best_key = if is_buy {
                self.asks.keys().next().copied()
            } else {
                self.bids.keys().next_back().copied()
            };
            let Some(best_key) = best_key else {
                break;
            };
            let best_price = best_key.into_inner();

            if incoming.kind == OrderKind::Limit {
                if is_buy && best_price > incoming.price {
                    break;
                }
                if !is_buy && best_price < incoming.price {
                    break;
                }
            }

            let (fills, level_emptied) = {
                let levels = if is_buy { &mut self.asks } else { &mut self.bids };
                let Some(level) = levels.get_mut(&best_key) else {
                    break;
                };
                let outcome = level.match_order(incoming.remaining());
                (outcome.fills, level.is_empty())
            };

            for fill in fills {
                let incoming_status = incoming.fill(fill.quantity);
                self.last_trade_price = best_price;
                self.last_trade_qty = fill.quantity;

                let trade_id = Uuid::new_v4();
                reports.push(ExecutionReport::new(
                    trade_id,
                    incoming.id,
                    fill.resting_id,
                    best_price,
                    fill.quantity,
                    incoming_status,
                ));
                reports.push(ExecutionReport::new(
                    trade_id,
                    fill.resting_id,
                    incoming.id,
                    best_price,
                    fill.quantity,
                    fill.resting_status,
                ));

                if fill.resting_status.is_terminated() {
                    self.order_locations.remove(&fill.resting_id);
                }
            }

            if level_emptied {
                let levels = if is_buy { &mut self.asks } else { &mut self.bids };
                levels.remove(&best_key);
                self.refresh_best(incoming.side.opposite());
            }
        }

        reports
    }
}
