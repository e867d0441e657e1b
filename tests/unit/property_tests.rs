//! Property-based invariant checks over random order flow and the
//! simulation models.

use matchbook_rs::sim::MIN_PRICE;
use matchbook_rs::{GbmModel, Lcg32, OrderBook, OrderId, OrderKind, OrderStatus, Side};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Limit {
        side: Side,
        price_ticks: u8,
        quantity: u64,
    },
    Market {
        side: Side,
        quantity: u64,
    },
    Cancel {
        index: usize,
    },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (any::<bool>(), 1u8..=40, 1u64..=50).prop_map(|(buy, price_ticks, quantity)| {
            Op::Limit {
                side: if buy { Side::Buy } else { Side::Sell },
                price_ticks,
                quantity,
            }
        }),
        1 => (any::<bool>(), 1u64..=50).prop_map(|(buy, quantity)| Op::Market {
            side: if buy { Side::Buy } else { Side::Sell },
            quantity,
        }),
        1 => (0usize..256).prop_map(|index| Op::Cancel { index }),
    ]
}

/// Checks every reachable-state invariant observable through the
/// public API.
fn check_invariants(book: &OrderBook) {
    let best_bid = book.best_bid();
    let best_ask = book.best_ask();
    if let (Some(bid), Some(ask)) = (best_bid, best_ask) {
        assert!(bid < ask, "crossed book: {bid} >= {ask}");
    }

    for side in [Side::Buy, Side::Sell] {
        let depth = book.depth(side, usize::MAX);

        // cached best equals the extremal level
        let best = match side {
            Side::Buy => best_bid,
            Side::Sell => best_ask,
        };
        assert_eq!(depth.first().map(|level| level.price), best);

        for level in &depth {
            let orders = book.orders_at(side, level.price);
            assert!(!orders.is_empty(), "empty level at {}", level.price);
            assert_eq!(level.orders, orders.len());

            let remainder_sum: u64 = orders.iter().map(|order| order.remaining()).sum();
            assert_eq!(level.quantity, remainder_sum);

            for order in &orders {
                assert!(order.filled_quantity < order.quantity);
                assert!(order.status.is_active());
                assert_eq!(order.kind, OrderKind::Limit);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_flow_preserves_book_invariants(
        ops in proptest::collection::vec(op_strategy(), 1..120)
    ) {
        let book = OrderBook::new("AAPL");
        let mut issued: Vec<OrderId> = Vec::new();

        for op in ops {
            match op {
                Op::Limit { side, price_ticks, quantity } => {
                    let price = f64::from(price_ticks) * 0.5;
                    let result = book.submit(side, OrderKind::Limit, price, quantity).unwrap();
                    issued.push(result.order_id);

                    let aggressor_total: u64 = result
                        .reports
                        .iter()
                        .filter(|report| report.order_id == result.order_id)
                        .map(|report| report.quantity)
                        .sum();
                    prop_assert_eq!(aggressor_total, result.filled_quantity);
                }
                Op::Market { side, quantity } => {
                    let result = book.submit(side, OrderKind::Market, 0.0, quantity).unwrap();
                    // a market order either fills completely or is cancelled
                    prop_assert!(matches!(
                        result.status,
                        OrderStatus::Filled | OrderStatus::Cancelled
                    ));
                }
                Op::Cancel { index } => {
                    if !issued.is_empty() {
                        let id = issued[index % issued.len()];
                        let _ = book.cancel(id);
                    }
                }
            }
            check_invariants(&book);
        }
    }

    #[test]
    fn cancelling_everything_empties_the_book(
        ops in proptest::collection::vec(op_strategy(), 1..80)
    ) {
        let book = OrderBook::new("AAPL");
        let mut issued: Vec<OrderId> = Vec::new();

        for op in ops {
            match op {
                Op::Limit { side, price_ticks, quantity } => {
                    let price = f64::from(price_ticks) * 0.5;
                    issued.push(book.submit(side, OrderKind::Limit, price, quantity).unwrap().order_id);
                }
                Op::Market { side, quantity } => {
                    let _ = book.submit(side, OrderKind::Market, 0.0, quantity);
                }
                Op::Cancel { index } => {
                    if !issued.is_empty() {
                        let _ = book.cancel(issued[index % issued.len()]);
                    }
                }
            }
        }

        for id in issued {
            let cancelled = book.cancel(id);
            // a second cancel of the same id must always be a no-op
            if cancelled {
                prop_assert!(!book.cancel(id));
            }
        }

        prop_assert_eq!(book.order_count(), 0);
        prop_assert_eq!(book.best_bid(), None);
        prop_assert_eq!(book.best_ask(), None);
    }

    #[test]
    fn rng_sequences_are_deterministic(seed in any::<u32>()) {
        let mut a = Lcg32::new(seed);
        let mut b = Lcg32::new(seed);
        for _ in 0..64 {
            prop_assert_eq!(a.uniform(), b.uniform());
        }
        for _ in 0..64 {
            prop_assert_eq!(a.normal(), b.normal());
        }
    }

    #[test]
    fn gbm_prices_never_drop_below_the_floor(
        seed in any::<u32>(),
        volatility in 0.0f64..5.0,
        start in 0.01f64..1000.0
    ) {
        let mut model = GbmModel::new(start, 0.0, volatility, 1.0 / 252.0, seed);
        for _ in 0..200 {
            prop_assert!(model.next_price() >= MIN_PRICE);
        }
    }
}
