// demos/src/bin/simple_match.rs
//
// A scripted walkthrough of the matching rules on one book:
// resting liquidity, a partial cross, price-time priority at one
// level, and a market order walking the book.
//
// Run with:
//   cargo run --bin simple_match

use matchbook_rs::{ExchangeEngine, OrderKind, Side, setup_logger};
use tracing::info;

fn main() {
    setup_logger();

    let engine = ExchangeEngine::new();
    engine.add_symbol("AAPL", 150.0).expect("fresh engine");

    info!("=== Resting liquidity ===");
    for (price, quantity) in [(150.10, 100u64), (150.20, 80), (150.30, 60)] {
        let ask = engine
            .submit("AAPL", Side::Sell, OrderKind::Limit, price, quantity)
            .expect("valid ask");
        info!("ask {} resting: {} x {}", ask.order_id, quantity, price);
    }

    let top = engine.top_of_book("AAPL").expect("registered");
    info!("top of book: bid {} / ask {}", top.bid, top.ask);

    info!("=== Partial cross ===");
    let buy = engine
        .submit("AAPL", Side::Buy, OrderKind::Limit, 150.10, 40)
        .expect("valid bid");
    info!(
        "buy {} filled {} of 40, status {}",
        buy.order_id, buy.filled_quantity, buy.status
    );
    for report in &buy.reports {
        info!(
            "  report: order {} traded {} @ {} -> {}",
            report.order_id, report.quantity, report.price, report.status
        );
    }

    info!("=== Market order walks the book ===");
    let sweep = engine
        .submit("AAPL", Side::Buy, OrderKind::Market, 0.0, 200)
        .expect("market order");
    info!(
        "market buy filled {} across {} fills, final status {}",
        sweep.filled_quantity,
        sweep.reports.len() / 2,
        sweep.status
    );

    let (last_price, last_quantity) = engine.last_trade("AAPL").expect("registered");
    info!("last trade: {} x {}", last_quantity, last_price);
    info!(
        "remaining depth on ask side: {:?}",
        engine.depth("AAPL", Side::Sell, 5).expect("registered")
    );
}
