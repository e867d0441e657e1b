//! Concurrent access: parallel submitters, cancellers and the maker
//! driver sharing one engine.

use matchbook_rs::{
    ExchangeEngine, MakerConfig, MakerPool, MarketMaker, OrderId, OrderKind, Side,
};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[test]
fn parallel_submitters_on_one_book_are_serialized() {
    let engine = Arc::new(ExchangeEngine::new());
    engine.add_symbol("AAPL", 150.0).unwrap();

    let threads = 8;
    let per_thread = 200;
    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let mut ids = Vec::with_capacity(per_thread);
                for i in 0..per_thread {
                    // non-overlapping bids so nothing crosses
                    let price = 100.0 - (t * per_thread + i) as f64 * 0.01;
                    let result = engine
                        .submit("AAPL", Side::Buy, OrderKind::Limit, price, 10)
                        .unwrap();
                    ids.push(result.order_id);
                }
                ids
            })
        })
        .collect();

    let mut all_ids: Vec<OrderId> = Vec::new();
    for handle in handles {
        all_ids.extend(handle.join().unwrap());
    }

    // every submission got a distinct id and rested
    let unique: HashSet<OrderId> = all_ids.iter().copied().collect();
    assert_eq!(unique.len(), threads * per_thread);
    let book = engine.get_book("AAPL").unwrap();
    assert_eq!(book.order_count(), threads * per_thread);
}

#[test]
fn submitters_and_cancellers_race_without_corruption() {
    let engine = Arc::new(ExchangeEngine::new());
    engine.add_symbol("AAPL", 150.0).unwrap();

    let rounds = 500;
    let submitter = {
        let engine = Arc::clone(&engine);
        thread::spawn(move || {
            let mut ids = Vec::new();
            for i in 0..rounds {
                let price = 90.0 + (i % 50) as f64 * 0.1;
                let result = engine
                    .submit("AAPL", Side::Buy, OrderKind::Limit, price, 5)
                    .unwrap();
                ids.push(result.order_id);
            }
            ids
        })
    };
    let canceller = {
        let engine = Arc::clone(&engine);
        thread::spawn(move || {
            // cancel a moving guess of recently assigned ids; misses are
            // no-ops by contract
            for i in 1..=rounds as u64 {
                let _ = engine.cancel("AAPL", OrderId::new(i));
            }
        })
    };

    let ids = submitter.join().unwrap();
    canceller.join().unwrap();

    // whatever survived the races must still cancel exactly once
    let book = engine.get_book("AAPL").unwrap();
    let mut live = 0;
    for id in ids {
        if book.cancel(id) {
            live += 1;
            assert!(!book.cancel(id));
        }
    }
    assert_eq!(book.order_count(), 0);
    assert!(live <= rounds);
}

#[test]
fn books_on_distinct_symbols_do_not_interfere() {
    let engine = Arc::new(ExchangeEngine::new());
    engine.add_symbol("AAPL", 150.0).unwrap();
    engine.add_symbol("MSFT", 380.0).unwrap();

    let handles: Vec<_> = [("AAPL", 100.0), ("MSFT", 370.0)]
        .into_iter()
        .map(|(symbol, base)| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for i in 0..500 {
                    let price = base - (i % 20) as f64 * 0.05;
                    engine
                        .submit(symbol, Side::Buy, OrderKind::Limit, price, 1)
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(engine.get_book("AAPL").unwrap().order_count(), 500);
    assert_eq!(engine.get_book("MSFT").unwrap().order_count(), 500);
}

#[test]
fn client_flow_against_a_running_maker_driver_keeps_books_sane() {
    let engine = Arc::new(ExchangeEngine::new());
    engine.add_symbol("AAPL", 150.0).unwrap();

    let mut pool = MakerPool::new(Arc::clone(&engine));
    pool.add_maker(MarketMaker::new("AAPL", 150.0, &MakerConfig::default(), 3));
    let handle = pool.start(Duration::from_millis(2));

    let client = {
        let engine = Arc::clone(&engine);
        thread::spawn(move || {
            for i in 0..200 {
                let side = if i % 2 == 0 { Side::Buy } else { Side::Sell };
                let _ = engine.submit("AAPL", side, OrderKind::Market, 0.0, 20);
                // the books must never cross, whatever the interleaving
                let top = engine.top_of_book("AAPL").unwrap();
                if top.bid > 0.0 && top.ask > 0.0 {
                    assert!(top.bid < top.ask, "crossed book: {} >= {}", top.bid, top.ask);
                }
            }
        })
    };

    client.join().unwrap();
    handle.stop();
}
