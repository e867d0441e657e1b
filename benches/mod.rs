use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use matchbook_rs::{OrderBook, OrderKind, Side};
use std::hint::black_box;

/// Resting inserts across a band of price levels.
fn bench_add_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Add");

    for &order_count in &[1_000usize, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("rest_limit_orders", order_count),
            &order_count,
            |b, &count| {
                b.iter_with_setup(
                    || OrderBook::new("BENCH"),
                    |book| {
                        for i in 0..count {
                            let price = 100.0 + (i % 500) as f64 * 0.01;
                            let side = if i % 2 == 0 { Side::Buy } else { Side::Sell };
                            // bids stay below 100, asks at or above
                            let price = if side == Side::Buy { price - 10.0 } else { price };
                            let _ = black_box(book.submit(side, OrderKind::Limit, price, 10));
                        }
                        book
                    },
                );
            },
        );
    }

    group.finish();
}

/// Cancellation by id against a populated book.
fn bench_cancel_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Cancel");

    for &order_count in &[1_000usize, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("cancel_by_id", order_count),
            &order_count,
            |b, &count| {
                b.iter_with_setup(
                    || {
                        let book = OrderBook::new("BENCH");
                        let mut ids = Vec::with_capacity(count);
                        for i in 0..count {
                            let price = 90.0 - (i % 500) as f64 * 0.01;
                            let result = book
                                .submit(Side::Buy, OrderKind::Limit, price, 10)
                                .expect("resting bid");
                            ids.push(result.order_id);
                        }
                        (book, ids)
                    },
                    |(book, ids)| {
                        for id in ids {
                            assert!(black_box(book.cancel(id)));
                        }
                    },
                );
            },
        );
    }

    group.finish();
}

/// An aggressive market order sweeping a deep opposing side.
fn bench_market_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Sweep");

    for &levels in &[10usize, 100] {
        group.bench_with_input(
            BenchmarkId::new("market_walks_levels", levels),
            &levels,
            |b, &levels| {
                b.iter_with_setup(
                    || {
                        let book = OrderBook::new("BENCH");
                        for i in 0..levels {
                            let price = 100.0 + i as f64 * 0.01;
                            let _ = book.submit(Side::Sell, OrderKind::Limit, price, 10);
                        }
                        book
                    },
                    |book| {
                        let result = book
                            .submit(Side::Buy, OrderKind::Market, 0.0, 10 * levels as u64)
                            .expect("market order");
                        black_box(result);
                    },
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_add_orders, bench_cancel_orders, bench_market_sweep);
criterion_main!(benches);
