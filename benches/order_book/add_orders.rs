use criterion::{BenchmarkId, Criterion};
use lob_engine::{Order, OrderBook, Side, TimeInForce};
use std::hint::black_box;

/// Register all benchmarks for adding resting orders to an order book
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Add Orders");

    // One level per order
    group.bench_function("add_limit_orders_distinct_prices", |b| {
        b.iter(|| {
            let mut order_book = OrderBook::new("TEST-SYMBOL");
            for i in 0..100u64 {
                let _ = black_box(order_book.add_limit_order(
                    i,
                    Side::Buy,
                    1000 + i as i64,
                    10,
                    TimeInForce::Gtc,
                ));
            }
        })
    });

    // Deep FIFO queue at one price
    group.bench_function("add_limit_orders_same_price", |b| {
        b.iter(|| {
            let mut order_book = OrderBook::new("TEST-SYMBOL");
            for i in 0..100u64 {
                let _ = black_box(order_book.submit(Order::gtc(i, Side::Sell, 1000, 10)));
            }
        })
    });

    // Rejected immediate-or-cancel orders never touch the book
    group.bench_function("reject_unmatched_ioc", |b| {
        let mut order_book = OrderBook::new("TEST-SYMBOL");
        order_book
            .submit(Order::gtc(0, Side::Sell, 1100, 10))
            .unwrap();
        let mut id = 1u64;
        b.iter(|| {
            id += 1;
            let _ = black_box(order_book.submit(Order::ioc(id, Side::Buy, 1000, 10)));
        })
    });

    for order_count in [10u64, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("order_count_scaling", order_count),
            order_count,
            |b, &order_count| {
                b.iter(|| {
                    let mut order_book = OrderBook::with_capacity("TEST-SYMBOL", order_count as usize);
                    for i in 0..order_count {
                        let _ = black_box(order_book.submit(Order::gtc(
                            i,
                            Side::Buy,
                            1000 - (i % 50) as i64,
                            10,
                        )));
                    }
                })
            },
        );
    }

    group.finish();
}
