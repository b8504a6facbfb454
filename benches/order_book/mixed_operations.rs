use criterion::Criterion;
use lob_engine::{ModifyOrder, Order, OrderBook, Side};
use std::hint::black_box;

/// Register benchmarks for mixed/realistic order book operations
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Mixed Operations");

    group.bench_function("realistic_trading_scenario", |b| {
        b.iter(|| {
            let mut order_book = OrderBook::new("TEST-SYMBOL");
            let mut next_id = 0u64;

            // Phase 1: build both sides
            for i in 0..50 {
                let _ = black_box(order_book.submit(Order::gtc(next_id, Side::Buy, 990 + i % 10, 10)));
                let _ = black_box(order_book.submit(Order::gtc(
                    next_id + 1,
                    Side::Sell,
                    1010 + i % 10,
                    10,
                )));
                next_id += 2;
            }

            // Phase 2: aggressive immediate-or-cancel flow
            for i in 0..5 {
                let (side, price) = if i % 2 == 0 {
                    (Side::Buy, 1019)
                } else {
                    (Side::Sell, 990)
                };
                let _ = black_box(order_book.submit(Order::ioc(next_id, side, price, 50)));
                next_id += 1;
            }

            // Phase 3: cancel every fifth resting order
            let all_orders = order_book.get_all_orders();
            for (i, order) in all_orders.iter().enumerate() {
                if i % 5 == 0 {
                    let _ = black_box(order_book.cancel(order.id()));
                }
            }

            // Phase 4: reprice what is left on the bid side
            let bids: Vec<_> = all_orders
                .iter()
                .filter(|o| o.side() == Side::Buy)
                .map(|o| o.id())
                .collect();
            for id in bids {
                let _ = black_box(order_book.modify(ModifyOrder::new(id, Side::Buy, 995, 10)));
            }

            black_box(order_book.create_snapshot(5));
        })
    });

    group.bench_function("high_frequency_scenario", |b| {
        b.iter(|| {
            let mut order_book = OrderBook::new("TEST-SYMBOL");

            for i in 0..200u64 {
                let side = if i % 2 == 0 { Side::Buy } else { Side::Sell };
                let price = if side == Side::Buy {
                    1000 - (i / 2) as i64
                } else {
                    1001 + (i / 2) as i64
                };
                let _ = black_box(order_book.submit(Order::gtc(i, side, price, 5)));
            }

            for i in 0..100u64 {
                let side = if i % 2 == 0 { Side::Buy } else { Side::Sell };
                let cross = if side == Side::Buy { 1100 } else { 900 };
                let _ = black_box(order_book.submit(Order::ioc(1_000 + i, side, cross, 2)));

                let price = if side == Side::Buy {
                    999 - (i % 10) as i64
                } else {
                    1001 + (i % 10) as i64
                };
                let _ = black_box(order_book.submit(Order::gtc(2_000 + i, side.opposite(), price, 5)));
            }
        })
    });

    group.finish();
}
