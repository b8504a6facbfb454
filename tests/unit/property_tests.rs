//! Property-based checks of the matching rules using `proptest`.

use lob_engine::{ModifyOrder, Order, OrderBook, Side, TimeInForce};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Action {
    Submit {
        id: u64,
        side: Side,
        price: i64,
        quantity: u64,
        time_in_force: TimeInForce,
    },
    Cancel(u64),
    Modify {
        id: u64,
        side: Side,
        price: i64,
        quantity: u64,
    },
}

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Buy), Just(Side::Sell)]
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        6 => (0u64..40, side_strategy(), 95i64..106, 1u64..50, prop_oneof![
            3 => Just(TimeInForce::Gtc),
            1 => Just(TimeInForce::Ioc),
        ])
            .prop_map(|(id, side, price, quantity, time_in_force)| Action::Submit {
                id,
                side,
                price,
                quantity,
                time_in_force,
            }),
        2 => (0u64..40).prop_map(Action::Cancel),
        1 => (0u64..40, side_strategy(), 95i64..106, 1u64..50)
            .prop_map(|(id, side, price, quantity)| Action::Modify {
                id,
                side,
                price,
                quantity,
            }),
    ]
}

fn gtc_strategy() -> impl Strategy<Value = Vec<(Side, i64, u64)>> {
    prop::collection::vec((side_strategy(), 95i64..106, 1u64..50), 1..80)
}

proptest! {
    #[test]
    fn book_stays_consistent(actions in prop::collection::vec(action_strategy(), 1..120)) {
        let mut book = OrderBook::new("PROP");

        for action in actions {
            match action {
                Action::Submit { id, side, price, quantity, time_in_force } => {
                    let order = Order::new(id, side, price, quantity, time_in_force);
                    book.submit(order).unwrap();
                }
                Action::Cancel(id) => {
                    let resting = book.contains_order(id);
                    prop_assert_eq!(book.cancel(id).is_ok(), resting);
                }
                Action::Modify { id, side, price, quantity } => {
                    let resting = book.contains_order(id);
                    let result = book.modify(ModifyOrder::new(id, side, price, quantity));
                    prop_assert_eq!(result.is_ok(), resting);
                }
            }
            crate::invariant_tests::assert_book_consistent(&book);
        }
    }

    #[test]
    fn trades_respect_limits_and_priority(orders in gtc_strategy()) {
        let mut book = OrderBook::new("PROP");

        for (i, (side, price, quantity)) in orders.into_iter().enumerate() {
            let id = i as u64;
            let opposite_before: Vec<Order> = book
                .get_all_orders()
                .into_iter()
                .filter(|o| o.side() != side)
                .collect();

            let trades = book.submit(Order::gtc(id, side, price, quantity)).unwrap();

            let mut executed = 0;
            let mut previous: Option<usize> = None;
            for trade in &trades {
                let (mine, theirs) = match side {
                    Side::Buy => (trade.bid_trade(), trade.ask_trade()),
                    Side::Sell => (trade.ask_trade(), trade.bid_trade()),
                };
                prop_assert_eq!(mine.order_id, id);
                prop_assert_eq!(theirs.counterparty_id, id);
                prop_assert!(trade.quantity() > 0);

                // Resting orders are consumed in book order: best price, then arrival
                let position = opposite_before
                    .iter()
                    .position(|o| o.id() == theirs.order_id);
                prop_assert!(position.is_some());
                let position = position.unwrap_or_default();
                if let Some(previous) = previous {
                    prop_assert_eq!(position, previous + 1);
                } else {
                    prop_assert_eq!(position, 0);
                }
                previous = Some(position);

                let counterparty = &opposite_before[position];
                prop_assert!(trade.quantity() <= counterparty.remaining_quantity());
                prop_assert_eq!(mine.price, counterparty.price());
                match side {
                    Side::Buy => prop_assert!(counterparty.price() <= price),
                    Side::Sell => prop_assert!(counterparty.price() >= price),
                }
                executed += trade.quantity();
            }

            prop_assert!(executed <= quantity);
            let resting = book.get_order(id).map(|o| o.remaining_quantity()).unwrap_or(0);
            prop_assert_eq!(resting + executed, quantity);

            crate::invariant_tests::assert_book_consistent(&book);
        }
    }

    #[test]
    fn resting_quantity_is_conserved(orders in gtc_strategy()) {
        let mut book = OrderBook::new("PROP");
        let mut submitted = 0u64;
        let mut traded = 0u64;

        for (i, (side, price, quantity)) in orders.into_iter().enumerate() {
            submitted += quantity;
            let trades = book.submit(Order::gtc(i as u64, side, price, quantity)).unwrap();
            traded += trades.iter().map(|t| t.quantity()).sum::<u64>();
        }

        let resting = book.total_quantity(Side::Buy) + book.total_quantity(Side::Sell);
        prop_assert_eq!(resting + 2 * u128::from(traded), u128::from(submitted));
    }
}
