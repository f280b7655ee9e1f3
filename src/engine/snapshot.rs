// ============================================================================
// Market Data Snapshot Builder
// ============================================================================

use crate::domain::{MarketDataSnapshot, Order, OrderId, OrderSnapshot};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Project every processable order on one side, ascending by price.
///
/// Quantity is not filtered: a zero-quantity order still quotes its price.
pub fn side_snapshot(orders: &HashMap<OrderId, Order>, now: DateTime<Utc>) -> Vec<OrderSnapshot> {
    let mut levels: Vec<OrderSnapshot> = orders
        .values()
        .filter(|order| order.is_processable_at(now))
        .map(Order::snapshot)
        .collect();

    sort_by_price(&mut levels);
    levels
}

pub fn build_snapshot(
    asks: &HashMap<OrderId, Order>,
    bids: &HashMap<OrderId, Order>,
    now: DateTime<Utc>,
) -> MarketDataSnapshot {
    MarketDataSnapshot::new(side_snapshot(asks, now), side_snapshot(bids, now))
}

/// Stable: equal prices keep their input order.
fn sort_by_price(levels: &mut [OrderSnapshot]) {
    levels.sort_by(|a, b| a.price.cmp(&b.price));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderDetails, Side};
    use chrono::Duration;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn index(orders: Vec<Order>) -> HashMap<OrderId, Order> {
        orders.into_iter().map(|order| (order.id, order)).collect()
    }

    fn resting(side: Side, price: i64, quantity: u64) -> Order {
        Order::good_till_cancelled(OrderDetails::new(side, Decimal::from(price), quantity))
    }

    #[test]
    fn test_sort_is_stable() {
        let mut levels = vec![
            OrderSnapshot::new(Decimal::from(5), 1),
            OrderSnapshot::new(Decimal::from(3), 7),
            OrderSnapshot::new(Decimal::from(5), 2),
            OrderSnapshot::new(Decimal::from(3), 8),
            OrderSnapshot::new(Decimal::from(5), 3),
        ];
        sort_by_price(&mut levels);

        let quantities: Vec<u64> = levels.iter().map(|level| level.quantity).collect();
        assert_eq!(quantities, vec![7, 8, 1, 2, 3]);
    }

    #[test]
    fn test_filters_unprocessable_keeps_zero_quantity() {
        let now = Utc::now();
        let mut disabled = resting(Side::Bid, 50, 1);
        disabled.disable();
        let expired = Order::good_till_cancelled(
            OrderDetails::new(Side::Bid, Decimal::from(1), 2).valid_until(now - Duration::hours(8)),
        );

        let bids = index(vec![
            resting(Side::Bid, 12, 1),
            resting(Side::Bid, 10, 0),
            disabled,
            expired,
        ]);

        let levels = side_snapshot(&bids, now);
        assert_eq!(
            levels,
            vec![
                OrderSnapshot::new(Decimal::from(10), 0),
                OrderSnapshot::new(Decimal::from(12), 1),
            ]
        );
    }

    #[test]
    fn test_build_snapshot_sides() {
        let asks = index(vec![resting(Side::Ask, 120, 100), resting(Side::Ask, 100, 10)]);
        let bids = index(vec![resting(Side::Bid, 10, 1)]);

        let snapshot = build_snapshot(&asks, &bids, Utc::now());
        assert_eq!(snapshot.asks.len(), 2);
        assert_eq!(snapshot.asks[0].price, Decimal::from(100));
        assert_eq!(snapshot.bids, vec![OrderSnapshot::new(Decimal::from(10), 1)]);
    }

    #[test]
    fn test_empty_book() {
        let snapshot = build_snapshot(&HashMap::new(), &HashMap::new(), Utc::now());
        assert!(snapshot.is_empty());
    }

    proptest! {
        #[test]
        fn prop_levels_are_non_decreasing(
            prices in proptest::collection::vec((0i64..10_000, 0u32..4), 0..60),
        ) {
            let orders: Vec<Order> = prices
                .into_iter()
                .map(|(mantissa, scale)| {
                    Order::good_till_cancelled(OrderDetails::new(
                        Side::Ask,
                        Decimal::new(mantissa, scale),
                        1,
                    ))
                })
                .collect();
            let count = orders.len();

            let levels = side_snapshot(&index(orders), Utc::now());

            prop_assert_eq!(levels.len(), count);
            prop_assert!(levels.windows(2).all(|pair| pair[0].price <= pair[1].price));
        }
    }
}
