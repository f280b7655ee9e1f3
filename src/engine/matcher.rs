// ============================================================================
// Price-Cross Matcher
// Advisory candidate search over one side of the repository
// ============================================================================

use crate::domain::{Order, OrderId, Side};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Check if a resting price crosses a probe.
///
/// A bid probe crosses asks priced at or below it; an ask probe crosses bids
/// priced at or above it.
pub fn prices_cross(probe_side: Side, probe_price: Decimal, resting_price: Decimal) -> bool {
    match probe_side {
        Side::Bid => resting_price <= probe_price,
        Side::Ask => resting_price >= probe_price,
    }
}

/// Processable at `now`, positive quantity, and crossing the probe
pub fn is_match_candidate(
    resting: &Order,
    probe_side: Side,
    probe_price: Decimal,
    now: DateTime<Utc>,
) -> bool {
    resting.is_processable_at(now)
        && resting.quantity > 0
        && prices_cross(probe_side, probe_price, resting.price)
}

/// Copy every candidate out of `resting_side`. Linear scan, unordered.
pub fn collect_matches(
    resting_side: &HashMap<OrderId, Order>,
    probe_side: Side,
    probe_price: Decimal,
    now: DateTime<Utc>,
) -> Vec<Order> {
    resting_side
        .values()
        .filter(|order| is_match_candidate(order, probe_side, probe_price, now))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrderDetails;
    use chrono::Duration;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn resting(side: Side, price: i64, quantity: u64) -> Order {
        Order::good_till_cancelled(OrderDetails::new(side, Decimal::from(price), quantity))
    }

    fn index(orders: Vec<Order>) -> HashMap<OrderId, Order> {
        orders.into_iter().map(|order| (order.id, order)).collect()
    }

    #[test]
    fn test_prices_cross() {
        let hundred = Decimal::from(100);

        assert!(prices_cross(Side::Bid, hundred, Decimal::from(99)));
        assert!(prices_cross(Side::Bid, hundred, hundred));
        assert!(!prices_cross(Side::Bid, hundred, Decimal::from(101)));

        assert!(prices_cross(Side::Ask, hundred, Decimal::from(101)));
        assert!(prices_cross(Side::Ask, hundred, hundred));
        assert!(!prices_cross(Side::Ask, hundred, Decimal::from(99)));
    }

    #[test]
    fn test_fractional_prices_cross() {
        assert!(prices_cross(Side::Bid, Decimal::new(1005, 1), Decimal::new(10050, 2)));
        assert!(!prices_cross(Side::Bid, Decimal::new(1005, 1), Decimal::new(10051, 2)));
    }

    #[test]
    fn test_bid_probe_scenario() {
        let asks = vec![
            resting(Side::Ask, 100, 10),
            resting(Side::Ask, 120, 100),
            resting(Side::Ask, 999, 2),
            resting(Side::Ask, 1, 0),
        ];
        let expected: HashSet<OrderId> = asks[..2].iter().map(|order| order.id).collect();

        let matches = collect_matches(&index(asks), Side::Bid, Decimal::from(150), Utc::now());
        let found: HashSet<OrderId> = matches.iter().map(|order| order.id).collect();

        assert_eq!(found, expected);
        assert!(matches.iter().all(|order| order.side == Side::Ask));
    }

    #[test]
    fn test_ask_probe_scenario() {
        let valid = resting(Side::Bid, 10, 1);
        let valid_id = valid.id;
        let bids = vec![valid, resting(Side::Bid, 1, 2), resting(Side::Bid, 12, 0)];

        let matches = collect_matches(&index(bids), Side::Ask, Decimal::from(5), Utc::now());

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, valid_id);
    }

    #[test]
    fn test_unprocessable_orders_never_match() {
        let now = Utc::now();
        let mut disabled = resting(Side::Ask, 10, 5);
        disabled.disable();
        let expired = Order::good_till_cancelled(
            OrderDetails::new(Side::Ask, Decimal::from(10), 5).valid_until(now - Duration::hours(8)),
        );

        let matches = collect_matches(&index(vec![disabled, expired]), Side::Bid, Decimal::from(50), now);
        assert!(matches.is_empty());
    }

    prop_compose! {
        fn arb_resting(side: Side)(
            price in 0i64..1_000,
            quantity in 0u64..5,
            enabled in any::<bool>(),
            expired in any::<bool>(),
        ) -> Order {
            let now = Utc::now();
            let deadline = if expired {
                now - Duration::hours(1)
            } else {
                now + Duration::hours(1)
            };
            let mut order = Order::good_till_cancelled(
                OrderDetails::new(side, Decimal::from(price), quantity).valid_until(deadline),
            );
            if !enabled {
                order.disable();
            }
            order
        }
    }

    proptest! {
        #[test]
        fn prop_bid_probe_returns_exactly_crossing_asks(
            asks in proptest::collection::vec(arb_resting(Side::Ask), 0..40),
            probe_price in 0i64..1_000,
        ) {
            let now = Utc::now();
            let probe = Decimal::from(probe_price);
            let expected: HashSet<OrderId> = asks
                .iter()
                .filter(|ask| ask.is_processable_at(now) && ask.quantity > 0 && ask.price <= probe)
                .map(|ask| ask.id)
                .collect();

            let found: HashSet<OrderId> = collect_matches(&index(asks), Side::Bid, probe, now)
                .into_iter()
                .map(|ask| ask.id)
                .collect();

            prop_assert_eq!(found, expected);
        }

        #[test]
        fn prop_ask_probe_returns_exactly_crossing_bids(
            bids in proptest::collection::vec(arb_resting(Side::Bid), 0..40),
            probe_price in 0i64..1_000,
        ) {
            let now = Utc::now();
            let probe = Decimal::from(probe_price);
            let expected: HashSet<OrderId> = bids
                .iter()
                .filter(|bid| bid.is_processable_at(now) && bid.quantity > 0 && bid.price >= probe)
                .map(|bid| bid.id)
                .collect();

            let found: HashSet<OrderId> = collect_matches(&index(bids), Side::Ask, probe, now)
                .into_iter()
                .map(|bid| bid.id)
                .collect();

            prop_assert_eq!(found, expected);
        }
    }
}
