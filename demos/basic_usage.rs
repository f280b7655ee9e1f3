// ============================================================================
// Basic Usage Example
// ============================================================================

use chrono::{Duration, Utc};
use order_repository::prelude::*;
use order_repository::utils::init_logging;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging()?;

    println!("=== Order Repository Example ===\n");

    let repository = OrderRepositoryBuilder::new("EQUITIES")
        .with_default_validity(Duration::days(30))
        .build(Arc::new(LoggingEventHandler))?;

    println!("Created repository for {}\n", repository.get_market());

    // Add asks at different prices
    println!("Adding asks...");
    for i in 0i64..5 {
        let ask = repository.new_order(
            OrderDetails::new(Side::Ask, Decimal::from(100 + i * 10), 10)
                .with_trade_code(Uuid::new_v4())
                .with_counterparty(format!("seller_{}", i)),
        );
        repository.create_order(Some(ask))?;
    }

    // Add bids, one of which has already expired
    println!("Adding bids...");
    let mut bid_ids = Vec::new();
    for i in 0i64..5 {
        let mut details = OrderDetails::new(Side::Bid, Decimal::from(95 - i * 5), 5)
            .with_trade_code(Uuid::new_v4())
            .with_counterparty(format!("buyer_{}", i));
        if i == 4 {
            details = details.valid_until(Utc::now() - Duration::minutes(1));
        }
        let bid = repository.new_order(details);
        bid_ids.push(bid.id);
        repository.create_order(Some(bid))?;
    }

    println!("\n=== Market Data Snapshot ===");
    let snapshot = repository.market_data_snapshot()?;

    println!("\nBids:");
    for level in &snapshot.bids {
        println!("  {} @ {}", level.quantity, level.price);
    }

    println!("\nAsks:");
    for level in &snapshot.asks {
        println!("  {} @ {}", level.quantity, level.price);
    }

    println!("\nSpread: {:?}", snapshot.spread());

    // Which asks would a bid at 125 cross?
    println!("\n=== Match Query ===");
    let probe = Order::probe(Side::Bid, Decimal::from(125));
    let mut candidates = repository.match_order(Some(&probe))?;
    candidates.sort_by(|a, b| a.price.cmp(&b.price));
    for candidate in &candidates {
        println!(
            "  {} from {}: {} @ {}",
            candidate.id, candidate.counterparty, candidate.quantity, candidate.price
        );
    }

    // Soft delete the best bid
    println!("\n=== Disabling Best Bid ===");
    repository.disable_order(bid_ids[0])?;
    match repository.order_by_id(bid_ids[0]) {
        Ok(order) => println!("  still visible: {}", order.id),
        Err(err) => println!("  lookup after disable: {}", err),
    }

    let final_snapshot = repository.market_data_snapshot()?;
    println!("\n=== Final Book ===");
    println!("Bids: {} orders", final_snapshot.bids.len());
    println!("Asks: {} orders", final_snapshot.asks.len());
    println!("Best bid: {:?}", final_snapshot.best_bid());
    println!("Stored records: {}", repository.stored_orders());

    repository.close()?;
    Ok(())
}
