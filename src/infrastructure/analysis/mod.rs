// src/infrastructure/analysis/mod.rs
// Aggregation engine for order statistics

use crate::domain::model::{AggregateStats, Order, OrderStatus};

/// Derive counts from an order collection in a single pass.
/// Statuses match exactly; an unrecognized status increments no bucket and
/// still counts toward the total.
pub fn aggregate(orders: &[Order]) -> AggregateStats {
    let mut stats = AggregateStats {
        total: orders.len(),
        ..AggregateStats::default()
    };

    for order in orders {
        match order.status {
            OrderStatus::Ongoing => stats.ongoing += 1,
            OrderStatus::Completed => stats.completed += 1,
            OrderStatus::Cancelled => stats.cancelled += 1,
            OrderStatus::Unrecognized(_) => {}
        }
    }

    stats
}

/// Capacity load shown on the overview card: ongoing share of the total,
/// rounded to whole percent and capped at 100. Reports 0 for an empty
/// collection instead of dividing by zero.
pub fn load_percent(stats: &AggregateStats) -> u8 {
    if stats.total == 0 {
        return 0;
    }
    let percent = (stats.ongoing as f64 / stats.total as f64) * 100.0;
    percent.round().min(100.0) as u8
}
