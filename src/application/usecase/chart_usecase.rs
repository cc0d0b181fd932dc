// src/application/usecase/chart_usecase.rs
// Chart series adapter: shapes aggregates and reference data for the
// charting surface

use chrono::{Datelike, Duration, NaiveDate};

use crate::application::dto::chart::{
    ChartError, Indicator, NamedSeries, RadarChart, RadarEntity, TrendChart,
};
use crate::domain::model::{Order, OrderStatus};

/// Weekday labels for the weekly output trend panel.
pub const WEEKDAY_AXIS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Per-site weekly output panel. Reference data until per-site production
/// feeds arrive; shaped identically to live-derived series.
pub fn weekly_output_trend() -> Result<TrendChart, ChartError> {
    TrendChart::new(
        WEEKDAY_AXIS.iter().map(|d| d.to_string()).collect(),
        vec![
            NamedSeries::new(
                "Beijing Plant",
                vec![120.0, 132.0, 101.0, 134.0, 90.0, 230.0, 210.0],
            ),
            NamedSeries::new(
                "Suzhou Plant",
                vec![220.0, 182.0, 191.0, 234.0, 290.0, 330.0, 310.0],
            ),
        ],
    )
}

/// Per-site composite health panel. Reference scores on a 0-100 scale.
pub fn site_health_radar() -> Result<RadarChart, ChartError> {
    RadarChart::new(
        vec![
            Indicator::new("Capacity", 100.0),
            Indicator::new("Quality", 100.0),
            Indicator::new("SLA", 100.0),
            Indicator::new("Activity", 100.0),
            Indicator::new("Equipment", 100.0),
        ],
        vec![
            RadarEntity::new("Beijing Plant", vec![90.0, 98.0, 85.0, 95.0, 92.0]),
            RadarEntity::new("Suzhou Plant", vec![85.0, 90.0, 95.0, 80.0, 88.0]),
        ],
    )
}

/// Live-derived trend: orders bucketed per day and status over a trailing
/// window ending at `today`. Orders without a parseable timestamp, or
/// outside the window, are skipped; unrecognized statuses feed no series.
pub fn status_trend(
    orders: &[Order],
    days: usize,
    today: NaiveDate,
) -> Result<TrendChart, ChartError> {
    let window: Vec<NaiveDate> = (0..days)
        .rev()
        .map(|back| today - Duration::days(back as i64))
        .collect();
    let axis = window
        .iter()
        .map(|day| format!("{:02}-{:02}", day.month(), day.day()))
        .collect();

    let mut ongoing = vec![0.0; days];
    let mut completed = vec![0.0; days];
    let mut cancelled = vec![0.0; days];

    for order in orders {
        let created = match order.created_at {
            Some(ts) => ts.date_naive(),
            None => continue,
        };
        let slot = match window.iter().position(|day| *day == created) {
            Some(idx) => idx,
            None => continue,
        };
        match order.status {
            OrderStatus::Ongoing => ongoing[slot] += 1.0,
            OrderStatus::Completed => completed[slot] += 1.0,
            OrderStatus::Cancelled => cancelled[slot] += 1.0,
            OrderStatus::Unrecognized(_) => {}
        }
    }

    TrendChart::new(
        axis,
        vec![
            NamedSeries::new("Ongoing", ongoing),
            NamedSeries::new("Completed", completed),
            NamedSeries::new("Cancelled", cancelled),
        ],
    )
}
