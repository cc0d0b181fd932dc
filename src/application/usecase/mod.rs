pub mod chart_usecase;
pub mod fetch_orders_usecase;

// Re-export public API
pub use fetch_orders_usecase::{FetchLifecycle, FETCH_UNAVAILABLE_MSG};
