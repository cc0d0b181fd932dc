// src/domain/mod.rs
pub mod model;
pub mod repository;

// Re-export common types for convenience
pub use model::{
    AggregateStats, DashboardSnapshot, FetchState, NetworkError, Order, OrderId, OrderStatus,
};
pub use repository::OrderRepository;
