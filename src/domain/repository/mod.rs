// src/domain/repository/mod.rs
// Repository interfaces for domain entities

use async_trait::async_trait;

use crate::domain::model::{NetworkError, Order};

/// Repository interface for the remote order service.
/// One invocation performs exactly one read; retries, caching and request
/// de-duplication are the caller's concern, not the repository's.
#[async_trait]
pub trait OrderRepository {
    async fn fetch_orders(&self) -> Result<Vec<Order>, NetworkError>;
}
