// src/application/dto/parser.rs
// Parsers for DTOs

use super::OrderRecord;
use crate::domain::model::{Order, OrderStatus};

/// Parse the response body of `GET /api/orders` into domain orders.
/// An empty, `null`, or missing payload is an empty collection, not an
/// error; response order is preserved and duplicates are kept.
pub fn parse_orders(body: &[u8]) -> Result<Vec<Order>, serde_json::Error> {
    if body.is_empty() {
        return Ok(Vec::new());
    }

    let records: Option<Vec<OrderRecord>> = serde_json::from_slice(body)?;
    Ok(records
        .unwrap_or_default()
        .into_iter()
        .map(OrderRecord::into_domain)
        .collect())
}

impl OrderRecord {
    /// Convert a wire record into the domain model, resolving the status
    /// label into the closed enumeration at this boundary.
    pub fn into_domain(self) -> Order {
        Order {
            id: self.id,
            status: OrderStatus::from_label(&self.status),
            client_name: self.client_name,
            created_at: self.created_at,
            extra: self.extra,
        }
    }
}
