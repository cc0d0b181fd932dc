// src/domain/model/mod.rs
// Core domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque order identifier assigned by the upstream service.
/// The service emits either a JSON integer or a string; both forms are
/// preserved unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OrderId::Number(n) => write!(f, "{}", n),
            OrderId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Order lifecycle status, parsed once at the repository boundary.
/// Labels the boundary does not recognize are bucketed explicitly instead
/// of being dropped; they match none of the three counters but still count
/// toward the collection total.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderStatus {
    Ongoing,
    Completed,
    Cancelled,
    Unrecognized(String),
}

impl OrderStatus {
    /// Map a wire label to its status. The upstream service emits localized
    /// labels; their ASCII equivalents are accepted as exact alternates.
    pub fn from_label(label: &str) -> Self {
        match label {
            "进行中" | "ongoing" => OrderStatus::Ongoing,
            "已完成" | "completed" => OrderStatus::Completed,
            "已取消" | "cancelled" => OrderStatus::Cancelled,
            other => OrderStatus::Unrecognized(other.to_string()),
        }
    }

    pub fn as_label(&self) -> &str {
        match self {
            OrderStatus::Ongoing => "ongoing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unrecognized(raw) => raw,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// One production/delivery engagement tracked by the dashboard.
/// Attributes beyond id and status are pass-through; the core never
/// interprets them.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    pub client_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub extra: Map<String, Value>,
}

impl Order {
    pub fn new(id: OrderId, status: OrderStatus) -> Self {
        Self {
            id,
            status,
            client_name: None,
            created_at: None,
            extra: Map::new(),
        }
    }
}

/// Counts derived from the current order collection.
/// Invariant: ongoing + completed + cancelled <= total; unrecognized
/// statuses contribute to total only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateStats {
    pub total: usize,
    pub ongoing: usize,
    pub completed: usize,
    pub cancelled: usize,
}

/// Fetch lifecycle state; exactly one variant is active at any time.
/// Ready and Failed are mutually exclusive, entering one clears the other.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Ready(Vec<Order>),
    Failed(String),
}

impl FetchState {
    /// The order collection seen by aggregation; empty unless Ready.
    pub fn orders(&self) -> &[Order] {
        match self {
            FetchState::Ready(orders) => orders,
            FetchState::Loading | FetchState::Failed(_) => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Immutable value published to dashboard observers on every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub generation: u64,
    pub state: FetchState,
    pub stats: AggregateStats,
}

impl DashboardSnapshot {
    pub fn initial() -> Self {
        Self {
            generation: 0,
            state: FetchState::Loading,
            stats: AggregateStats::default(),
        }
    }
}

// Transport failures collapsed into a single externally visible kind; the
// rest of the system never distinguishes the cause beyond its message.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("malformed payload: {0}")]
    Payload(String),
}
