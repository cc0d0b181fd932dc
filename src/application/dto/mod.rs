// src/application/dto/mod.rs
// Data transfer objects for the orders API

pub mod chart;
pub mod parser;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::model::{NetworkError, OrderId};

pub use chart::{ChartError, Indicator, NamedSeries, RadarChart, RadarEntity, TrendChart};

/// One order record as returned by `GET /api/orders`.
/// Only id and status are interpreted; every other field rides along
/// untouched in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: OrderId,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub client_name: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
