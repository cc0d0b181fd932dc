// src/infrastructure/api/mod.rs
// HTTP implementation of the order repository

use async_trait::async_trait;
use hyper::client::HttpConnector;
use hyper::{Body, Client, Uri};
use hyper_tls::HttpsConnector;

use crate::application::dto::parser;
use crate::domain::model::{NetworkError, Order};
use crate::domain::repository::OrderRepository;

/// Order repository backed by `GET {base_url}/api/orders`.
/// One network round-trip per invocation; no retries, no caching.
pub struct HttpOrderRepository {
    client: Client<HttpsConnector<HttpConnector>>,
    base_url: String,
}

impl HttpOrderRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder().build::<_, Body>(HttpsConnector::new());
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn orders_uri(&self) -> Result<Uri, NetworkError> {
        format!("{}/api/orders", self.base_url)
            .parse()
            .map_err(|e: hyper::http::uri::InvalidUri| NetworkError::Connection(e.to_string()))
    }
}

#[async_trait]
impl OrderRepository for HttpOrderRepository {
    async fn fetch_orders(&self) -> Result<Vec<Order>, NetworkError> {
        let uri = self.orders_uri()?;

        let response = self
            .client
            .get(uri)
            .await
            .map_err(|e| NetworkError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status(status.as_u16()));
        }

        let body = hyper::body::to_bytes(response.into_body())
            .await
            .map_err(|e| NetworkError::Connection(e.to_string()))?;

        parser::parse_orders(&body).map_err(|e| NetworkError::Payload(e.to_string()))
    }
}
