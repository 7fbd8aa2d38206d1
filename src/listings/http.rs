//! HTTP listing source.
//!
//! One GET to a fixed endpoint that answers with `{"items": [...]}`.
//! No retries, no pagination, no caching.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::core::listing::{Listing, ListingPayload};
use crate::listings::source::{FetchError, ListingSource};

pub struct HttpListingSource {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpListingSource {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Config(e.to_string()))?;
        Ok(Self { endpoint, client })
    }
}

#[async_trait]
impl ListingSource for HttpListingSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_listings(&self) -> Result<Vec<Listing>, FetchError> {
        info!("Fetching listings from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    FetchError::Config(e.to_string())
                } else {
                    FetchError::Network(e.to_string())
                }
            })?;

        debug!("Listings response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Listings endpoint error: {} - {}", status, err_body);
            return Err(FetchError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let payload: ListingPayload =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        info!("Fetched {} listings", payload.items.len());
        Ok(payload.items)
    }
}
