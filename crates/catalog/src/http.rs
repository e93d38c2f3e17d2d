//! HTTP catalog provider (upstream inventory REST API).

use std::time::Duration;

use async_trait::async_trait;

use crate::material::MaterialStocks;
use crate::provider::{FetchError, MaterialCatalogProvider};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Catalog backed by the upstream inventory REST API.
///
/// Timeouts live in the HTTP client; callers that abandon an evaluation simply
/// drop the future (no cancellation protocol with upstream).
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl MaterialCatalogProvider for HttpCatalog {
    async fn fetch_low_stock_materials(&self) -> Result<Vec<MaterialStocks>, FetchError> {
        let url = format!("{}/stocks/low", self.base_url);
        tracing::debug!(%url, "fetching low-stock materials");

        let res = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "catalog fetch failed");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        res.json::<Vec<MaterialStocks>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let catalog = HttpCatalog::new("http://inventory.local/api/").unwrap();
        assert_eq!(catalog.base_url(), "http://inventory.local/api");
    }
}
