//! Provider port for the upstream material catalog.

use async_trait::async_trait;
use thiserror::Error;

use crate::material::MaterialStocks;

/// Failure retrieving materials/stocks from the upstream catalog.
///
/// The evaluator propagates these without attempting classification; retries
/// and user-facing messaging belong to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure (connection refused, timeout, TLS, ...).
    #[error("catalog request failed: {0}")]
    Transport(String),

    /// Upstream answered with a non-success status (auth failure, 5xx, ...).
    #[error("catalog returned status {status}")]
    Status { status: u16 },

    /// Upstream answered 2xx but the body did not match the expected shape.
    #[error("catalog response could not be decoded: {0}")]
    Decode(String),
}

/// Read-side port over the inventory catalog.
///
/// Implementations do IO and nothing else: no caching, no retrying, no
/// interpretation of the data. Classification is always performed on the most
/// recently fetched snapshot.
#[async_trait]
pub trait MaterialCatalogProvider: Send + Sync {
    /// Fetch the materials currently flagged low-stock, with their stock records.
    async fn fetch_low_stock_materials(&self) -> Result<Vec<MaterialStocks>, FetchError>;
}

#[async_trait]
impl<P> MaterialCatalogProvider for std::sync::Arc<P>
where
    P: MaterialCatalogProvider + ?Sized,
{
    async fn fetch_low_stock_materials(&self) -> Result<Vec<MaterialStocks>, FetchError> {
        (**self).fetch_low_stock_materials().await
    }
}
