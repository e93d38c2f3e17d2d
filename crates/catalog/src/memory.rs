//! In-memory catalog providers for tests/dev.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::material::MaterialStocks;
use crate::provider::{FetchError, MaterialCatalogProvider};

/// In-memory catalog.
///
/// - No IO / no network
/// - Returns a clone of the seeded entries on every fetch
/// - Entries can be swapped between fetches to simulate upstream refreshes
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    entries: RwLock<Vec<MaterialStocks>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(entries: Vec<MaterialStocks>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Replace the catalog contents (next fetch sees the new snapshot).
    pub fn set_entries(&self, entries: Vec<MaterialStocks>) {
        if let Ok(mut guard) = self.entries.write() {
            *guard = entries;
        }
    }

    pub fn push(&self, entry: MaterialStocks) {
        if let Ok(mut guard) = self.entries.write() {
            guard.push(entry);
        }
    }
}

#[async_trait]
impl MaterialCatalogProvider for InMemoryCatalog {
    async fn fetch_low_stock_materials(&self) -> Result<Vec<MaterialStocks>, FetchError> {
        self.entries
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| FetchError::Transport("catalog lock poisoned".to_string()))
    }
}

/// Catalog that fails every fetch; for exercising error paths.
#[derive(Debug)]
pub struct FailingCatalog {
    error: FetchError,
}

impl FailingCatalog {
    pub fn new(error: FetchError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl MaterialCatalogProvider for FailingCatalog {
    async fn fetch_low_stock_materials(&self) -> Result<Vec<MaterialStocks>, FetchError> {
        Err(self.error.clone())
    }
}
