//! Material catalog: wire-compatible model + provider port.
//!
//! This crate owns the shapes the upstream inventory REST API returns
//! (materials and their per-width stock records) and the async port used to
//! fetch them. Providers here do IO; all derived computation lives in
//! `printerp-alerting`.

pub mod http;
pub mod material;
pub mod memory;
pub mod provider;

pub use http::HttpCatalog;
pub use material::{InvalidStockRecord, Material, MaterialStocks, StockRecord};
pub use memory::{FailingCatalog, InMemoryCatalog};
pub use provider::{FetchError, MaterialCatalogProvider};
