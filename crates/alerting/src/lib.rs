//! Stock alert core (aggregation + threshold classification).
//!
//! This crate contains the low-stock decision logic, implemented purely as
//! deterministic domain computation (no IO beyond the injected ports):
//!
//! - [`aggregate_stocks`] folds a material's per-width stock records into one
//!   [`AggregatedStock`] reading,
//! - [`classify`] maps that reading to an [`AlertLevel`],
//! - [`StockAlertEvaluator`] runs the fetch → validate → aggregate → classify
//!   → notify pipeline over an injected catalog provider and notifier.

pub mod aggregate;
pub mod classify;
pub mod evaluator;
pub mod level;

pub use aggregate::{AggregatedStock, aggregate_stocks};
pub use classify::{WARNING_MULTIPLIER, classify};
pub use evaluator::{AlertNotifier, EvaluateError, StockAlert, StockAlertEvaluator};
pub use level::AlertLevel;
