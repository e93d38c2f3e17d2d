use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use printerp_catalog::{
    FetchError, InvalidStockRecord, MaterialCatalogProvider, MaterialStocks,
};
use printerp_core::{DomainError, MaterialId};

use crate::aggregate::{AggregatedStock, aggregate_stocks};
use crate::classify::classify;
use crate::level::AlertLevel;

/// One evaluated material: the classification plus everything a badge or a
/// notification needs to render it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockAlert {
    pub material_id: MaterialId,
    pub material_name: String,
    /// Unit of measure for `total_quantity` and `min_threshold`.
    pub unit: String,
    pub level: AlertLevel,
    pub total_quantity: f64,
    /// `None` when the material has no stock records (no threshold configured).
    pub min_threshold: Option<f64>,
    /// Deterministic human-readable one-liner.
    pub summary: String,
    pub evaluated_at: DateTime<Utc>,
}

/// Outbound port: receives one alert per material whose aggregate was computed.
///
/// Fire-and-forget from the evaluator's perspective; delivery guarantees
/// (dedup, persistence, user-facing display) belong to the notification
/// subsystem behind this trait.
pub trait AlertNotifier: Send + Sync {
    fn notify(&self, alert: &StockAlert);
}

impl<N> AlertNotifier for std::sync::Arc<N>
where
    N: AlertNotifier + ?Sized,
{
    fn notify(&self, alert: &StockAlert) {
        (**self).notify(alert)
    }
}

/// Evaluation failure.
///
/// Fetch and ingestion failures abort the run before any notification fires;
/// classification itself is total and never errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvaluateError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    InvalidRecord(#[from] InvalidStockRecord),

    #[error(transparent)]
    InvalidMaterial(#[from] DomainError),
}

/// Fetch → validate → aggregate → classify → notify pipeline.
///
/// Stateless: every evaluation re-derives everything from the latest catalog
/// snapshot. The provider and notifier are injected capabilities, never
/// ambient globals.
#[derive(Debug)]
pub struct StockAlertEvaluator<P, N> {
    provider: P,
    notifier: N,
}

impl<P, N> StockAlertEvaluator<P, N>
where
    P: MaterialCatalogProvider,
    N: AlertNotifier,
{
    pub fn new(provider: P, notifier: N) -> Self {
        Self { provider, notifier }
    }

    /// Run one evaluation over the latest catalog snapshot.
    ///
    /// Returns one entry per fetched material. Materials with no stock records
    /// classify as `Unknown` and are excluded from notification: their
    /// aggregate is undefined, which must not read as out-of-stock.
    pub async fn evaluate(&self) -> Result<Vec<StockAlert>, EvaluateError> {
        let entries = self.provider.fetch_low_stock_materials().await?;

        // Reject malformed data before any classification or notification;
        // a partially-notified snapshot would be worse than a failed run.
        for entry in &entries {
            entry.material.validate()?;
            entry.validate()?;
        }

        let evaluated_at = Utc::now();
        let mut alerts = Vec::with_capacity(entries.len());
        for entry in &entries {
            let alert = evaluate_entry(entry, evaluated_at);
            if !entry.stocks.is_empty() {
                self.notifier.notify(&alert);
            }
            alerts.push(alert);
        }

        tracing::info!(
            materials = alerts.len(),
            critical = alerts.iter().filter(|a| a.level == AlertLevel::Critical).count(),
            warning = alerts.iter().filter(|a| a.level == AlertLevel::Warning).count(),
            "stock alert evaluation complete"
        );

        Ok(alerts)
    }
}

fn evaluate_entry(entry: &MaterialStocks, evaluated_at: DateTime<Utc>) -> StockAlert {
    let aggregated = aggregate_stocks(&entry.stocks);
    let level = classify(aggregated);
    let material_name = entry.material.display_name().to_string();
    let summary = summarize(&material_name, &entry.material.unit, aggregated, level);

    StockAlert {
        material_id: entry.material.id,
        material_name,
        unit: entry.material.unit.clone(),
        level,
        total_quantity: aggregated.total_quantity,
        min_threshold: aggregated.has_threshold().then_some(aggregated.min_threshold),
        summary,
        evaluated_at,
    }
}

fn summarize(name: &str, unit: &str, aggregated: AggregatedStock, level: AlertLevel) -> String {
    match level {
        AlertLevel::Unknown => format!("{name}: no stock records tracked"),
        _ => format!(
            "{name}: {} {unit} on hand, alert threshold {} {unit} ({level})",
            aggregated.total_quantity, aggregated.min_threshold
        ),
    }
}
