//! Notifier that writes alerts to the structured log.

use printerp_alerting::{AlertLevel, AlertNotifier, StockAlert};

/// Structured-log notifier: one event per alert, severity mapped to level.
///
/// Useful as the default sink for headless deployments where nothing consumes
/// the in-memory stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl AlertNotifier for TracingNotifier {
    fn notify(&self, alert: &StockAlert) {
        match alert.level {
            AlertLevel::Critical => tracing::warn!(
                material_id = %alert.material_id,
                level = %alert.level,
                total_quantity = alert.total_quantity,
                "{}",
                alert.summary
            ),
            AlertLevel::Warning => tracing::info!(
                material_id = %alert.material_id,
                level = %alert.level,
                total_quantity = alert.total_quantity,
                "{}",
                alert.summary
            ),
            AlertLevel::Normal | AlertLevel::Unknown => tracing::debug!(
                material_id = %alert.material_id,
                level = %alert.level,
                "{}",
                alert.summary
            ),
        }
    }
}
