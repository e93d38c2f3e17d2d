use serde_json::json;

use printerp_alerting::{AlertLevel, StockAlert};

/// Map one alert to its response JSON.
pub fn alert_to_json(alert: &StockAlert) -> serde_json::Value {
    json!({
        "material_id": alert.material_id,
        "name": alert.material_name,
        "unit": alert.unit,
        "level": alert.level,
        "total_quantity": alert.total_quantity,
        "min_threshold": alert.min_threshold,
        "summary": alert.summary,
        "evaluated_at": alert.evaluated_at,
    })
}

/// Evaluation report payload: per-level counts plus the alert list.
pub fn alerts_to_json(alerts: &[StockAlert]) -> serde_json::Value {
    let count_level =
        |level: AlertLevel| alerts.iter().filter(|a| a.level == level).count();

    json!({
        "count": alerts.len(),
        "critical": count_level(AlertLevel::Critical),
        "warning": count_level(AlertLevel::Warning),
        "alerts": alerts.iter().map(alert_to_json).collect::<Vec<_>>(),
    })
}
