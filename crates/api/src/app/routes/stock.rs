use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use printerp_core::MaterialId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/stock/alerts", get(get_stock_alerts))
        .route("/stock/alerts/:id", get(get_material_alert))
}

/// Run one evaluation over the latest catalog snapshot and return the report.
///
/// Each request re-fetches and re-derives; there is no caching layer, so the
/// response always reflects the most recent upstream snapshot.
pub async fn get_stock_alerts(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.evaluate().await {
        Ok(alerts) => (StatusCode::OK, Json(dto::alerts_to_json(&alerts))).into_response(),
        Err(e) => errors::evaluate_error_to_response(e),
    }
}

/// Evaluate and return the alert for one material.
pub async fn get_material_alert(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let material_id: MaterialId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid material id");
        }
    };

    match services.evaluate().await {
        Ok(alerts) => match alerts.into_iter().find(|a| a.material_id == material_id) {
            Some(alert) => (StatusCode::OK, Json(dto::alert_to_json(&alert))).into_response(),
            None => errors::json_error(
                StatusCode::NOT_FOUND,
                "not_found",
                "material not in the low-stock report",
            ),
        },
        Err(e) => errors::evaluate_error_to_response(e),
    }
}
