use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use printerp_alerting::EvaluateError;

pub fn evaluate_error_to_response(err: EvaluateError) -> axum::response::Response {
    match err {
        // The catalog is an upstream dependency; both transport failures and
        // malformed payloads surface as a gateway problem, not our 500.
        EvaluateError::Fetch(e) => {
            json_error(StatusCode::BAD_GATEWAY, "catalog_unavailable", e.to_string())
        }
        EvaluateError::InvalidRecord(e) => {
            json_error(StatusCode::BAD_GATEWAY, "invalid_catalog_data", e.to_string())
        }
        EvaluateError::InvalidMaterial(e) => {
            json_error(StatusCode::BAD_GATEWAY, "invalid_catalog_data", e.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
