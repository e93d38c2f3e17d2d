use axum::Router;

pub mod stock;
pub mod system;

/// Domain routes (everything except `/health`).
pub fn router() -> Router {
    Router::new().merge(stock::router())
}
