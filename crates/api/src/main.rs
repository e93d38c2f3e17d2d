use std::sync::Arc;

#[tokio::main]
async fn main() {
    printerp_observability::init();

    let services = Arc::new(printerp_api::app::services::AppServices::from_env());
    let app = printerp_api::app::build_app(services);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind 0.0.0.0:8080");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
