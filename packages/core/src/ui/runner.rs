//! Server runner: binds the listener and serves the router.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::signal::shutdown_signal;

/// Serve `app` on `0.0.0.0:<port>` until a shutdown signal arrives.
///
/// Adds the request trace and permissive CORS layers shared by all
/// services.
pub async fn serve(app: Router, service_name: &str, port: u16) -> std::io::Result<()> {
    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("{} running on port {}", service_name, port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}
