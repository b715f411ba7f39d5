//! Router assembly and the serve loop

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::entities::{customer, order, product};
use crate::server::catalog;
use crate::server::state::AppState;
use crate::server::tokens;

/// Build the full application router
///
/// The REST surface lives under `/api`, the server-rendered catalog under
/// `/catalog`, and the health probes at the root:
/// - GET /health, GET /healthz - liveness probes
/// - POST /api/token - token issuance
/// - /api/customers, /api/products, /api/orders - entity CRUD
/// - GET /api/orders/{id}/products, GET /api/products/{id}/orders - directed lookups
/// - /catalog/products - HTML pages
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(customer::routes(state.clone()))
        .merge(product::routes(state.clone()))
        .merge(order::routes(state.clone()))
        .merge(tokens::routes(state.clone()));

    Router::new()
        .merge(health_routes())
        .nest("/api", api)
        .merge(catalog::routes(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Build health check routes
fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "storefront"
    }))
}

/// Serve the application with graceful shutdown
///
/// Binds the address, serves until SIGTERM or Ctrl+C, then drains
/// in-flight requests.
pub async fn serve(state: AppState, addr: &str) -> anyhow::Result<()> {
    let app = build_router(state);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
