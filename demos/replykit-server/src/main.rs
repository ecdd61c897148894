//! Replykit demo server
//!
//! A small API server exercising every replykit outcome.
//!
//! Usage:
//!   cargo run --package replykit-server
//!
//! Then, for example:
//!   curl -i -X POST localhost:8080/users -H 'content-type: application/json' -d '{"username":"hercules"}'
//!   curl -i 'localhost:8080/users/search?q=herc'
//!   curl -i localhost:8080/admin

mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "replykit_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build router
    let app = Router::new()
        .route("/health", get(handlers::health))
        .route("/users", post(handlers::create_user))
        .route("/users/search", get(handlers::search_users))
        .route(
            "/users/:username",
            get(handlers::get_user).delete(handlers::delete_user),
        )
        .route("/admin", get(handlers::admin))
        .route("/crash", get(handlers::crash))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], 8080));
    tracing::info!("replykit demo server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
