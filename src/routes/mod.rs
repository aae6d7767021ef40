// src/routes/mod.rs
pub mod chat;

use std::path::Path;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Root page and static assets share one namespace: `/` is the index file,
/// anything else not routed falls through to `public_dir`.
pub fn create_router(public_dir: impl AsRef<Path>, index_file: impl AsRef<Path>) -> Router<SharedState> {
    Router::new()
        .route_service("/", ServeFile::new(index_file.as_ref()))
        .route("/chat", post(chat_handler))
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new(public_dir.as_ref()))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
