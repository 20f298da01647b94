// src/lib.rs
pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod extractors;
pub mod logging;
pub mod middleware;
pub mod repository;
pub mod service;
pub mod utils;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api::handlers::department_handler::department_router;
use crate::api::AppState;

/// ルーターにミドルウェアを重ねたアプリケーション全体を構築
pub fn build_app(app_state: AppState) -> Router {
    let cors = middleware::cors::cors_layer(&app_state.config.cors_allowed_origins);

    department_router(app_state)
        .layer(axum::middleware::from_fn(logging::logging_middleware))
        .layer(axum::middleware::from_fn(logging::inject_request_context))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
