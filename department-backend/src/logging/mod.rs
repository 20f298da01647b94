// src/logging/mod.rs

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

pub const DEFAULT_LOG_FILTER: &str = "department_backend=info,tower_http=info";

#[macro_export]
macro_rules! log_with_context {
    ($level:expr, $msg:expr $(, $($key:expr => $value:expr),* $(,)?)?) => {
        match $level {
            tracing::Level::ERROR => {
                tracing::error!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            tracing::Level::WARN => {
                tracing::warn!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            tracing::Level::INFO => {
                tracing::info!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            tracing::Level::DEBUG => {
                tracing::debug!(
                    message = $msg
                    $(, $($key = ?$value,)*)?
                );
            }
            _ => {}
        }
    };
}

/// トレーシングの設定（RUST_LOG が未設定ならデフォルトのフィルタを使う）
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(fmt::layer())
        .init();
}

// リクエストコンテキスト
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub request_id: String,
    pub path: String,
    pub method: String,
}

/// ステータスコードに応じたログレベル
pub fn level_for_status(status: u16) -> tracing::Level {
    if status >= 500 {
        tracing::Level::ERROR
    } else if status >= 400 {
        tracing::Level::WARN
    } else {
        tracing::Level::INFO
    }
}

// ロギングミドルウェア
pub async fn logging_middleware(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();

    // RequestContextを取得
    let context = req.extensions().get::<RequestContext>().cloned();

    if let Some(context) = &context {
        log_with_context!(
            tracing::Level::INFO,
            "Request started",
            "request_id" => &context.request_id,
            "method" => &context.method,
            "path" => &context.path,
        );
    }

    let response = next.run(req).await;
    let duration = start.elapsed();
    let status = response.status().as_u16();

    if let Some(context) = &context {
        log_with_context!(
            level_for_status(status),
            "Request completed",
            "request_id" => &context.request_id,
            "method" => &context.method,
            "path" => &context.path,
            "status" => status,
            "duration_ms" => duration.as_millis(),
        );
    }

    response
}

// RequestContextを生成するミドルウェア
pub async fn inject_request_context(mut req: Request<Body>, next: Next) -> Response {
    let context = RequestContext {
        request_id: Uuid::new_v4().to_string(),
        path: req.uri().path().to_string(),
        method: req.method().to_string(),
    };

    req.extensions_mut().insert(context);
    next.run(req).await
}
