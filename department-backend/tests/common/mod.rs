// tests/common/mod.rs
#![allow(dead_code)]

pub mod db;
pub mod fixtures;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use department_backend::{
    api::AppState, build_app, config::AppConfig, service::department_service::DepartmentService,
    utils::media_url::MediaUrlResolver,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use std::sync::{Arc, Once};
use tower::ServiceExt;

// テスト環境の初期化を一度だけ実行
static INIT: Once = Once::new();

/// テスト環境を初期化
pub fn init_test_env() {
    INIT.call_once(|| {
        // テスト用のログ設定
        let _ = tracing_subscriber::fmt()
            .with_env_filter("department_backend=debug,tower_http=debug")
            .with_test_writer()
            .try_init();
    });
}

/// 任意のコネクション（MockDatabase でも実DBでも）からアプリを構築
pub fn setup_app(connection: DatabaseConnection) -> Router {
    init_test_env();

    let config = AppConfig::for_testing();
    let service = Arc::new(DepartmentService::new(
        connection,
        MediaUrlResolver::new(config.media_url.clone()),
    ));

    build_app(AppState::new(service, &config))
}

/// GETリクエストを送り、ステータスとJSONボディを返す
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, bytes) = get_raw(app, uri).await;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn get_raw(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let req = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap();

    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let body = body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}
