// src/main.rs
use department_backend::api::AppState;
use department_backend::build_app;
use department_backend::config::AppConfig;
use department_backend::db::create_db_pool;
use department_backend::logging::init_tracing;
use department_backend::service::department_service::DepartmentService;
use department_backend::utils::media_url::MediaUrlResolver;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    tracing::info!("Starting Department Backend server...");

    // 設定を読み込む
    let app_config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            return Err(e.into());
        }
    };
    tracing::info!(
        environment = %app_config.environment,
        server_addr = %app_config.server_addr(),
        db_schema = ?app_config.db_schema,
        media_url = %app_config.media_url,
        "Configuration loaded"
    );

    // データベース接続を作成
    let db_pool = create_db_pool(&app_config).await?;
    tracing::info!("Database pool created successfully.");

    let department_service = Arc::new(DepartmentService::new(
        db_pool,
        MediaUrlResolver::new(app_config.media_url.clone()),
    ));

    // ルーターの設定
    let app = build_app(AppState::new(department_service, &app_config));

    // サーバーの起動
    let server_addr = app_config.server_addr();
    let listener = TcpListener::bind(&server_addr).await?;
    tracing::info!("Router configured. Server listening on {}", server_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
