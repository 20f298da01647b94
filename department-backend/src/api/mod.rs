// src/api/mod.rs
use crate::config::AppConfig;
use crate::service::department_service::DepartmentService;
use std::sync::Arc;

pub mod dto;
pub mod handlers;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub department_service: Arc<DepartmentService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(department_service: Arc<DepartmentService>, config: &AppConfig) -> Self {
        Self {
            department_service,
            config: Arc::new(config.clone()),
        }
    }
}
