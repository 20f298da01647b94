use crate::error::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// パスパラメータ `{department_id}` を整数として抽出する
///
/// 整数でない値はハンドラーに到達する前に 400 で拒否する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartmentIdPath(pub i64);

impl<S> FromRequestParts<S> for DepartmentIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                AppError::BadRequest(format!("Missing path parameter 'department_id': {}", e))
            })?;

        parse_department_id(&raw).map(DepartmentIdPath)
    }
}

/// ASCII数字のみを受け付ける。符号や空白は拒否する。
/// 数字だけでi64に収まらない値は存在しないIDとして扱う
pub fn parse_department_id(raw: &str) -> Result<i64, AppError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::BadRequest(format!(
            "Invalid integer format for 'department_id': '{}'",
            raw
        )));
    }

    raw.parse::<i64>()
        .map_err(|_| AppError::NotFound(format!("Department with id {} not found", raw)))
}
