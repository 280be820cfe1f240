//! 错误类型定义
//!
//! - `ServiceError`：仓储与用例层共用。"查无记录"不是错误（用 `Option` 表达），这里只承载存储故障。
//! - `ApiError`：HTTP 边界上的错误，负责映射状态码与响应体。

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use validator::ValidationErrors;

use crate::dto::ErrorResponse;
use crate::validation;

/// 服务层错误类型
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),

    #[error("内部错误: {0}")]
    Internal(String),
}

impl ServiceError {
    /// 返回错误码（仅用于日志）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, ServiceError>;

pub const MSG_BAD_REQUEST: &str = "Bad request.";
pub const MSG_NOT_FOUND: &str = "Not Found";
pub const MSG_INTERNAL: &str = "Internal Server Error";

/// HTTP 层错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 校验失败，携带已排序的字段消息
    #[error("参数验证失败: {0:?}")]
    Validation(Vec<String>),

    /// 请求体、路径或查询串无法解析
    #[error("请求格式错误: {0}")]
    MalformedRequest(String),

    #[error("资源不存在")]
    NotFound,

    #[error(transparent)]
    Internal(#[from] ServiceError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::MalformedRequest(_) => "MALFORMED_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::Internal(e) => e.error_code(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 存储故障只返回通用提示，详细信息仅记录日志
        let body = match self {
            Self::Validation(fields) => ErrorResponse::with_fields(MSG_BAD_REQUEST, fields),
            Self::MalformedRequest(detail) => {
                ErrorResponse::with_fields(MSG_BAD_REQUEST, vec![detail])
            }
            Self::NotFound => ErrorResponse::new(MSG_NOT_FOUND),
            Self::Internal(e) => {
                tracing::error!(error = %e, code = e.error_code(), "请求处理失败");
                ErrorResponse::new(MSG_INTERNAL)
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(validation::messages(&errors))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}
