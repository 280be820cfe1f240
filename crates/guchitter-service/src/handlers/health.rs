//! 存活与就绪探针

use axum::{Json, extract::State, http::StatusCode};

use crate::{dto::HealthResponse, state::AppState};

pub const SERVICE_NAME: &str = "guchitter";

/// 存活探针：服务进程正常即返回 ok
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
        database: None,
    })
}

/// 就绪探针：检查数据库连接是否可用
///
/// GET /ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, database) = match &state.database {
        Some(db) => match db.health_check().await {
            Ok(()) => (StatusCode::OK, "ok"),
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                (StatusCode::SERVICE_UNAVAILABLE, "fail")
            }
        },
        None => (StatusCode::OK, "in_memory"),
    };

    let overall = if status.is_success() { "ok" } else { "degraded" };
    let body = HealthResponse {
        status: overall.to_string(),
        service: SERVICE_NAME.to_string(),
        database: Some(database.to_string()),
    };

    (status, Json(body))
}
