//! 路由配置模块
//!
//! 定义所有 REST API 端点的路由映射

use axum::{Router, middleware, routing::get};
use guchitter_shared::observability::middleware as obs_middleware;

use crate::{handlers, state::AppState};

/// 愚痴路由
///
/// `between-time` 为静态段，优先于 `{id}` 匹配
pub fn complaint_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/complaints",
            get(handlers::complaint::index).post(handlers::complaint::create),
        )
        .route(
            "/complaints/between-time",
            get(handlers::complaint::find_between_timestamp),
        )
        .route(
            "/complaints/{id}",
            get(handlers::complaint::search).delete(handlers::complaint::delete_by_id),
        )
}

/// Avatar 路由
pub fn avatar_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/avatars",
            get(handlers::avatar::index).post(handlers::avatar::create),
        )
        .route(
            "/avatars/between-time",
            get(handlers::avatar::find_between_timestamp),
        )
        .route(
            "/avatars/{id}",
            get(handlers::avatar::search).delete(handlers::avatar::delete_by_id),
        )
}

/// 业务 API 路由
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(complaint_routes())
        .merge(avatar_routes())
}

/// 完整应用路由：业务 API、探针与可观测性中间件
///
/// CORS 由调用方按配置追加。
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api_routes())
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .layer(middleware::from_fn(obs_middleware::http_tracing))
        .layer(middleware::from_fn(obs_middleware::request_id))
        .with_state(state)
}
