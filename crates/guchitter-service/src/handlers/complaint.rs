//! 愚痴 API 处理器
//!
//! 解析参数、校验、调用用例并映射响应。校验失败时不会触达用例层。

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use tracing::info;
use validator::Validate;

use crate::{
    dto::{BetweenTimeQuery, CreateComplaintRequest, IdParam},
    error::ApiError,
    models::Complaint,
    state::AppState,
};

/// 列出全部愚痴
///
/// GET /complaints
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Complaint>>, ApiError> {
    let complaints = state.complaints.find_all().await?;
    Ok(Json(complaints))
}

/// 按发帖身份查找
///
/// GET /complaints/{id}
pub async fn search(
    State(state): State<AppState>,
    path: Result<Path<IdParam>, PathRejection>,
) -> Result<Json<Complaint>, ApiError> {
    let Path(param) = path?;
    let avatar_id = param.parse()?;

    state
        .complaints
        .find_by_owner_id(avatar_id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// 创建愚痴
///
/// POST /complaints
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateComplaintRequest>, JsonRejection>,
) -> Result<Json<Complaint>, ApiError> {
    let Json(req) = payload?;
    req.validate()?;

    let created = state.complaints.create(req.into()).await?;

    info!(
        complaint_id = created.complaint_id,
        avatar_id = created.avatar_id,
        "Complaint created"
    );

    Ok(Json(created))
}

/// 按更新时间区间查找，结果为空时返回 404
///
/// GET /complaints/between-time?from=&to=
pub async fn find_between_timestamp(
    State(state): State<AppState>,
    query: Result<Query<BetweenTimeQuery>, QueryRejection>,
) -> Result<Json<Vec<Complaint>>, ApiError> {
    let Query(query) = query?;
    let range = query.time_range()?;

    let complaints = state.complaints.find_between_timestamp(range).await?;
    if complaints.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(complaints))
}

/// 删除愚痴，id 不存在时同样返回 204
///
/// DELETE /complaints/{id}
pub async fn delete_by_id(
    State(state): State<AppState>,
    path: Result<Path<IdParam>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(param) = path?;
    let complaint_id = param.parse()?;

    state.complaints.delete_by_id(complaint_id).await?;

    info!(complaint_id, "Complaint deleted");

    Ok(StatusCode::NO_CONTENT)
}
