//! Avatar API 处理器

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
    dto::{BetweenTimeQuery, CreateAvatarRequest, IdParam},
    error::ApiError,
    models::Avatar,
    state::AppState,
};

/// GET /avatars
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Avatar>>, ApiError> {
    let avatars = state.avatars.find_all().await?;
    Ok(Json(avatars))
}

/// GET /avatars/{id}
pub async fn search(
    State(state): State<AppState>,
    path: Result<Path<IdParam>, PathRejection>,
) -> Result<Json<Avatar>, ApiError> {
    let Path(param) = path?;
    let avatar_id = param.parse()?;

    state
        .avatars
        .find_by_owner_id(avatar_id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// POST /avatars
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateAvatarRequest>, JsonRejection>,
) -> Result<Json<Avatar>, ApiError> {
    let Json(req) = payload?;
    req.validate()?;

    let created = state.avatars.create(req.into()).await?;

    info!(avatar_id = created.avatar_id, "Avatar created");

    Ok(Json(created))
}

/// GET /avatars/between-time?from=&to=
pub async fn find_between_timestamp(
    State(state): State<AppState>,
    query: Result<Query<BetweenTimeQuery>, QueryRejection>,
) -> Result<Json<Vec<Avatar>>, ApiError> {
    let Query(query) = query?;
    let range = query.time_range()?;

    let avatars = state.avatars.find_between_timestamp(range).await?;
    if avatars.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(avatars))
}

/// DELETE /avatars/{id}
pub async fn delete_by_id(
    State(state): State<AppState>,
    path: Result<Path<IdParam>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(param) = path?;
    let avatar_id = param.parse()?;

    state.avatars.delete_by_id(avatar_id).await?;

    info!(avatar_id, "Avatar deleted");

    Ok(StatusCode::NO_CONTENT)
}
