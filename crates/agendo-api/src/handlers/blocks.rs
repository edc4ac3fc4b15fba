//! Blocked-date handlers (admin)

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use agendo_core::domain::BlockedDate;
use agendo_core::repositories::BlockedDateRepository;
use agendo_shared::new_id;

use crate::dto::{BlocksQuery, CreateBlockRequest};
use crate::error::error_response;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/blocks?professionalId
pub async fn list_blocks(
    State(state): State<AppState>,
    Query(query): Query<BlocksQuery>,
) -> Result<Json<Vec<BlockedDate>>, (StatusCode, Json<ApiResponse<()>>)> {
    let blocks = state
        .blocks
        .list_for_professional(&query.professional_id)
        .await
        .map_err(error_response)?;
    Ok(Json(blocks))
}

/// POST /api/blocks
pub async fn create_block(
    State(state): State<AppState>,
    Json(payload): Json<CreateBlockRequest>,
) -> Result<(StatusCode, Json<BlockedDate>), (StatusCode, Json<ApiResponse<()>>)> {
    let block = BlockedDate {
        id: new_id(),
        professional_id: payload.professional_id,
        date: payload.date.date_naive(),
        reason: payload.reason.unwrap_or_default(),
    };
    let created = state
        .blocks
        .create(&block)
        .await
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// DELETE /api/blocks/{id}
pub async fn delete_block(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    state.blocks.delete(&id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(())))
}
