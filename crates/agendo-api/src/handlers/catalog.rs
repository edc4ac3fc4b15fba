//! Catalog handlers (professionals and services)

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use agendo_core::domain::{Professional, Service};
use agendo_core::repositories::CatalogRepository;

use crate::dto::CatalogQuery;
use crate::error::error_response;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /professionals?tenantId=...
pub async fn list_professionals(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<Vec<Professional>>, (StatusCode, Json<ApiResponse<()>>)> {
    let professionals = state
        .catalog
        .list_professionals(query.tenant_id)
        .await
        .map_err(error_response)?;
    Ok(Json(professionals))
}

/// GET /services?tenantId=...
pub async fn list_services(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<Vec<Service>>, (StatusCode, Json<ApiResponse<()>>)> {
    let services = state
        .catalog
        .list_services(query.tenant_id)
        .await
        .map_err(error_response)?;
    Ok(Json(services))
}
