//! Tenant resolution handler

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use agendo_core::domain::Tenant;
use agendo_core::error::DomainError;
use agendo_core::repositories::TenantRepository;

use crate::error::error_response;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/tenant/{slug}
///
/// Resolves the tenant config (hours, closed days, branding) the public
/// booking page boots from.
pub async fn get_tenant(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Tenant>, (StatusCode, Json<ApiResponse<()>>)> {
    let tenant = state
        .tenants
        .find_by_slug(&slug)
        .await
        .map_err(error_response)?
        .ok_or_else(|| error_response(DomainError::TenantNotFound))?;

    Ok(Json(tenant))
}
