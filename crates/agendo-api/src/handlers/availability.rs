//! Availability handler

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::dto::AvailabilityQuery;
use crate::error::error_response;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/availability?professionalId&serviceId&date
///
/// Returns the free slot starts for the requested day as "HH:MM"
/// strings, ascending.
pub async fn get_availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Vec<String>>, (StatusCode, Json<ApiResponse<()>>)> {
    let slots = state
        .availability
        .available_slots(&query.professional_id, &query.service_id, query.date)
        .await
        .map_err(error_response)?;
    Ok(Json(slots))
}
