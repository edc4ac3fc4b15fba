//! Appointment handlers (booking, dashboard listing, admin delete)

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use agendo_core::domain::{Appointment, AppointmentDetails};
use agendo_core::repositories::{AppointmentFilter, AppointmentRepository};

use crate::dto::{AppointmentsQuery, CreateAppointmentRequest};
use crate::error::{error_response, validation_response};
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /appointments
///
/// Creates one appointment per requested week, all-or-nothing. 409 when
/// any slot was taken in the meantime.
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<Vec<Appointment>>>),
    (StatusCode, Json<ApiResponse<()>>),
> {
    if let Err(e) = payload.validate() {
        return Err(validation_response(&e.to_string()));
    }

    let created = state
        .booking
        .create_booking(payload.into())
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

/// GET /appointments?tenantId&professionalId&date
pub async fn list_appointments(
    State(state): State<AppState>,
    Query(query): Query<AppointmentsQuery>,
) -> Result<Json<Vec<AppointmentDetails>>, (StatusCode, Json<ApiResponse<()>>)> {
    let filter = AppointmentFilter {
        tenant_id: query.tenant_id,
        professional_id: query.professional_id,
        date: query.date,
    };
    let appointments = state
        .appointments
        .list(&filter)
        .await
        .map_err(error_response)?;
    Ok(Json(appointments))
}

/// DELETE /appointments/{id}
pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    state
        .appointments
        .delete(&id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(())))
}
