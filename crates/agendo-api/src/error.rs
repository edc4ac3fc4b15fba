//! Domain error to HTTP response mapping

use axum::http::StatusCode;
use axum::Json;
use tracing::error;

use agendo_core::error::DomainError;

use crate::response::ApiResponse;

/// Validation → 400, conflict → 409, missing entity → 404, anything
/// persistence-shaped → 500 with a generic message (details go to the
/// log, not the client).
pub fn error_response(err: DomainError) -> (StatusCode, Json<ApiResponse<()>>) {
    match &err {
        DomainError::ValidationError(_) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("VALIDATION_ERROR", &err.to_string())),
        ),
        DomainError::SlotConflict => (
            StatusCode::CONFLICT,
            Json(ApiResponse::error("SLOT_CONFLICT", &err.to_string())),
        ),
        DomainError::TenantNotFound
        | DomainError::ServiceNotFound
        | DomainError::ProfessionalNotFound
        | DomainError::AppointmentNotFound
        | DomainError::BlockedDateNotFound => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("NOT_FOUND", &err.to_string())),
        ),
        DomainError::DatabaseError(_) | DomainError::InternalError(_) => {
            error!("Internal error: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("INTERNAL_ERROR", "Internal server error")),
            )
        }
    }
}

pub fn validation_response(message: &str) -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error("VALIDATION_ERROR", message)),
    )
}
