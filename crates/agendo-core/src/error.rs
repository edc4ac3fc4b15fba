//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Tenant not found")]
    TenantNotFound,

    #[error("Service not found")]
    ServiceNotFound,

    #[error("Professional not found")]
    ProfessionalNotFound,

    #[error("Appointment not found")]
    AppointmentNotFound,

    #[error("Blocked date not found")]
    BlockedDateNotFound,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Slot no longer available")]
    SlotConflict,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
