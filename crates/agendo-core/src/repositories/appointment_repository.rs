//! Appointment repository trait (port)

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{Appointment, AppointmentDetails};
use crate::error::DomainError;

/// Optional dashboard filters; all unset means every appointment.
#[derive(Debug, Clone, Default)]
pub struct AppointmentFilter {
    pub tenant_id: Option<Uuid>,
    pub professional_id: Option<Uuid>,
    pub date: Option<NaiveDate>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Non-canceled appointments for a professional whose interval
    /// intersects the given calendar day.
    async fn list_for_day(
        &self,
        professional_id: &Uuid,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, DomainError>;

    /// Dashboard listing, joined with service/customer/professional
    /// names, ordered by start time ascending.
    async fn list(&self, filter: &AppointmentFilter)
        -> Result<Vec<AppointmentDetails>, DomainError>;

    /// Hard delete (admin action).
    async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;
}
