//! Request DTOs
//!
//! Wire shapes use camelCase keys; the booking start is accepted under
//! either `startTime` or `date`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use agendo_core::services::NewBooking;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub professional_id: Uuid,
    pub service_id: Uuid,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub professional_id: Option<Uuid>,
    pub service_id: Option<Uuid>,
    pub customer_name: Option<String>,
    #[validate(email)]
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    #[serde(alias = "date")]
    pub start_time: Option<DateTime<Utc>>,
    pub recurring_weeks: Option<u32>,
}

impl From<CreateAppointmentRequest> for NewBooking {
    fn from(req: CreateAppointmentRequest) -> Self {
        NewBooking {
            professional_id: req.professional_id,
            service_id: req.service_id,
            customer_name: req.customer_name,
            customer_email: req.customer_email,
            customer_phone: req.customer_phone,
            start_time: req.start_time,
            recurring_weeks: req.recurring_weeks,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentsQuery {
    pub tenant_id: Option<Uuid>,
    pub professional_id: Option<Uuid>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    pub tenant_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlocksQuery {
    pub professional_id: Uuid,
}

/// The admin UI posts the blocked day as an ISO datetime at midnight;
/// only the calendar day matters.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlockRequest {
    pub professional_id: Uuid,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_start_accepts_both_keys() {
        let with_start_time: CreateAppointmentRequest = serde_json::from_str(
            r#"{"startTime": "2024-06-03T10:00:00Z", "customerName": "Juan"}"#,
        )
        .unwrap();
        let with_date: CreateAppointmentRequest =
            serde_json::from_str(r#"{"date": "2024-06-03T10:00:00Z", "customerName": "Juan"}"#)
                .unwrap();
        assert_eq!(with_start_time.start_time, with_date.start_time);
        assert!(with_start_time.start_time.is_some());
    }

    #[test]
    fn bad_email_fails_validation() {
        let req: CreateAppointmentRequest =
            serde_json::from_str(r#"{"customerEmail": "not-an-email"}"#).unwrap();
        assert!(req.validate().is_err());

        let req: CreateAppointmentRequest =
            serde_json::from_str(r#"{"customerEmail": "juan@example.com"}"#).unwrap();
        assert!(req.validate().is_ok());
    }
}
