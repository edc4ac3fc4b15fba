//! Appointment domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::slots::TimeRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    #[default]
    Confirmed,
    Canceled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "CONFIRMED",
            AppointmentStatus::Canceled => "CANCELED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "CONFIRMED" => Some(AppointmentStatus::Confirmed),
            "CANCELED" => Some(AppointmentStatus::Canceled),
            _ => None,
        }
    }
}

/// A booked occurrence on one professional's calendar.
///
/// Invariant: for a given professional, no two non-canceled appointments
/// may have overlapping `[start_time, end_time)` intervals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub professional_id: Uuid,
    pub service_id: Uuid,
    pub customer_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: AppointmentStatus,
}

impl Appointment {
    pub fn range(&self) -> TimeRange {
        TimeRange::new(self.start_time, self.end_time)
    }
}

/// Appointment joined with the names the dashboard renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDetails {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub service_name: String,
    pub service_price: i64,
    pub service_duration_min: i32,
    pub professional_name: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trip() {
        assert_eq!(
            AppointmentStatus::from_str(AppointmentStatus::Confirmed.as_str()),
            Some(AppointmentStatus::Confirmed)
        );
        assert_eq!(AppointmentStatus::from_str("NO_SHOW"), None);
    }
}
