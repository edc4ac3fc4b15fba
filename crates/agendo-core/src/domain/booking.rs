//! Booking command types
//!
//! A validated booking request, ready for the atomic check-then-insert.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::slots::TimeRange;

/// Customer contact details supplied with a booking. Matched against an
/// existing customer on (tenant, email) or inserted as a new record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// One appointment-to-be within a booking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl Occurrence {
    pub fn range(&self) -> TimeRange {
        TimeRange::new(self.start_time, self.end_time)
    }
}

/// A fully resolved booking, produced by the booking service after
/// validation. All occurrences commit or none do.
#[derive(Debug, Clone)]
pub struct BookingOrder {
    pub tenant_id: Uuid,
    pub professional_id: Uuid,
    pub service_id: Uuid,
    pub customer: CustomerDetails,
    pub occurrences: Vec<Occurrence>,
}
