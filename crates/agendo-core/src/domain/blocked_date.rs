//! Blocked-date domain entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An admin-declared day off for one professional. The whole day is
/// unavailable regardless of appointments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedDate {
    pub id: Uuid,
    pub professional_id: Uuid,
    pub date: NaiveDate,
    pub reason: String,
}
