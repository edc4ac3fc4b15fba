//! Service domain entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable service offered by a tenant. Duration drives slot length;
/// price is stored in the tenant's smallest currency unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub duration_min: i32,
    pub price: i64,
}
