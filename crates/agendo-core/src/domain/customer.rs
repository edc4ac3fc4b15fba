//! Customer domain entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An end customer of one tenant. Identity key is (tenant_id, email);
/// a returning customer is matched on that pair and reused.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}
