//! Catalog repository trait (port)
//!
//! Read access to the tenant's bookable offering: services and
//! professionals.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Professional, Service};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn find_service(&self, id: &Uuid) -> Result<Option<Service>, DomainError>;
    async fn list_services(&self, tenant_id: Option<Uuid>) -> Result<Vec<Service>, DomainError>;
    async fn find_professional(&self, id: &Uuid) -> Result<Option<Professional>, DomainError>;
    async fn list_professionals(
        &self,
        tenant_id: Option<Uuid>,
    ) -> Result<Vec<Professional>, DomainError>;
}
