//! Blocked-date repository trait (port)

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::BlockedDate;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlockedDateRepository: Send + Sync {
    async fn list_for_professional(
        &self,
        professional_id: &Uuid,
    ) -> Result<Vec<BlockedDate>, DomainError>;

    async fn find_for_day(
        &self,
        professional_id: &Uuid,
        date: NaiveDate,
    ) -> Result<Option<BlockedDate>, DomainError>;

    async fn create(&self, block: &BlockedDate) -> Result<BlockedDate, DomainError>;

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;
}
