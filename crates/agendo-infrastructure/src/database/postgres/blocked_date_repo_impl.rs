//! PostgreSQL blocked-date repository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use agendo_core::domain::BlockedDate;
use agendo_core::error::DomainError;
use agendo_core::repositories::BlockedDateRepository;

pub struct PgBlockedDateRepository {
    pool: PgPool,
}

impl PgBlockedDateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BlockedDateRow {
    pub id: Uuid,
    pub professional_id: Uuid,
    pub date: NaiveDate,
    pub reason: String,
}

impl From<BlockedDateRow> for BlockedDate {
    fn from(row: BlockedDateRow) -> Self {
        BlockedDate {
            id: row.id,
            professional_id: row.professional_id,
            date: row.date,
            reason: row.reason,
        }
    }
}

#[async_trait]
impl BlockedDateRepository for PgBlockedDateRepository {
    async fn list_for_professional(
        &self,
        professional_id: &Uuid,
    ) -> Result<Vec<BlockedDate>, DomainError> {
        let rows: Vec<BlockedDateRow> = sqlx::query_as(
            "SELECT id, professional_id, date, reason FROM blocked_dates \
             WHERE professional_id = $1 ORDER BY date",
        )
        .bind(professional_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing blocked dates: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find_for_day(
        &self,
        professional_id: &Uuid,
        date: NaiveDate,
    ) -> Result<Option<BlockedDate>, DomainError> {
        let row: Option<BlockedDateRow> = sqlx::query_as(
            "SELECT id, professional_id, date, reason FROM blocked_dates \
             WHERE professional_id = $1 AND date = $2",
        )
        .bind(professional_id)
        .bind(date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding blocked date: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, block: &BlockedDate) -> Result<BlockedDate, DomainError> {
        let row: BlockedDateRow = sqlx::query_as(
            r#"
            INSERT INTO blocked_dates (id, professional_id, date, reason)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (professional_id, date) DO UPDATE SET reason = EXCLUDED.reason
            RETURNING id, professional_id, date, reason
            "#,
        )
        .bind(block.id)
        .bind(block.professional_id)
        .bind(block.date)
        .bind(&block.reason)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating blocked date: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        info!(
            "Blocked date created for professional {} on {}",
            block.professional_id, block.date
        );
        Ok(row.into())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM blocked_dates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting blocked date: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::BlockedDateNotFound);
        }
        Ok(())
    }
}
