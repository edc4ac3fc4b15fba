//! PostgreSQL catalog repository (services and professionals)

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::error;
use uuid::Uuid;

use agendo_core::domain::{Professional, Service};
use agendo_core::error::DomainError;
use agendo_core::repositories::CatalogRepository;

pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ServiceRow {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub duration_min: i32,
    pub price: i64,
}

impl From<ServiceRow> for Service {
    fn from(row: ServiceRow) -> Self {
        Service {
            id: row.id,
            tenant_id: row.tenant_id,
            name: row.name,
            duration_min: row.duration_min,
            price: row.price,
        }
    }
}

#[derive(Debug, FromRow)]
struct ProfessionalRow {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub job_title: Option<String>,
}

impl From<ProfessionalRow> for Professional {
    fn from(row: ProfessionalRow) -> Self {
        Professional {
            id: row.id,
            tenant_id: row.tenant_id,
            name: row.name,
            job_title: row.job_title,
        }
    }
}

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    DomainError::DatabaseError(e.to_string())
}

#[async_trait]
impl CatalogRepository for PgCatalogRepository {
    async fn find_service(&self, id: &Uuid) -> Result<Option<Service>, DomainError> {
        let row: Option<ServiceRow> = sqlx::query_as(
            "SELECT id, tenant_id, name, duration_min, price FROM services WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding service", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn list_services(&self, tenant_id: Option<Uuid>) -> Result<Vec<Service>, DomainError> {
        let rows: Vec<ServiceRow> = match tenant_id {
            Some(tenant_id) => {
                sqlx::query_as(
                    "SELECT id, tenant_id, name, duration_min, price FROM services \
                     WHERE tenant_id = $1 ORDER BY name",
                )
                .bind(tenant_id)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as(
                    "SELECT id, tenant_id, name, duration_min, price FROM services ORDER BY name",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| db_error("listing services", e))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find_professional(&self, id: &Uuid) -> Result<Option<Professional>, DomainError> {
        let row: Option<ProfessionalRow> = sqlx::query_as(
            "SELECT id, tenant_id, name, job_title FROM professionals WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding professional", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn list_professionals(
        &self,
        tenant_id: Option<Uuid>,
    ) -> Result<Vec<Professional>, DomainError> {
        let rows: Vec<ProfessionalRow> = match tenant_id {
            Some(tenant_id) => {
                sqlx::query_as(
                    "SELECT id, tenant_id, name, job_title FROM professionals \
                     WHERE tenant_id = $1 ORDER BY name",
                )
                .bind(tenant_id)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as(
                    "SELECT id, tenant_id, name, job_title FROM professionals ORDER BY name",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| db_error("listing professionals", e))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}
