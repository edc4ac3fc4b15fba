//! PostgreSQL tenant repository

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::error;
use uuid::Uuid;

use agendo_core::domain::Tenant;
use agendo_core::error::DomainError;
use agendo_core::repositories::TenantRepository;

pub struct PgTenantRepository {
    pool: PgPool,
}

impl PgTenantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct TenantRow {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub theme_color: String,
    pub category: String,
    pub address: String,
    pub phone: String,
    pub opening_hour: i32,
    pub closing_hour: i32,
    pub closed_weekdays: Vec<i16>,
}

impl From<TenantRow> for Tenant {
    fn from(row: TenantRow) -> Self {
        Tenant {
            id: row.id,
            slug: row.slug,
            name: row.name,
            theme_color: row.theme_color,
            category: row.category,
            address: row.address,
            phone: row.phone,
            opening_hour: row.opening_hour,
            closing_hour: row.closing_hour,
            closed_weekdays: row.closed_weekdays,
        }
    }
}

const TENANT_COLUMNS: &str = "id, slug, name, theme_color, category, address, phone, \
     opening_hour, closing_hour, closed_weekdays";

#[async_trait]
impl TenantRepository for PgTenantRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Tenant>, DomainError> {
        let row: Option<TenantRow> = sqlx::query_as(&format!(
            "SELECT {TENANT_COLUMNS} FROM tenants WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding tenant by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Tenant>, DomainError> {
        let row: Option<TenantRow> = sqlx::query_as(&format!(
            "SELECT {TENANT_COLUMNS} FROM tenants WHERE LOWER(slug) = LOWER($1)"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding tenant by slug: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }
}
