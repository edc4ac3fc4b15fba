//! PostgreSQL appointment repository (reads and admin delete)

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::{error, info};
use uuid::Uuid;

use agendo_core::domain::{Appointment, AppointmentDetails, AppointmentStatus};
use agendo_core::error::DomainError;
use agendo_core::repositories::{AppointmentFilter, AppointmentRepository};

pub struct PgAppointmentRepository {
    pool: PgPool,
}

impl PgAppointmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping, shared with the booking
// repository which inserts the same shape.
#[derive(Debug, FromRow)]
pub(crate) struct AppointmentRow {
    pub id: Uuid,
    pub professional_id: Uuid,
    pub service_id: Uuid,
    pub customer_id: Uuid,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
    pub status: String,
}

impl From<AppointmentRow> for Appointment {
    fn from(row: AppointmentRow) -> Self {
        Appointment {
            id: row.id,
            professional_id: row.professional_id,
            service_id: row.service_id,
            customer_id: row.customer_id,
            start_time: row.start_time,
            end_time: row.end_time,
            status: AppointmentStatus::from_str(&row.status).unwrap_or_default(),
        }
    }
}

#[derive(Debug, FromRow)]
struct AppointmentDetailsRow {
    pub id: Uuid,
    pub professional_id: Uuid,
    pub service_id: Uuid,
    pub customer_id: Uuid,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
    pub status: String,
    pub service_name: String,
    pub service_price: i64,
    pub service_duration_min: i32,
    pub professional_name: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
}

impl From<AppointmentDetailsRow> for AppointmentDetails {
    fn from(row: AppointmentDetailsRow) -> Self {
        AppointmentDetails {
            appointment: Appointment {
                id: row.id,
                professional_id: row.professional_id,
                service_id: row.service_id,
                customer_id: row.customer_id,
                start_time: row.start_time,
                end_time: row.end_time,
                status: AppointmentStatus::from_str(&row.status).unwrap_or_default(),
            },
            service_name: row.service_name,
            service_price: row.service_price,
            service_duration_min: row.service_duration_min,
            professional_name: row.professional_name,
            customer_name: row.customer_name,
            customer_email: row.customer_email,
            customer_phone: row.customer_phone,
        }
    }
}

#[async_trait]
impl AppointmentRepository for PgAppointmentRepository {
    async fn list_for_day(
        &self,
        professional_id: &Uuid,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, DomainError> {
        let day_start = match date.and_hms_opt(0, 0, 0) {
            Some(t) => t.and_utc(),
            None => return Ok(Vec::new()),
        };
        let day_end = day_start + Duration::days(1);

        let rows: Vec<AppointmentRow> = sqlx::query_as(
            r#"
            SELECT id, professional_id, service_id, customer_id, start_time, end_time, status
            FROM appointments
            WHERE professional_id = $1
              AND status <> 'CANCELED'
              AND start_time < $3
              AND end_time > $2
            ORDER BY start_time
            "#,
        )
        .bind(professional_id)
        .bind(day_start)
        .bind(day_end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing appointments for day: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn list(
        &self,
        filter: &AppointmentFilter,
    ) -> Result<Vec<AppointmentDetails>, DomainError> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            r#"
            SELECT a.id, a.professional_id, a.service_id, a.customer_id,
                   a.start_time, a.end_time, a.status,
                   s.name AS service_name, s.price AS service_price,
                   s.duration_min AS service_duration_min,
                   p.name AS professional_name,
                   c.name AS customer_name, c.email AS customer_email,
                   c.phone AS customer_phone
            FROM appointments a
            JOIN services s ON s.id = a.service_id
            JOIN professionals p ON p.id = a.professional_id
            JOIN customers c ON c.id = a.customer_id
            WHERE 1 = 1
            "#,
        );

        if let Some(tenant_id) = filter.tenant_id {
            builder.push(" AND s.tenant_id = ").push_bind(tenant_id);
        }
        if let Some(professional_id) = filter.professional_id {
            builder
                .push(" AND a.professional_id = ")
                .push_bind(professional_id);
        }
        if let Some(date) = filter.date {
            if let Some(day_start) = date.and_hms_opt(0, 0, 0) {
                let day_start = day_start.and_utc();
                builder.push(" AND a.start_time >= ").push_bind(day_start);
                builder
                    .push(" AND a.start_time < ")
                    .push_bind(day_start + Duration::days(1));
            }
        }
        builder.push(" ORDER BY a.start_time ASC");

        let rows: Vec<AppointmentDetailsRow> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error listing appointments: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting appointment: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::AppointmentNotFound);
        }
        info!("Appointment deleted: {}", id);
        Ok(())
    }
}
