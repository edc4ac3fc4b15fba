//! PostgreSQL booking repository
//!
//! The single write path for appointments. The conflict check and the
//! inserts run inside one SERIALIZABLE transaction, so two requests
//! racing for overlapping intervals cannot both pass the check; the
//! exclusion constraint on the appointments table backs this up at the
//! storage level.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{error, info, warn};
use uuid::Uuid;

use agendo_core::domain::{Appointment, BookingOrder};
use agendo_core::error::DomainError;
use agendo_core::repositories::BookingRepository;
use agendo_shared::new_id;

use super::appointment_repo_impl::AppointmentRow;

pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CustomerIdRow {
    pub id: Uuid,
}

/// Serialization failures (40001) and exclusion violations (23P01) both
/// mean another booking got there first.
fn map_booking_error(e: sqlx::Error) -> DomainError {
    if let Some(db) = e.as_database_error() {
        if let Some(code) = db.code() {
            if code == "40001" || code == "23P01" {
                warn!("Booking lost the race: {}", db.message());
                return DomainError::SlotConflict;
            }
        }
    }
    error!("Database error during booking: {}", e);
    DomainError::DatabaseError(e.to_string())
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn book(&self, order: &BookingOrder) -> Result<Vec<Appointment>, DomainError> {
        let mut tx = self.pool.begin().await.map_err(map_booking_error)?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut *tx)
            .await
            .map_err(map_booking_error)?;

        // Find-or-create the customer on (tenant, email) as one atomic
        // statement. The no-op update makes RETURNING yield the existing
        // row; an existing customer keeps their stored name and phone.
        let customer: CustomerIdRow = sqlx::query_as(
            r#"
            INSERT INTO customers (id, tenant_id, name, email, phone)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (tenant_id, email) DO UPDATE SET email = customers.email
            RETURNING id
            "#,
        )
        .bind(new_id())
        .bind(order.tenant_id)
        .bind(&order.customer.name)
        .bind(&order.customer.email)
        .bind(&order.customer.phone)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_booking_error)?;

        let mut created = Vec::with_capacity(order.occurrences.len());
        for occurrence in &order.occurrences {
            let conflicts: i64 = sqlx::query_scalar(
                r#"
                SELECT COUNT(*)
                FROM appointments
                WHERE professional_id = $1
                  AND status <> 'CANCELED'
                  AND start_time < $3
                  AND end_time > $2
                "#,
            )
            .bind(order.professional_id)
            .bind(occurrence.start_time)
            .bind(occurrence.end_time)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_booking_error)?;

            if conflicts > 0 {
                // Dropping the transaction rolls back any occurrences
                // already inserted: the batch is all-or-nothing.
                warn!(
                    professional_id = %order.professional_id,
                    start_time = %occurrence.start_time,
                    "Slot already taken, rejecting whole booking"
                );
                return Err(DomainError::SlotConflict);
            }

            let row: AppointmentRow = sqlx::query_as(
                r#"
                INSERT INTO appointments
                    (id, professional_id, service_id, customer_id, start_time, end_time, status)
                VALUES ($1, $2, $3, $4, $5, $6, 'CONFIRMED')
                RETURNING id, professional_id, service_id, customer_id,
                          start_time, end_time, status
                "#,
            )
            .bind(new_id())
            .bind(order.professional_id)
            .bind(order.service_id)
            .bind(customer.id)
            .bind(occurrence.start_time)
            .bind(occurrence.end_time)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_booking_error)?;

            created.push(row.into());
        }

        tx.commit().await.map_err(map_booking_error)?;

        info!(
            professional_id = %order.professional_id,
            customer_id = %customer.id,
            count = created.len(),
            "Appointments created"
        );
        Ok(created)
    }
}
