//! # Agendo Infrastructure
//!
//! PostgreSQL implementations of the core repository ports.

pub mod database;

pub use database::{
    create_pool, PgAppointmentRepository, PgBlockedDateRepository, PgBookingRepository,
    PgCatalogRepository, PgTenantRepository, MIGRATOR,
};
