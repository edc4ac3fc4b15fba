//! Database module (PostgreSQL adapters)

pub mod connection;
pub mod postgres;

pub use connection::create_pool;
pub use postgres::{
    PgAppointmentRepository, PgBlockedDateRepository, PgBookingRepository, PgCatalogRepository,
    PgTenantRepository,
};

/// Embedded sqlx migrations, run by the server at startup.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
