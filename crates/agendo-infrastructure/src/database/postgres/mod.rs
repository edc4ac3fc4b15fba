//! PostgreSQL repository implementations

pub mod appointment_repo_impl;
pub mod blocked_date_repo_impl;
pub mod booking_repo_impl;
pub mod catalog_repo_impl;
pub mod tenant_repo_impl;

pub use appointment_repo_impl::PgAppointmentRepository;
pub use blocked_date_repo_impl::PgBlockedDateRepository;
pub use booking_repo_impl::PgBookingRepository;
pub use catalog_repo_impl::PgCatalogRepository;
pub use tenant_repo_impl::PgTenantRepository;
