//! Repository traits (ports)

pub mod appointment_repository;
pub mod blocked_date_repository;
pub mod booking_repository;
pub mod catalog_repository;
pub mod tenant_repository;

pub use appointment_repository::{AppointmentFilter, AppointmentRepository};
pub use blocked_date_repository::BlockedDateRepository;
pub use booking_repository::BookingRepository;
pub use catalog_repository::CatalogRepository;
pub use tenant_repository::TenantRepository;
