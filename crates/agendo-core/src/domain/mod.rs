//! # Agendo Core - Domain Module
//!
//! Domain entities for the booking application.

pub mod appointment;
pub mod blocked_date;
pub mod booking;
pub mod customer;
pub mod professional;
pub mod service;
pub mod tenant;

// Re-export all entities and enums
pub use appointment::{Appointment, AppointmentDetails, AppointmentStatus};
pub use blocked_date::BlockedDate;
pub use booking::{BookingOrder, CustomerDetails, Occurrence};
pub use customer::Customer;
pub use professional::Professional;
pub use service::Service;
pub use tenant::Tenant;
