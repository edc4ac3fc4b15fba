//! Domain services

pub mod availability_service;
pub mod booking_service;

pub use availability_service::AvailabilityService;
pub use booking_service::{BookingService, NewBooking};
