//! # Agendo Core
//!
//! Domain entities, services, and repository traits for the booking
//! application.

pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;
pub mod slots;

pub use domain::*;
pub use error::DomainError;
