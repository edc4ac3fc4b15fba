//! # Agendo Shared
//!
//! Shared utilities, types, and telemetry for the booking application.

pub mod config;
pub mod constants;
pub mod error;
pub mod telemetry;
pub mod types;

pub use error::AppError;
pub use types::*;
