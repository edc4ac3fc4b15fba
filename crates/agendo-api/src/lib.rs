//! # Agendo API
//!
//! HTTP handlers, DTOs, response envelope, and app state.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod response;
pub mod state;
