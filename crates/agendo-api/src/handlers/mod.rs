//! HTTP handlers

pub mod appointments;
pub mod availability;
pub mod blocks;
pub mod catalog;
pub mod health;
pub mod tenants;
