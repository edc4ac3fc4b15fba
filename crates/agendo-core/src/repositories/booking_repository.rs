//! Booking repository trait (port)
//!
//! The one write path for appointments. Implementations must make the
//! conflict check and the insert indivisible with respect to concurrent
//! bookings for the same professional.

use async_trait::async_trait;

use crate::domain::{Appointment, BookingOrder};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Atomically verify every occurrence is still free and insert them
    /// all, finding or creating the customer on (tenant, email) along
    /// the way. Any overlap aborts the whole order with `SlotConflict`;
    /// no partial batch is ever committed.
    async fn book(&self, order: &BookingOrder) -> Result<Vec<Appointment>, DomainError>;
}
