use std::sync::Arc;

use sqlx::PgPool;

use agendo_core::services::{AvailabilityService, BookingService};
use agendo_infrastructure::{
    PgAppointmentRepository, PgBlockedDateRepository, PgBookingRepository, PgCatalogRepository,
    PgTenantRepository,
};
use agendo_shared::config::AppConfig;

pub type Availability = AvailabilityService<
    PgCatalogRepository,
    PgTenantRepository,
    PgAppointmentRepository,
    PgBlockedDateRepository,
>;
pub type Booking = BookingService<PgCatalogRepository, PgBookingRepository>;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: AppConfig,
    pub tenants: Arc<PgTenantRepository>,
    pub catalog: Arc<PgCatalogRepository>,
    pub appointments: Arc<PgAppointmentRepository>,
    pub blocks: Arc<PgBlockedDateRepository>,
    pub availability: Arc<Availability>,
    pub booking: Arc<Booking>,
}

impl AppState {
    pub fn new(db: PgPool, config: AppConfig) -> Self {
        let tenants = Arc::new(PgTenantRepository::new(db.clone()));
        let catalog = Arc::new(PgCatalogRepository::new(db.clone()));
        let appointments = Arc::new(PgAppointmentRepository::new(db.clone()));
        let blocks = Arc::new(PgBlockedDateRepository::new(db.clone()));
        let bookings = Arc::new(PgBookingRepository::new(db.clone()));

        let availability = Arc::new(AvailabilityService::new(
            catalog.clone(),
            tenants.clone(),
            appointments.clone(),
            blocks.clone(),
        ));
        let booking = Arc::new(BookingService::new(catalog.clone(), bookings));

        Self {
            db,
            config,
            tenants,
            catalog,
            appointments,
            blocks,
            availability,
            booking,
        }
    }
}
