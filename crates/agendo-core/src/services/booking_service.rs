//! Booking service
//!
//! Validates a raw booking request, expands weekly recurrences, and
//! hands the resolved order to the atomic booking repository.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use agendo_shared::constants::{DEFAULT_RECURRING_WEEKS, MAX_RECURRING_WEEKS};

use crate::domain::{Appointment, BookingOrder, CustomerDetails, Occurrence};
use crate::error::DomainError;
use crate::repositories::{BookingRepository, CatalogRepository};

/// Raw booking request as it arrives from the client; required fields
/// are optional here so validation can report everything that is
/// missing in one pass.
#[derive(Debug, Clone, Default)]
pub struct NewBooking {
    pub professional_id: Option<Uuid>,
    pub service_id: Option<Uuid>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub recurring_weeks: Option<u32>,
}

pub struct BookingService<C, B>
where
    C: CatalogRepository,
    B: BookingRepository,
{
    catalog: Arc<C>,
    bookings: Arc<B>,
}

impl<C, B> BookingService<C, B>
where
    C: CatalogRepository,
    B: BookingRepository,
{
    pub fn new(catalog: Arc<C>, bookings: Arc<B>) -> Self {
        Self { catalog, bookings }
    }

    /// Create one appointment per requested week, all-or-nothing.
    ///
    /// Fails with `ValidationError` on missing fields, unknown ids, or
    /// past-dated starts, and with `SlotConflict` when any occurrence
    /// overlaps an existing appointment.
    pub async fn create_booking(&self, request: NewBooking) -> Result<Vec<Appointment>, DomainError> {
        self.create_booking_at(request, Utc::now()).await
    }

    async fn create_booking_at(
        &self,
        request: NewBooking,
        now: DateTime<Utc>,
    ) -> Result<Vec<Appointment>, DomainError> {
        let mut missing = Vec::new();
        if request.professional_id.is_none() {
            missing.push("professionalId");
        }
        if request.service_id.is_none() {
            missing.push("serviceId");
        }
        if request.customer_name.as_deref().is_none_or(str::is_empty) {
            missing.push("customerName");
        }
        if request.customer_email.as_deref().is_none_or(str::is_empty) {
            missing.push("customerEmail");
        }
        if request.start_time.is_none() {
            missing.push("startTime");
        }
        if !missing.is_empty() {
            return Err(DomainError::ValidationError(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let professional_id = request
            .professional_id
            .ok_or_else(|| DomainError::ValidationError("professionalId is required".into()))?;
        let service_id = request
            .service_id
            .ok_or_else(|| DomainError::ValidationError("serviceId is required".into()))?;
        let start_time = request
            .start_time
            .ok_or_else(|| DomainError::ValidationError("startTime is required".into()))?;

        let weeks = request.recurring_weeks.unwrap_or(DEFAULT_RECURRING_WEEKS);
        if weeks == 0 || weeks > MAX_RECURRING_WEEKS {
            return Err(DomainError::ValidationError(format!(
                "recurringWeeks must be between 1 and {}",
                MAX_RECURRING_WEEKS
            )));
        }

        let service = self
            .catalog
            .find_service(&service_id)
            .await?
            .ok_or_else(|| DomainError::ValidationError("Unknown service".into()))?;

        let professional = self
            .catalog
            .find_professional(&professional_id)
            .await?
            .ok_or_else(|| DomainError::ValidationError("Unknown professional".into()))?;

        // A booking must reference a professional and service of the
        // same tenant.
        if professional.tenant_id != service.tenant_id {
            warn!(
                %professional_id,
                %service_id,
                "Cross-tenant booking attempt rejected"
            );
            return Err(DomainError::ValidationError(
                "Professional and service belong to different businesses".into(),
            ));
        }

        if start_time < now {
            return Err(DomainError::ValidationError(
                "Start time is in the past".into(),
            ));
        }

        let duration = Duration::minutes(i64::from(service.duration_min));
        let occurrences: Vec<Occurrence> = (0..weeks)
            .map(|week| {
                let start = start_time + Duration::weeks(i64::from(week));
                Occurrence {
                    start_time: start,
                    end_time: start + duration,
                }
            })
            .collect();

        let order = BookingOrder {
            tenant_id: service.tenant_id,
            professional_id,
            service_id,
            customer: CustomerDetails {
                name: request.customer_name.unwrap_or_default(),
                email: request.customer_email.unwrap_or_default(),
                phone: request.customer_phone,
            },
            occurrences,
        };

        let created = self.bookings.book(&order).await?;
        info!(
            %professional_id,
            count = created.len(),
            "Booking committed"
        );
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppointmentStatus, Professional, Service};
    use crate::repositories::booking_repository::MockBookingRepository;
    use crate::repositories::catalog_repository::MockCatalogRepository;
    use chrono::TimeZone;

    fn tenant_id() -> Uuid {
        Uuid::parse_str("11111111-1111-1111-1111-111111111111").unwrap()
    }

    fn service(duration_min: i32) -> Service {
        Service {
            id: Uuid::parse_str("22222222-2222-2222-2222-222222222222").unwrap(),
            tenant_id: tenant_id(),
            name: "Corte Clásico".into(),
            duration_min,
            price: 1500,
        }
    }

    fn professional() -> Professional {
        Professional {
            id: Uuid::parse_str("33333333-3333-3333-3333-333333333333").unwrap(),
            tenant_id: tenant_id(),
            name: "Carlos".into(),
            job_title: None,
        }
    }

    fn request(start: DateTime<Utc>) -> NewBooking {
        NewBooking {
            professional_id: Some(professional().id),
            service_id: Some(service(30).id),
            customer_name: Some("Juan Pérez".into()),
            customer_email: Some("juan@example.com".into()),
            customer_phone: Some("555-0199".into()),
            start_time: Some(start),
            recurring_weeks: None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn created(order: &BookingOrder) -> Vec<Appointment> {
        order
            .occurrences
            .iter()
            .map(|occ| Appointment {
                id: Uuid::new_v4(),
                professional_id: order.professional_id,
                service_id: order.service_id,
                customer_id: Uuid::new_v4(),
                start_time: occ.start_time,
                end_time: occ.end_time,
                status: AppointmentStatus::Confirmed,
            })
            .collect()
    }

    fn with_catalog() -> MockCatalogRepository {
        let mut catalog = MockCatalogRepository::new();
        catalog
            .expect_find_service()
            .returning(|_| Ok(Some(service(30))));
        catalog
            .expect_find_professional()
            .returning(|_| Ok(Some(professional())));
        catalog
    }

    #[tokio::test]
    async fn missing_fields_are_all_reported() {
        let svc = BookingService::new(
            Arc::new(MockCatalogRepository::new()),
            Arc::new(MockBookingRepository::new()),
        );

        let err = svc
            .create_booking_at(NewBooking::default(), now())
            .await
            .unwrap_err();
        match err {
            DomainError::ValidationError(msg) => {
                for field in [
                    "professionalId",
                    "serviceId",
                    "customerName",
                    "customerEmail",
                    "startTime",
                ] {
                    assert!(msg.contains(field), "missing {field} in: {msg}");
                }
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn past_start_time_is_rejected() {
        let svc = BookingService::new(Arc::new(with_catalog()), Arc::new(MockBookingRepository::new()));

        let err = svc
            .create_booking_at(request(now() - Duration::hours(1)), now())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn unknown_service_is_a_validation_error() {
        let mut catalog = MockCatalogRepository::new();
        catalog.expect_find_service().returning(|_| Ok(None));
        let svc = BookingService::new(Arc::new(catalog), Arc::new(MockBookingRepository::new()));

        let err = svc
            .create_booking_at(request(now() + Duration::days(1)), now())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn cross_tenant_booking_is_rejected() {
        let mut catalog = MockCatalogRepository::new();
        catalog
            .expect_find_service()
            .returning(|_| Ok(Some(service(30))));
        catalog.expect_find_professional().returning(|_| {
            let mut p = professional();
            p.tenant_id = Uuid::new_v4();
            Ok(Some(p))
        });
        let svc = BookingService::new(Arc::new(catalog), Arc::new(MockBookingRepository::new()));

        let err = svc
            .create_booking_at(request(now() + Duration::days(1)), now())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn recurring_weeks_expand_seven_days_apart() {
        let mut bookings = MockBookingRepository::new();
        bookings
            .expect_book()
            .withf(|order: &BookingOrder| {
                order.occurrences.len() == 4
                    && order.occurrences.windows(2).all(|w| {
                        w[1].start_time - w[0].start_time == Duration::weeks(1)
                    })
                    && order
                        .occurrences
                        .iter()
                        .all(|occ| occ.end_time - occ.start_time == Duration::minutes(30))
            })
            .returning(|order| Ok(created(order)));
        let svc = BookingService::new(Arc::new(with_catalog()), Arc::new(bookings));

        let mut req = request(now() + Duration::days(1));
        req.recurring_weeks = Some(4);
        let appointments = svc.create_booking_at(req, now()).await.unwrap();
        assert_eq!(appointments.len(), 4);
    }

    #[tokio::test]
    async fn zero_recurring_weeks_is_invalid() {
        let svc = BookingService::new(Arc::new(with_catalog()), Arc::new(MockBookingRepository::new()));

        let mut req = request(now() + Duration::days(1));
        req.recurring_weeks = Some(0);
        let err = svc.create_booking_at(req, now()).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn conflict_aborts_the_whole_batch() {
        let mut bookings = MockBookingRepository::new();
        bookings
            .expect_book()
            .returning(|_| Err(DomainError::SlotConflict));
        let svc = BookingService::new(Arc::new(with_catalog()), Arc::new(bookings));

        let mut req = request(now() + Duration::days(1));
        req.recurring_weeks = Some(4);
        let err = svc.create_booking_at(req, now()).await.unwrap_err();
        assert!(matches!(err, DomainError::SlotConflict));
    }

    #[tokio::test]
    async fn tenant_is_derived_from_the_service() {
        let mut bookings = MockBookingRepository::new();
        bookings
            .expect_book()
            .withf(|order: &BookingOrder| order.tenant_id == tenant_id())
            .returning(|order| Ok(created(order)));
        let svc = BookingService::new(Arc::new(with_catalog()), Arc::new(bookings));

        let appointments = svc
            .create_booking_at(request(now() + Duration::days(1)), now())
            .await
            .unwrap();
        assert_eq!(appointments.len(), 1);
    }
}
