//! Availability calculator
//!
//! Given a professional, a service, and a date, produce the bookable
//! slot starts for that day.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::error::DomainError;
use crate::repositories::{
    AppointmentRepository, BlockedDateRepository, CatalogRepository, TenantRepository,
};
use crate::slots::{free_slots, TimeRange};

pub struct AvailabilityService<C, T, A, B>
where
    C: CatalogRepository,
    T: TenantRepository,
    A: AppointmentRepository,
    B: BlockedDateRepository,
{
    catalog: Arc<C>,
    tenants: Arc<T>,
    appointments: Arc<A>,
    blocks: Arc<B>,
}

impl<C, T, A, B> AvailabilityService<C, T, A, B>
where
    C: CatalogRepository,
    T: TenantRepository,
    A: AppointmentRepository,
    B: BlockedDateRepository,
{
    pub fn new(catalog: Arc<C>, tenants: Arc<T>, appointments: Arc<A>, blocks: Arc<B>) -> Self {
        Self {
            catalog,
            tenants,
            appointments,
            blocks,
        }
    }

    /// Free slot starts for `(professional, service, date)`, ascending,
    /// formatted as `HH:MM`. Closed weekdays and blocked dates yield an
    /// empty list without touching the calendar.
    pub async fn available_slots(
        &self,
        professional_id: &Uuid,
        service_id: &Uuid,
        date: NaiveDate,
    ) -> Result<Vec<String>, DomainError> {
        let service = self
            .catalog
            .find_service(service_id)
            .await?
            .ok_or(DomainError::ServiceNotFound)?;

        let professional = self
            .catalog
            .find_professional(professional_id)
            .await?
            .ok_or(DomainError::ProfessionalNotFound)?;

        let tenant = self
            .tenants
            .find_by_id(&professional.tenant_id)
            .await?
            .ok_or(DomainError::TenantNotFound)?;

        if tenant.is_closed_on(date) {
            debug!(%professional_id, %date, "Tenant closed on requested weekday");
            return Ok(Vec::new());
        }

        if self.blocks.find_for_day(professional_id, date).await?.is_some() {
            debug!(%professional_id, %date, "Date is blocked for professional");
            return Ok(Vec::new());
        }

        let busy: Vec<TimeRange> = self
            .appointments
            .list_for_day(professional_id, date)
            .await?
            .iter()
            .map(|a| a.range())
            .collect();

        let slots = free_slots(
            date,
            tenant.opening_hour as u32,
            tenant.closing_hour as u32,
            i64::from(service.duration_min),
            &busy,
        );

        Ok(slots
            .into_iter()
            .map(|t| t.format("%H:%M").to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Appointment, AppointmentStatus, Professional, Service, Tenant};
    use crate::repositories::appointment_repository::MockAppointmentRepository;
    use crate::repositories::blocked_date_repository::MockBlockedDateRepository;
    use crate::repositories::catalog_repository::MockCatalogRepository;
    use crate::repositories::tenant_repository::MockTenantRepository;
    use crate::domain::BlockedDate;

    fn tenant_id() -> Uuid {
        Uuid::parse_str("11111111-1111-1111-1111-111111111111").unwrap()
    }

    fn tenant(closed_weekdays: Vec<i16>) -> Tenant {
        Tenant {
            id: tenant_id(),
            slug: "barberia-demo".into(),
            name: "Barbería Demo".into(),
            theme_color: "#1e293b".into(),
            category: "barbershop".into(),
            address: "Av. Siempre Viva 123".into(),
            phone: "555-0100".into(),
            opening_hour: 10,
            closing_hour: 18,
            closed_weekdays,
        }
    }

    fn service(duration_min: i32) -> Service {
        Service {
            id: Uuid::new_v4(),
            tenant_id: tenant_id(),
            name: "Corte Clásico".into(),
            duration_min,
            price: 1500,
        }
    }

    fn professional() -> Professional {
        Professional {
            id: Uuid::new_v4(),
            tenant_id: tenant_id(),
            name: "Carlos".into(),
            job_title: None,
        }
    }

    fn appointment(professional_id: Uuid, date: NaiveDate, h1: u32, m1: u32, h2: u32, m2: u32) -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            professional_id,
            service_id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            start_time: date.and_hms_opt(h1, m1, 0).unwrap().and_utc(),
            end_time: date.and_hms_opt(h2, m2, 0).unwrap().and_utc(),
            status: AppointmentStatus::Confirmed,
        }
    }

    struct Fixture {
        catalog: MockCatalogRepository,
        tenants: MockTenantRepository,
        appointments: MockAppointmentRepository,
        blocks: MockBlockedDateRepository,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                catalog: MockCatalogRepository::new(),
                tenants: MockTenantRepository::new(),
                appointments: MockAppointmentRepository::new(),
                blocks: MockBlockedDateRepository::new(),
            }
        }

        fn build(
            self,
        ) -> AvailabilityService<
            MockCatalogRepository,
            MockTenantRepository,
            MockAppointmentRepository,
            MockBlockedDateRepository,
        > {
            AvailabilityService::new(
                Arc::new(self.catalog),
                Arc::new(self.tenants),
                Arc::new(self.appointments),
                Arc::new(self.blocks),
            )
        }
    }

    // Monday
    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    }

    #[tokio::test]
    async fn unknown_service_is_not_found() {
        let mut fx = Fixture::new();
        fx.catalog
            .expect_find_service()
            .returning(|_| Ok(None));
        let svc = fx.build();

        let err = svc
            .available_slots(&Uuid::new_v4(), &Uuid::new_v4(), day())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ServiceNotFound));
    }

    #[tokio::test]
    async fn closed_weekday_yields_empty_without_calendar_reads() {
        let prof = professional();
        let svc_entity = service(30);
        let mut fx = Fixture::new();
        let p = prof.clone();
        fx.catalog
            .expect_find_service()
            .returning(move |_| Ok(Some(svc_entity.clone())));
        fx.catalog
            .expect_find_professional()
            .returning(move |_| Ok(Some(p.clone())));
        // Monday (weekday 1) closed
        fx.tenants
            .expect_find_by_id()
            .returning(|_| Ok(Some(tenant(vec![1]))));
        fx.blocks.expect_find_for_day().never();
        fx.appointments.expect_list_for_day().never();
        let svc = fx.build();

        let slots = svc
            .available_slots(&prof.id, &Uuid::new_v4(), day())
            .await
            .unwrap();
        assert!(slots.is_empty());
    }

    #[tokio::test]
    async fn blocked_date_yields_empty() {
        let prof = professional();
        let svc_entity = service(30);
        let mut fx = Fixture::new();
        let p = prof.clone();
        let prof_id = prof.id;
        fx.catalog
            .expect_find_service()
            .returning(move |_| Ok(Some(svc_entity.clone())));
        fx.catalog
            .expect_find_professional()
            .returning(move |_| Ok(Some(p.clone())));
        fx.tenants
            .expect_find_by_id()
            .returning(|_| Ok(Some(tenant(vec![]))));
        fx.blocks.expect_find_for_day().returning(move |_, d| {
            Ok(Some(BlockedDate {
                id: Uuid::new_v4(),
                professional_id: prof_id,
                date: d,
                reason: "Día Libre".into(),
            }))
        });
        fx.appointments.expect_list_for_day().never();
        let svc = fx.build();

        let slots = svc
            .available_slots(&prof.id, &Uuid::new_v4(), day())
            .await
            .unwrap();
        assert!(slots.is_empty());
    }

    #[tokio::test]
    async fn open_day_returns_full_grid() {
        let prof = professional();
        let svc_entity = service(30);
        let mut fx = Fixture::new();
        let p = prof.clone();
        fx.catalog
            .expect_find_service()
            .returning(move |_| Ok(Some(svc_entity.clone())));
        fx.catalog
            .expect_find_professional()
            .returning(move |_| Ok(Some(p.clone())));
        fx.tenants
            .expect_find_by_id()
            .returning(|_| Ok(Some(tenant(vec![]))));
        fx.blocks.expect_find_for_day().returning(|_, _| Ok(None));
        fx.appointments
            .expect_list_for_day()
            .returning(|_, _| Ok(Vec::new()));
        let svc = fx.build();

        let slots = svc
            .available_slots(&prof.id, &Uuid::new_v4(), day())
            .await
            .unwrap();
        assert_eq!(slots.len(), 16);
        assert_eq!(slots[0], "10:00");
        assert_eq!(slots[15], "17:30");
    }

    #[tokio::test]
    async fn booked_interval_is_excluded() {
        let prof = professional();
        let prof_id = prof.id;
        let svc_entity = service(30);
        let mut fx = Fixture::new();
        let p = prof.clone();
        fx.catalog
            .expect_find_service()
            .returning(move |_| Ok(Some(svc_entity.clone())));
        fx.catalog
            .expect_find_professional()
            .returning(move |_| Ok(Some(p.clone())));
        fx.tenants
            .expect_find_by_id()
            .returning(|_| Ok(Some(tenant(vec![]))));
        fx.blocks.expect_find_for_day().returning(|_, _| Ok(None));
        fx.appointments
            .expect_list_for_day()
            .returning(move |_, d| Ok(vec![appointment(prof_id, d, 10, 0, 10, 30)]));
        let svc = fx.build();

        let slots = svc
            .available_slots(&prof.id, &Uuid::new_v4(), day())
            .await
            .unwrap();
        assert!(!slots.contains(&"10:00".to_string()));
        assert!(slots.contains(&"10:30".to_string()));
        assert_eq!(slots.len(), 15);
    }
}
