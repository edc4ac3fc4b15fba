//! Daily reminder sweep
//!
//! Logs tomorrow's appointments once a day. Delivery (email/SMS) is a
//! separate concern; this only surfaces the list for operators.

use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};
use tracing::{error, info};

use agendo_api::state::AppState;
use agendo_core::error::DomainError;
use agendo_core::repositories::{AppointmentFilter, AppointmentRepository};

const SWEEP_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

pub async fn run(state: AppState) {
    let mut interval = tokio::time::interval(SWEEP_INTERVAL);
    loop {
        interval.tick().await;
        if let Err(e) = sweep(&state).await {
            error!("Reminder sweep failed: {}", e);
        }
    }
}

async fn sweep(state: &AppState) -> Result<(), DomainError> {
    let tomorrow = (Utc::now() + ChronoDuration::days(1)).date_naive();
    let filter = AppointmentFilter {
        date: Some(tomorrow),
        ..Default::default()
    };
    let upcoming = state.appointments.list(&filter).await?;
    for entry in &upcoming {
        info!(
            customer = %entry.customer_name,
            service = %entry.service_name,
            professional = %entry.professional_name,
            start_time = %entry.appointment.start_time,
            "Appointment reminder"
        );
    }
    info!(count = upcoming.len(), %tomorrow, "Reminder sweep finished");
    Ok(())
}
