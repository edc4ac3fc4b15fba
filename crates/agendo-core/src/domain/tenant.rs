//! Tenant domain entity

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One independent business account, the unit of data isolation.
///
/// Operating hours are whole hours in the tenant's reference clock;
/// `closed_weekdays` uses 0 = Sunday .. 6 = Saturday.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub theme_color: String,
    pub category: String,
    pub address: String,
    pub phone: String,
    pub opening_hour: i32,
    pub closing_hour: i32,
    pub closed_weekdays: Vec<i16>,
}

impl Tenant {
    /// Whether the business does not operate on the given date at all.
    pub fn is_closed_on(&self, date: NaiveDate) -> bool {
        let weekday = date.weekday().num_days_from_sunday() as i16;
        self.closed_weekdays.contains(&weekday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenant(closed: Vec<i16>) -> Tenant {
        Tenant {
            id: Uuid::new_v4(),
            slug: "barberia-demo".into(),
            name: "Barbería Demo".into(),
            theme_color: "#1e293b".into(),
            category: "barbershop".into(),
            address: "Av. Siempre Viva 123".into(),
            phone: "555-0100".into(),
            opening_hour: 10,
            closing_hour: 18,
            closed_weekdays: closed,
        }
    }

    #[test]
    fn sunday_is_weekday_zero() {
        // 2024-06-02 is a Sunday
        let sunday = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        assert!(tenant(vec![0]).is_closed_on(sunday));
        assert!(!tenant(vec![1]).is_closed_on(sunday));
    }

    #[test]
    fn open_every_day_when_no_closed_weekdays() {
        let t = tenant(vec![]);
        let mut day = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        for _ in 0..7 {
            assert!(!t.is_closed_on(day));
            day = day.succ_opt().unwrap();
        }
    }
}
