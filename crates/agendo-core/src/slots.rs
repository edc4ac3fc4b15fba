//! Slot generation
//!
//! Pure calendar math behind the availability calculator: a fixed-step
//! sweep over one day's operating window with a half-open interval
//! overlap test against the day's booked appointments.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use agendo_shared::constants::SLOT_STEP_MINUTES;

/// A half-open `[start, end)` interval on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Half-open overlap: `[a1,a2)` and `[b1,b2)` share an instant iff
    /// `a1 < b2 && b1 < a2`. Back-to-back ranges do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Candidate start times for a service of `duration_min` minutes on
/// `date`, between `opening_hour` and `closing_hour`, skipping any
/// candidate whose interval overlaps a busy range.
///
/// Starts are aligned to the 30-minute grid regardless of duration, and
/// a candidate must end at or before the closing boundary; no partial
/// slots are offered.
pub fn free_slots(
    date: NaiveDate,
    opening_hour: u32,
    closing_hour: u32,
    duration_min: i64,
    busy: &[TimeRange],
) -> Vec<NaiveTime> {
    if duration_min <= 0 || closing_hour <= opening_hour {
        return Vec::new();
    }
    let (open, close) = match (
        date.and_hms_opt(opening_hour, 0, 0),
        date.and_hms_opt(closing_hour, 0, 0),
    ) {
        (Some(o), Some(c)) => (o.and_utc(), c.and_utc()),
        _ => return Vec::new(),
    };

    let step = Duration::minutes(SLOT_STEP_MINUTES);
    let duration = Duration::minutes(duration_min);

    let mut slots = Vec::new();
    let mut start = open;
    while start + duration <= close {
        let candidate = TimeRange::new(start, start + duration);
        if !busy.iter().any(|b| b.overlaps(&candidate)) {
            slots.push(start.time());
        }
        start += step;
    }
    slots
}
