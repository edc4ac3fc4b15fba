//! Application-wide constants

/// Candidate slot starts are aligned to this step, independent of
/// service duration.
pub const SLOT_STEP_MINUTES: i64 = 30;

/// A plain booking request creates a single occurrence.
pub const DEFAULT_RECURRING_WEEKS: u32 = 1;

/// Upper bound on weekly repetitions accepted for one request.
pub const MAX_RECURRING_WEEKS: u32 = 52;
