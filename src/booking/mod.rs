//! Booking-slot validation domain
//!
//! Pure calendar arithmetic over a location's weekly operating hours and
//! closure blackouts: window validation, optimal-time derivation for
//! date-only picks, and availability enumeration for the picker UI.
//! No I/O happens here; callers fetch a snapshot and pass it in.

pub mod availability;
pub mod calendar;
pub mod derive;
pub mod quantize;
pub mod state;
pub mod validate;

use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use calendar::{ClosureSpan, DaySpan, LocationCalendar, WeeklyHours};
pub use state::Selection;
pub use validate::{validate_extension, validate_window, RejectReason};

/// Bookable slot granularity in minutes
pub const SLOT_MINUTES: u32 = 15;

/// Minimum booking duration in minutes
pub const MIN_DURATION_MINUTES: i64 = 60;

/// Tolerance around opening/closing applied to overnight spans only
pub const OVERNIGHT_GRACE_MINUTES: i64 = 5;

/// Minimum duration as a chrono duration
pub fn min_duration() -> Duration {
    Duration::minutes(MIN_DURATION_MINUTES)
}

/// Overnight bookings are only offered when the start day closes at or
/// after this time
pub fn overnight_close_floor() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 55, 0).unwrap()
}

/// Opening time assumed when a weekday has no active operating-hours row
pub fn default_open_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap()
}

/// A concrete reservation time window, endpoints quantized to the slot grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Window {
    /// Window start (location-local)
    pub start: NaiveDateTime,
    /// Window end (location-local, exclusive)
    pub end: NaiveDateTime,
}

impl Window {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// True when start and end fall on different calendar dates
    pub fn is_overnight(&self) -> bool {
        self.start.date() != self.end.date()
    }
}
