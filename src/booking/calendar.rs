//! Location calendar snapshot
//!
//! Immutable view of one location's weekly operating hours and active
//! closure blackouts, built from configuration rows fetched elsewhere.
//! Missing hours data is treated as non-permissive throughout: a weekday
//! with no active row accepts no time.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::models::hours::{ClosureInterval, OperatingHours};

use super::OVERNIGHT_GRACE_MINUTES;

/// Open/close span for one weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySpan {
    pub open: NaiveTime,
    pub close: NaiveTime,
}

/// Per-weekday operating hours, indexed 0=Monday .. 6=Sunday
#[derive(Debug, Clone, Default)]
pub struct WeeklyHours {
    days: [Option<DaySpan>; 7],
}

impl WeeklyHours {
    /// Build from configuration rows, keeping only active ones.
    /// At most one active row per weekday is expected; a duplicate
    /// overwrites the earlier one.
    pub fn from_rows(rows: &[OperatingHours]) -> Self {
        let mut days: [Option<DaySpan>; 7] = Default::default();
        for row in rows.iter().filter(|r| r.is_active) {
            if let Some(slot) = days.get_mut(row.day_of_week as usize) {
                *slot = Some(DaySpan {
                    open: row.open_time,
                    close: row.close_time,
                });
            }
        }
        Self { days }
    }

    /// Hours span for the weekday of the given date
    pub fn span_for(&self, date: NaiveDate) -> Option<DaySpan> {
        self.days[date.weekday().num_days_from_monday() as usize]
    }
}

/// One active closure blackout, half-open `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosureSpan {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Snapshot of everything the validator needs for one location
#[derive(Debug, Clone, Default)]
pub struct LocationCalendar {
    pub hours: WeeklyHours,
    closures: Vec<ClosureSpan>,
}

impl LocationCalendar {
    pub fn new(hours_rows: &[OperatingHours], closure_rows: &[ClosureInterval]) -> Self {
        let closures = closure_rows
            .iter()
            .filter(|c| c.is_active && c.start_at < c.end_at)
            .map(|c| ClosureSpan {
                start: c.start_at,
                end: c.end_at,
            })
            .collect();
        Self {
            hours: WeeklyHours::from_rows(hours_rows),
            closures,
        }
    }

    /// True iff `open <= time-of-day <= close` for the weekday's active
    /// row. A weekday with no row accepts nothing.
    pub fn is_within_hours(&self, t: NaiveDateTime) -> bool {
        self.is_within_hours_graced(t, Duration::zero())
    }

    /// Hours check with a symmetric tolerance: up to `grace` before
    /// opening or after closing still passes. Used for overnight spans.
    pub fn is_within_hours_graced(&self, t: NaiveDateTime, grace: Duration) -> bool {
        let Some(span) = self.hours.span_for(t.date()) else {
            return false;
        };
        let tod = t.time().num_seconds_from_midnight() as i64;
        let open = span.open.num_seconds_from_midnight() as i64 - grace.num_seconds();
        let close = span.close.num_seconds_from_midnight() as i64 + grace.num_seconds();
        tod >= open && tod <= close
    }

    /// First active closure overlapping the half-open window `[start, end)`
    pub fn closure_overlapping(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Option<&ClosureSpan> {
        self.closures
            .iter()
            .find(|c| start < c.end && end > c.start)
    }

    /// True iff the instant lies inside some closure
    pub fn instant_in_closure(&self, t: NaiveDateTime) -> bool {
        self.closures.iter().any(|c| c.start <= t && t < c.end)
    }

    /// Closures touching the given calendar date
    pub fn closures_on(&self, date: NaiveDate) -> impl Iterator<Item = &ClosureSpan> {
        let day_start = date.and_hms_opt(0, 0, 0).unwrap();
        let day_end = day_start + Duration::days(1);
        self.closures
            .iter()
            .filter(move |c| c.start < day_end && c.end > day_start)
    }

    pub fn overnight_grace() -> Duration {
        Duration::minutes(OVERNIGHT_GRACE_MINUTES)
    }
}
