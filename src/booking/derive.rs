//! Optimal-time derivation for date-only picks
//!
//! When the user picks a bare calendar date the picker needs a concrete
//! timestamp to show: today starts "now, rounded forward" but never
//! before opening; future dates start at that weekday's opening time.

use chrono::{NaiveDate, NaiveDateTime};

use super::{calendar::LocationCalendar, default_open_time, min_duration, quantize::ceil_snap};

/// Opening time for a date, falling back to the fixed default when the
/// weekday has no active row
fn open_time_for(cal: &LocationCalendar, date: NaiveDate) -> NaiveDateTime {
    let open = cal
        .hours
        .span_for(date)
        .map(|span| span.open)
        .unwrap_or_else(default_open_time);
    date.and_time(open)
}

/// Best concrete start for a date-only pick
pub fn derive_start(cal: &LocationCalendar, now: NaiveDateTime, date: NaiveDate) -> NaiveDateTime {
    let opening = open_time_for(cal, date);
    if date == now.date() {
        ceil_snap(now).max(opening)
    } else {
        opening
    }
}

/// Best concrete end for a date-only pick, given the chosen start
pub fn derive_end(
    cal: &LocationCalendar,
    now: NaiveDateTime,
    start: NaiveDateTime,
    date: NaiveDate,
) -> NaiveDateTime {
    if date == start.date() {
        let naive = start + min_duration();
        if date == now.date() {
            naive.max(ceil_snap(now))
        } else {
            naive
        }
    } else {
        // A later day: the booking end is treated as starting fresh at
        // that day's opening
        open_time_for(cal, date)
    }
}
