//! Availability enumeration for the picker UI
//!
//! Two derived views: calendar dates wholly covered by a closure (the
//! picker greys them out), and the 15-minute slots of a single date that
//! remain pickable.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use super::{calendar::LocationCalendar, min_duration, SLOT_MINUTES};

const DAY_SECONDS: i64 = 24 * 3600;

/// True iff some active closure covers the date's entire operating span.
/// Without an hours row only a full 24-hour cover excludes the date.
pub fn is_date_fully_closed(cal: &LocationCalendar, date: NaiveDate) -> bool {
    let day_start = date.and_hms_opt(0, 0, 0).unwrap();
    let day_end = day_start + Duration::days(1);
    let span = cal.hours.span_for(date);

    cal.closures_on(date).any(|c| {
        // Closure clamped to this date, as seconds of day
        let from = if c.start <= day_start {
            0
        } else {
            c.start.time().num_seconds_from_midnight() as i64
        };
        let until = if c.end >= day_end {
            DAY_SECONDS
        } else {
            c.end.time().num_seconds_from_midnight() as i64
        };
        match span {
            Some(span) => {
                from <= span.open.num_seconds_from_midnight() as i64
                    && until >= span.close.num_seconds_from_midnight() as i64
            }
            None => from == 0 && until == DAY_SECONDS,
        }
    })
}

/// Fully closed dates within the inclusive range `[from, to]`
pub fn excluded_dates(cal: &LocationCalendar, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    from.iter_days()
        .take_while(|d| *d <= to)
        .filter(|d| is_date_fully_closed(cal, *d))
        .collect()
}

/// Pickable 15-minute slots of a date.
///
/// A slot survives when its time-of-day lies within `[open, close]`
/// (inclusive), it is not inside an active closure, it is strictly in
/// the future when the date is today, and — when enumerating end
/// candidates (`start` given) on the start's own date — it keeps the
/// one-hour minimum duration.
pub fn available_slots(
    cal: &LocationCalendar,
    now: NaiveDateTime,
    date: NaiveDate,
    start: Option<NaiveDateTime>,
) -> Vec<NaiveTime> {
    let Some(span) = cal.hours.span_for(date) else {
        return Vec::new();
    };
    let earliest_end = start
        .filter(|s| s.date() == date)
        .map(|s| s + min_duration());

    (0..24 * 60 / SLOT_MINUTES)
        .filter_map(|i| NaiveTime::from_num_seconds_from_midnight_opt(i * SLOT_MINUTES * 60, 0))
        .filter(|t| span.open <= *t && *t <= span.close)
        .filter(|t| {
            let at = date.and_time(*t);
            if cal.instant_in_closure(at) {
                return false;
            }
            if date == now.date() && at <= now {
                return false;
            }
            if let Some(earliest) = earliest_end {
                if at < earliest {
                    return false;
                }
            }
            true
        })
        .collect()
}
