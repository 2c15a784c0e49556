//! 15-minute slot quantization
//!
//! Every timestamp entering or leaving the validator is snapped to the
//! slot grid. Floor-snap is used for user-chosen times (never pushes a
//! start later than intended); ceiling-snap for "now, rounded forward"
//! minimums (never lands in the past).

use chrono::{NaiveDateTime, Timelike};

use super::SLOT_MINUTES;

/// Truncate to the previous slot boundary, zeroing sub-minute fields
pub fn floor_snap(t: NaiveDateTime) -> NaiveDateTime {
    let minute = t.minute() - t.minute() % SLOT_MINUTES;
    t.with_minute(minute)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap()
}

/// Round up to the next slot boundary; aligned times are left unchanged
/// apart from zeroed sub-minute fields
pub fn ceil_snap(t: NaiveDateTime) -> NaiveDateTime {
    let floored = floor_snap(t);
    if floored == t {
        floored
    } else {
        floored + chrono::Duration::minutes(SLOT_MINUTES as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn floor_truncates_to_quarter_hour() {
        assert_eq!(floor_snap(dt(10, 14, 59)), dt(10, 0, 0));
        assert_eq!(floor_snap(dt(10, 29, 0)), dt(10, 15, 0));
        assert_eq!(floor_snap(dt(10, 45, 30)), dt(10, 45, 0));
    }

    #[test]
    fn floor_is_idempotent() {
        let snapped = floor_snap(dt(17, 52, 11));
        assert_eq!(floor_snap(snapped), snapped);
    }

    #[test]
    fn ceil_rounds_forward() {
        assert_eq!(ceil_snap(dt(10, 1, 0)), dt(10, 15, 0));
        assert_eq!(ceil_snap(dt(10, 46, 0)), dt(11, 0, 0));
    }

    #[test]
    fn ceil_keeps_aligned_times() {
        assert_eq!(ceil_snap(dt(10, 30, 0)), dt(10, 30, 0));
    }

    #[test]
    fn ceil_zeroes_seconds_on_aligned_minute() {
        assert_eq!(ceil_snap(dt(10, 30, 25)), dt(10, 45, 0));
    }

    #[test]
    fn ceil_is_idempotent() {
        let snapped = ceil_snap(dt(23, 59, 59));
        assert_eq!(ceil_snap(snapped), snapped);
    }

    #[test]
    fn ceil_crosses_midnight() {
        let next_day = NaiveDate::from_ymd_opt(2025, 6, 3)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(ceil_snap(dt(23, 50, 0)), next_day);
    }
}
