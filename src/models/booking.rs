//! Booking request/response types for the picker endpoints

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::booking::Window;

/// Validate a tentative booking window before checkout
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ValidateBookingRequest {
    /// Proposed start (location-local)
    pub start: NaiveDateTime,
    /// Proposed end (location-local)
    pub end: NaiveDateTime,
    /// Number of seats requested
    #[validate(range(min = 1, max = 50, message = "seats must be between 1 and 50"))]
    pub seats: u16,
}

/// Accepted booking window, quantized and ready for checkout handoff
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingAccepted {
    /// Accepted start, snapped to the 15-minute grid
    pub start: NaiveDateTime,
    /// Accepted end, snapped to the 15-minute grid
    pub end: NaiveDateTime,
    /// Whether the window spans two calendar dates
    pub overnight: bool,
    /// Booking-creation page URL carrying the accepted window and
    /// headcount as query parameters
    pub checkout_url: String,
}

impl BookingAccepted {
    pub fn new(window: Window, seats: u16, checkout_base: &str) -> Self {
        let checkout_url = format!(
            "{}?start={}&end={}&seats={}",
            checkout_base,
            window.start.format("%Y-%m-%dT%H:%M:%S"),
            window.end.format("%Y-%m-%dT%H:%M:%S"),
            seats,
        );
        Self {
            start: window.start,
            end: window.end,
            overnight: window.is_overnight(),
            checkout_url,
        }
    }
}

/// Extend a confirmed booking: `start` is fixed, only `new_end` moves
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ExtendBookingRequest {
    /// Original booking start (immutable)
    pub start: NaiveDateTime,
    /// Requested new end
    pub new_end: NaiveDateTime,
    #[validate(range(min = 1, max = 50, message = "seats must be between 1 and 50"))]
    pub seats: u16,
}

/// Query parameters for derived start times
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct StartTimeQuery {
    /// Picked calendar date (YYYY-MM-DD)
    pub date: NaiveDate,
}

/// Query parameters for derived end times
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct EndTimeQuery {
    /// Picked calendar date (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Already-chosen start
    pub start: NaiveDateTime,
}

/// Derived concrete time for a date-only pick
#[derive(Debug, Serialize, ToSchema)]
pub struct DerivedTime {
    pub time: NaiveDateTime,
}

/// Query parameters for slot enumeration
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct SlotQuery {
    /// Date to enumerate (YYYY-MM-DD)
    pub date: NaiveDate,
    /// When set, enumerate end candidates for this start
    pub start: Option<NaiveDateTime>,
}

/// Pickable slots of one date
#[derive(Debug, Serialize, ToSchema)]
pub struct SlotsResponse {
    pub date: NaiveDate,
    /// Remaining 15-minute boundaries, ascending
    pub slots: Vec<NaiveTime>,
}

/// Query parameters for excluded-date enumeration
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ExcludedDatesQuery {
    /// Range start (YYYY-MM-DD, inclusive)
    pub from: NaiveDate,
    /// Range end (YYYY-MM-DD, inclusive)
    pub to: NaiveDate,
}

/// Dates the picker should grey out entirely
#[derive(Debug, Serialize, ToSchema)]
pub struct ExcludedDatesResponse {
    pub dates: Vec<NaiveDate>,
}
