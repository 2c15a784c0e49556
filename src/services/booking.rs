//! Booking validation service
//!
//! Fetches an immutable hours/closures snapshot for a location and runs
//! the pure validator on it. Each request gets its own snapshot; nothing
//! is cached across requests.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::{
    booking::{availability, derive, validate_extension, validate_window, LocationCalendar},
    config::BookingConfig,
    error::AppResult,
    models::booking::{BookingAccepted, ExtendBookingRequest, ValidateBookingRequest},
    repository::Repository,
};

#[derive(Clone)]
pub struct BookingService {
    repository: Repository,
    config: BookingConfig,
}

impl BookingService {
    pub fn new(repository: Repository, config: BookingConfig) -> Self {
        Self { repository, config }
    }

    /// Location-local wall-clock time driving "today" and same-day
    /// minimums
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    /// Fetch the location's active hours and closures as one snapshot
    async fn calendar(&self, location: &str) -> AppResult<LocationCalendar> {
        let hours = self.repository.hours.list_active_hours(location).await?;
        let closures = self.repository.hours.list_active_closures(location).await?;
        Ok(LocationCalendar::new(&hours, &closures))
    }

    /// Validate a tentative booking window for checkout
    pub async fn validate(
        &self,
        location: &str,
        req: &ValidateBookingRequest,
    ) -> AppResult<BookingAccepted> {
        let cal = self.calendar(location).await?;
        let window = validate_window(&cal, req.start, req.end)?;
        tracing::debug!(
            location,
            start = %window.start,
            end = %window.end,
            "booking window accepted"
        );
        Ok(BookingAccepted::new(window, req.seats, &self.config.checkout_url))
    }

    /// Validate lengthening a confirmed booking
    pub async fn validate_extension(
        &self,
        location: &str,
        req: &ExtendBookingRequest,
    ) -> AppResult<BookingAccepted> {
        let cal = self.calendar(location).await?;
        let window = validate_extension(&cal, req.start, req.new_end)?;
        Ok(BookingAccepted::new(window, req.seats, &self.config.checkout_url))
    }

    /// Concrete start time for a date-only pick
    pub async fn derive_start(&self, location: &str, date: NaiveDate) -> AppResult<NaiveDateTime> {
        let cal = self.calendar(location).await?;
        Ok(derive::derive_start(&cal, self.now(), date))
    }

    /// Concrete end time for a date-only pick, given the chosen start
    pub async fn derive_end(
        &self,
        location: &str,
        date: NaiveDate,
        start: NaiveDateTime,
    ) -> AppResult<NaiveDateTime> {
        let cal = self.calendar(location).await?;
        Ok(derive::derive_end(&cal, self.now(), start, date))
    }

    /// Pickable slots of a date; `start` switches to end-candidate mode
    pub async fn available_slots(
        &self,
        location: &str,
        date: NaiveDate,
        start: Option<NaiveDateTime>,
    ) -> AppResult<Vec<NaiveTime>> {
        let cal = self.calendar(location).await?;
        Ok(availability::available_slots(&cal, self.now(), date, start))
    }

    /// Dates in `[from, to]` wholly covered by a closure
    pub async fn excluded_dates(
        &self,
        location: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<NaiveDate>> {
        let cal = self.calendar(location).await?;
        Ok(availability::excluded_dates(&cal, from, to))
    }
}
