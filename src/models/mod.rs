//! Data models for HiveDesk

pub mod booking;
pub mod hours;

// Re-export commonly used types
pub use booking::{BookingAccepted, ExtendBookingRequest, ValidateBookingRequest};
pub use hours::{ClosureInterval, OperatingHours};
