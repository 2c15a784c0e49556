//! HiveDesk Co-working Space Booking Server
//!
//! REST backend for the customer-facing booking front-end: per-location
//! operating-hours/closure configuration and the booking-slot validator
//! the picker UI drives.

use std::sync::Arc;

pub mod api;
pub mod booking;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
