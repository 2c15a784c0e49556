//! Business logic services

pub mod booking;
pub mod hours;

use crate::{config::BookingConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub hours: hours::HoursService,
    pub booking: booking::BookingService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, booking_config: BookingConfig) -> Self {
        Self {
            hours: hours::HoursService::new(repository.clone()),
            booking: booking::BookingService::new(repository, booking_config),
        }
    }
}
