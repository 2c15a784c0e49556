//! Operating hours and closures configuration service

use chrono::NaiveDateTime;

use crate::{
    error::AppResult,
    models::hours::{ClosureInterval, CreateClosure, CreateOperatingHours, OperatingHours},
    repository::Repository,
};

#[derive(Clone)]
pub struct HoursService {
    repository: Repository,
}

impl HoursService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // ---- Operating hours ----

    pub async fn list_hours(&self, location: &str) -> AppResult<Vec<OperatingHours>> {
        self.repository.hours.list_hours(location).await
    }

    pub async fn upsert_hours(
        &self,
        location: &str,
        data: &CreateOperatingHours,
    ) -> AppResult<OperatingHours> {
        self.repository.hours.upsert_hours(location, data).await
    }

    pub async fn delete_hours(&self, id: i32) -> AppResult<()> {
        self.repository.hours.delete_hours(id).await
    }

    // ---- Closures ----

    pub async fn list_closures(
        &self,
        location: &str,
        from: Option<NaiveDateTime>,
        until: Option<NaiveDateTime>,
    ) -> AppResult<Vec<ClosureInterval>> {
        self.repository.hours.list_closures(location, from, until).await
    }

    pub async fn create_closure(
        &self,
        location: &str,
        data: &CreateClosure,
    ) -> AppResult<ClosureInterval> {
        self.repository.hours.create_closure(location, data).await
    }

    pub async fn delete_closure(&self, id: i32) -> AppResult<()> {
        self.repository.hours.delete_closure(id).await
    }
}
