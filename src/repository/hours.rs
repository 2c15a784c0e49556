//! Operating hours and closures repository (per-location configuration store)

use chrono::{NaiveDateTime, NaiveTime};
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::hours::{ClosureInterval, CreateClosure, CreateOperatingHours, OperatingHours},
};

#[derive(Clone)]
pub struct HoursRepository {
    pool: Pool<Postgres>,
}

impl HoursRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    // ---- Operating hours ----

    /// List hours rows for a location, ordered by weekday
    pub async fn list_hours(&self, location: &str) -> AppResult<Vec<OperatingHours>> {
        let rows = sqlx::query_as::<_, OperatingHours>(
            "SELECT * FROM operating_hours WHERE location = $1 ORDER BY day_of_week",
        )
        .bind(location)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Active hours rows only, as the validator consumes them
    pub async fn list_active_hours(&self, location: &str) -> AppResult<Vec<OperatingHours>> {
        let rows = sqlx::query_as::<_, OperatingHours>(
            "SELECT * FROM operating_hours WHERE location = $1 AND is_active ORDER BY day_of_week",
        )
        .bind(location)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create or replace the hours row for a weekday. One row per
    /// (location, weekday) is kept via upsert.
    pub async fn upsert_hours(
        &self,
        location: &str,
        data: &CreateOperatingHours,
    ) -> AppResult<OperatingHours> {
        if !(0..=6).contains(&data.day_of_week) {
            return Err(AppError::Validation(
                "day_of_week must be between 0 and 6".to_string(),
            ));
        }
        let open = NaiveTime::parse_from_str(&data.open_time, "%H:%M")
            .map_err(|_| AppError::Validation("Invalid open_time (use HH:MM)".to_string()))?;
        let close = NaiveTime::parse_from_str(&data.close_time, "%H:%M")
            .map_err(|_| AppError::Validation("Invalid close_time (use HH:MM)".to_string()))?;
        if open >= close {
            return Err(AppError::Validation(
                "open_time must be before close_time".to_string(),
            ));
        }

        let row = sqlx::query_as::<_, OperatingHours>(
            r#"
            INSERT INTO operating_hours (location, day_of_week, open_time, close_time, is_active)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (location, day_of_week)
            DO UPDATE SET open_time = $3, close_time = $4, is_active = $5
            RETURNING *
            "#,
        )
        .bind(location)
        .bind(data.day_of_week)
        .bind(open)
        .bind(close)
        .bind(data.is_active)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete an hours row
    pub async fn delete_hours(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM operating_hours WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Hours row {} not found", id)));
        }
        Ok(())
    }

    // ---- Closures ----

    /// List closures for a location, optionally clipped to an interval
    pub async fn list_closures(
        &self,
        location: &str,
        from: Option<NaiveDateTime>,
        until: Option<NaiveDateTime>,
    ) -> AppResult<Vec<ClosureInterval>> {
        let mut conditions = vec!["location = $1".to_string()];
        let mut idx = 2;

        if from.is_some() {
            conditions.push(format!("end_at > ${}", idx));
            idx += 1;
        }
        if until.is_some() {
            conditions.push(format!("start_at < ${}", idx));
        }

        let query = format!(
            "SELECT * FROM closure_intervals WHERE {} ORDER BY start_at",
            conditions.join(" AND ")
        );

        let mut builder = sqlx::query_as::<_, ClosureInterval>(&query).bind(location);
        if let Some(f) = from {
            builder = builder.bind(f);
        }
        if let Some(u) = until {
            builder = builder.bind(u);
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Active closures only, as the validator consumes them
    pub async fn list_active_closures(&self, location: &str) -> AppResult<Vec<ClosureInterval>> {
        let rows = sqlx::query_as::<_, ClosureInterval>(
            "SELECT * FROM closure_intervals WHERE location = $1 AND is_active ORDER BY start_at",
        )
        .bind(location)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a closure
    pub async fn create_closure(
        &self,
        location: &str,
        data: &CreateClosure,
    ) -> AppResult<ClosureInterval> {
        if data.start_at >= data.end_at {
            return Err(AppError::Validation(
                "start_at must be before end_at".to_string(),
            ));
        }

        let row = sqlx::query_as::<_, ClosureInterval>(
            r#"
            INSERT INTO closure_intervals (location, start_at, end_at, reason, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(location)
        .bind(data.start_at)
        .bind(data.end_at)
        .bind(&data.reason)
        .bind(data.is_active)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete a closure
    pub async fn delete_closure(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM closure_intervals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Closure {} not found", id)));
        }
        Ok(())
    }
}
