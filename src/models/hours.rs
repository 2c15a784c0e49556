//! Operating hours and closure models (per-location configuration)

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

// ---------------------------------------------------------------------------
// OperatingHours
// ---------------------------------------------------------------------------

/// Weekly operating hours row: one active row per weekday per location
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct OperatingHours {
    pub id: i32,
    /// Location key (e.g. "shibuya")
    pub location: String,
    /// Day of week (0=Monday, 6=Sunday)
    pub day_of_week: i16,
    /// Opening time
    pub open_time: NaiveTime,
    /// Closing time
    pub close_time: NaiveTime,
    pub is_active: bool,
}

/// Create operating hours request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOperatingHours {
    /// Day of week (0=Monday, 6=Sunday)
    pub day_of_week: i16,
    /// Opening time (HH:MM)
    pub open_time: String,
    /// Closing time (HH:MM)
    pub close_time: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

// ---------------------------------------------------------------------------
// ClosureInterval
// ---------------------------------------------------------------------------

/// Maintenance/holiday blackout window, half-open `[start_at, end_at)`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ClosureInterval {
    pub id: i32,
    /// Location key
    pub location: String,
    /// Blackout start (location-local)
    pub start_at: NaiveDateTime,
    /// Blackout end, exclusive (location-local)
    pub end_at: NaiveDateTime,
    /// Reason for the closure
    pub reason: Option<String>,
    pub is_active: bool,
}

/// Create closure request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateClosure {
    /// Blackout start (YYYY-MM-DDTHH:MM:SS)
    pub start_at: NaiveDateTime,
    /// Blackout end, exclusive
    pub end_at: NaiveDateTime,
    pub reason: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Query parameters for listing closures
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ClosureQuery {
    /// Keep closures ending after this instant
    pub from: Option<NaiveDateTime>,
    /// Keep closures starting before this instant
    pub until: Option<NaiveDateTime>,
}

fn default_true() -> bool {
    true
}
