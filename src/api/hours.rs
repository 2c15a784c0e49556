//! Operating hours and closure configuration endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::hours::{
        ClosureInterval, ClosureQuery, CreateClosure, CreateOperatingHours, OperatingHours,
    },
};

// ---- Operating hours ----

/// List operating hours for a location
#[utoipa::path(
    get,
    path = "/locations/{location}/hours",
    tag = "hours",
    params(("location" = String, Path, description = "Location key")),
    responses(
        (status = 200, description = "Operating hours rows", body = Vec<OperatingHours>)
    )
)]
pub async fn list_hours(
    State(state): State<crate::AppState>,
    Path(location): Path<String>,
) -> AppResult<Json<Vec<OperatingHours>>> {
    let rows = state.services.hours.list_hours(&location).await?;
    Ok(Json(rows))
}

/// Create or replace the hours row for a weekday
#[utoipa::path(
    post,
    path = "/locations/{location}/hours",
    tag = "hours",
    params(("location" = String, Path, description = "Location key")),
    request_body = CreateOperatingHours,
    responses(
        (status = 201, description = "Hours row created", body = OperatingHours)
    )
)]
pub async fn upsert_hours(
    State(state): State<crate::AppState>,
    Path(location): Path<String>,
    Json(data): Json<CreateOperatingHours>,
) -> AppResult<(StatusCode, Json<OperatingHours>)> {
    let row = state.services.hours.upsert_hours(&location, &data).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// Delete an hours row
#[utoipa::path(
    delete,
    path = "/hours/{id}",
    tag = "hours",
    params(("id" = i32, Path, description = "Hours row ID")),
    responses(
        (status = 204, description = "Hours row deleted")
    )
)]
pub async fn delete_hours(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.hours.delete_hours(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---- Closures ----

/// List closures for a location
#[utoipa::path(
    get,
    path = "/locations/{location}/closures",
    tag = "hours",
    params(
        ("location" = String, Path, description = "Location key"),
        ClosureQuery
    ),
    responses(
        (status = 200, description = "Closure list", body = Vec<ClosureInterval>)
    )
)]
pub async fn list_closures(
    State(state): State<crate::AppState>,
    Path(location): Path<String>,
    Query(query): Query<ClosureQuery>,
) -> AppResult<Json<Vec<ClosureInterval>>> {
    let rows = state
        .services
        .hours
        .list_closures(&location, query.from, query.until)
        .await?;
    Ok(Json(rows))
}

/// Create a closure
#[utoipa::path(
    post,
    path = "/locations/{location}/closures",
    tag = "hours",
    params(("location" = String, Path, description = "Location key")),
    request_body = CreateClosure,
    responses(
        (status = 201, description = "Closure created", body = ClosureInterval)
    )
)]
pub async fn create_closure(
    State(state): State<crate::AppState>,
    Path(location): Path<String>,
    Json(data): Json<CreateClosure>,
) -> AppResult<(StatusCode, Json<ClosureInterval>)> {
    let row = state.services.hours.create_closure(&location, &data).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// Delete a closure
#[utoipa::path(
    delete,
    path = "/closures/{id}",
    tag = "hours",
    params(("id" = i32, Path, description = "Closure ID")),
    responses(
        (status = 204, description = "Closure deleted")
    )
)]
pub async fn delete_closure(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.hours.delete_closure(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
