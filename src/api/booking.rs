//! Booking picker endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::booking::{
        BookingAccepted, DerivedTime, EndTimeQuery, ExcludedDatesQuery, ExcludedDatesResponse,
        ExtendBookingRequest, SlotQuery, SlotsResponse, StartTimeQuery, ValidateBookingRequest,
    },
};

/// Validate a tentative booking window
#[utoipa::path(
    post,
    path = "/locations/{location}/booking/validate",
    tag = "booking",
    params(("location" = String, Path, description = "Location key")),
    request_body = ValidateBookingRequest,
    responses(
        (status = 200, description = "Window accepted", body = BookingAccepted),
        (status = 422, description = "Window rejected", body = crate::error::ErrorResponse)
    )
)]
pub async fn validate(
    State(state): State<crate::AppState>,
    Path(location): Path<String>,
    Json(req): Json<ValidateBookingRequest>,
) -> AppResult<Json<BookingAccepted>> {
    req.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let accepted = state.services.booking.validate(&location, &req).await?;
    Ok(Json(accepted))
}

/// Validate extending a confirmed booking
#[utoipa::path(
    post,
    path = "/locations/{location}/booking/validate-extension",
    tag = "booking",
    params(("location" = String, Path, description = "Location key")),
    request_body = ExtendBookingRequest,
    responses(
        (status = 200, description = "Extension accepted", body = BookingAccepted),
        (status = 422, description = "Extension rejected", body = crate::error::ErrorResponse)
    )
)]
pub async fn validate_extension(
    State(state): State<crate::AppState>,
    Path(location): Path<String>,
    Json(req): Json<ExtendBookingRequest>,
) -> AppResult<Json<BookingAccepted>> {
    req.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let accepted = state
        .services
        .booking
        .validate_extension(&location, &req)
        .await?;
    Ok(Json(accepted))
}

/// Best concrete start time for a date-only pick
#[utoipa::path(
    get,
    path = "/locations/{location}/booking/start-time",
    tag = "booking",
    params(
        ("location" = String, Path, description = "Location key"),
        StartTimeQuery
    ),
    responses(
        (status = 200, description = "Derived start time", body = DerivedTime)
    )
)]
pub async fn start_time(
    State(state): State<crate::AppState>,
    Path(location): Path<String>,
    Query(query): Query<StartTimeQuery>,
) -> AppResult<Json<DerivedTime>> {
    let time = state
        .services
        .booking
        .derive_start(&location, query.date)
        .await?;
    Ok(Json(DerivedTime { time }))
}

/// Best concrete end time for a date-only pick
#[utoipa::path(
    get,
    path = "/locations/{location}/booking/end-time",
    tag = "booking",
    params(
        ("location" = String, Path, description = "Location key"),
        EndTimeQuery
    ),
    responses(
        (status = 200, description = "Derived end time", body = DerivedTime)
    )
)]
pub async fn end_time(
    State(state): State<crate::AppState>,
    Path(location): Path<String>,
    Query(query): Query<EndTimeQuery>,
) -> AppResult<Json<DerivedTime>> {
    let time = state
        .services
        .booking
        .derive_end(&location, query.date, query.start)
        .await?;
    Ok(Json(DerivedTime { time }))
}

/// Pickable 15-minute slots of a date
#[utoipa::path(
    get,
    path = "/locations/{location}/booking/slots",
    tag = "booking",
    params(
        ("location" = String, Path, description = "Location key"),
        SlotQuery
    ),
    responses(
        (status = 200, description = "Remaining slots", body = SlotsResponse)
    )
)]
pub async fn slots(
    State(state): State<crate::AppState>,
    Path(location): Path<String>,
    Query(query): Query<SlotQuery>,
) -> AppResult<Json<SlotsResponse>> {
    let slots = state
        .services
        .booking
        .available_slots(&location, query.date, query.start)
        .await?;
    Ok(Json(SlotsResponse {
        date: query.date,
        slots,
    }))
}

/// Dates wholly covered by a closure
#[utoipa::path(
    get,
    path = "/locations/{location}/booking/excluded-dates",
    tag = "booking",
    params(
        ("location" = String, Path, description = "Location key"),
        ExcludedDatesQuery
    ),
    responses(
        (status = 200, description = "Fully closed dates", body = ExcludedDatesResponse)
    )
)]
pub async fn excluded_dates(
    State(state): State<crate::AppState>,
    Path(location): Path<String>,
    Query(query): Query<ExcludedDatesQuery>,
) -> AppResult<Json<ExcludedDatesResponse>> {
    if query.from > query.to {
        return Err(AppError::BadRequest(
            "from must not be after to".to_string(),
        ));
    }
    let dates = state
        .services
        .booking
        .excluded_dates(&location, query.from, query.to)
        .await?;
    Ok(Json(ExcludedDatesResponse { dates }))
}
