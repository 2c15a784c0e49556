//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{booking, health, hours};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HiveDesk API",
        version = "0.3.0",
        description = "Co-working Space Booking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "HiveDesk Dev Team", email = "dev@hivedesk.io")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Hours configuration
        hours::list_hours,
        hours::upsert_hours,
        hours::delete_hours,
        hours::list_closures,
        hours::create_closure,
        hours::delete_closure,
        // Booking picker
        booking::validate,
        booking::validate_extension,
        booking::start_time,
        booking::end_time,
        booking::slots,
        booking::excluded_dates,
    ),
    components(
        schemas(
            // Hours
            crate::models::hours::OperatingHours,
            crate::models::hours::CreateOperatingHours,
            crate::models::hours::ClosureInterval,
            crate::models::hours::CreateClosure,
            // Booking
            crate::models::booking::ValidateBookingRequest,
            crate::models::booking::ExtendBookingRequest,
            crate::models::booking::BookingAccepted,
            crate::models::booking::DerivedTime,
            crate::models::booking::SlotsResponse,
            crate::models::booking::ExcludedDatesResponse,
            crate::booking::Window,
            crate::booking::RejectReason,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "hours", description = "Operating hours and closure configuration"),
        (name = "booking", description = "Booking-slot validation and availability")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
