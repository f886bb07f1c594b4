use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, appointment::AppointmentDto, public_booking::PublicBookingDto},
    server::{error::AppError, service::public_booking::PublicBookingService, state::AppState},
};

/// Tag for grouping public booking endpoints in OpenAPI documentation
pub static PUBLIC_BOOKING_TAG: &str = "public-booking";

/// Create a booking as an unauthenticated customer.
///
/// Matches or creates the customer by email, runs the same double-booking
/// guard as the staff-facing flow, and books into the `pending` request
/// state, which occupies the staff calendar until confirmed or rejected.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `business_id` - Tenant the booking targets
/// - `payload` - Public booking data
///
/// # Returns
/// - `201 Created` - Pending appointment created
/// - `400 Bad Request` - Invalid staff or service selection
/// - `404 Not Found` - Business does not exist
/// - `409 Conflict` - Staff not available at the requested time
/// - `503 Service Unavailable` - Storage failure after retries
#[utoipa::path(
    post,
    path = "/api/public/businesses/{business_id}/bookings",
    tag = PUBLIC_BOOKING_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID")
    ),
    request_body = PublicBookingDto,
    responses(
        (status = 201, description = "Pending appointment created", body = AppointmentDto),
        (status = 400, description = "Invalid staff or service selection", body = ErrorDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 409, description = "Staff not available at the requested time", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn create_public_booking(
    State(state): State<AppState>,
    Path(business_id): Path<i32>,
    Json(payload): Json<PublicBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PublicBookingService::new(&state.db);

    let appointment = service.create(business_id, payload).await?;

    Ok((StatusCode::CREATED, Json(appointment)))
}
