use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        appointment::{
            AppointmentDto, AppointmentStatusUpdateDto, CreateAppointmentDto,
            UpdateAppointmentDto,
        },
    },
    server::{error::AppError, service::appointment::AppointmentService, state::AppState},
};

/// Tag for grouping appointment endpoints in OpenAPI documentation
pub static APPOINTMENT_TAG: &str = "appointment";

/// Create a new appointment.
///
/// The booking runs through the double-booking guard inside a single
/// transaction: day locks are taken for every calendar day the buffered
/// interval touches, conflicting rows are locked and checked, and only an
/// accepted attempt writes the appointment and its price snapshots.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `business_id` - Tenant scope
/// - `payload` - Appointment creation data
///
/// # Returns
/// - `201 Created` - Successfully booked appointment
/// - `400 Bad Request` - Invalid service selection
/// - `404 Not Found` - Customer or staff missing/inactive
/// - `409 Conflict` - Staff not available at the requested time
/// - `503 Service Unavailable` - Storage failure after retries
#[utoipa::path(
    post,
    path = "/api/businesses/{business_id}/appointments",
    tag = APPOINTMENT_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID")
    ),
    request_body = CreateAppointmentDto,
    responses(
        (status = 201, description = "Successfully booked appointment", body = AppointmentDto),
        (status = 400, description = "Invalid service selection", body = ErrorDto),
        (status = 404, description = "Customer or staff not found", body = ErrorDto),
        (status = 409, description = "Staff not available at the requested time", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    Path(business_id): Path<i32>,
    Json(payload): Json<CreateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AppointmentService::new(&state.db);

    let appointment = service.create(business_id, payload).await?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

/// Get an appointment by ID.
///
/// # Returns
/// - `200 OK` - Appointment with customer/staff names and booked services
/// - `404 Not Found` - Appointment not found for this business
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/businesses/{business_id}/appointments/{appointment_id}",
    tag = APPOINTMENT_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID"),
        ("appointment_id" = i32, Path, description = "Appointment ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved appointment", body = AppointmentDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointment(
    State(state): State<AppState>,
    Path((business_id, appointment_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let service = AppointmentService::new(&state.db);

    let appointment = service
        .get(business_id, appointment_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))?;

    Ok((StatusCode::OK, Json(appointment)))
}

/// Update an appointment.
///
/// Changing the time, staff member, or service selection re-runs the
/// double-booking guard with this appointment excluded from its own
/// conflict check; pure note or status edits skip the guard.
///
/// # Returns
/// - `200 OK` - Successfully updated appointment
/// - `400 Bad Request` - Invalid service selection
/// - `404 Not Found` - Appointment, customer, or staff not found
/// - `409 Conflict` - Staff not available at the new time
/// - `503 Service Unavailable` - Storage failure after retries
#[utoipa::path(
    put,
    path = "/api/businesses/{business_id}/appointments/{appointment_id}",
    tag = APPOINTMENT_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID"),
        ("appointment_id" = i32, Path, description = "Appointment ID")
    ),
    request_body = UpdateAppointmentDto,
    responses(
        (status = 200, description = "Successfully updated appointment", body = AppointmentDto),
        (status = 400, description = "Invalid service selection", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 409, description = "Staff not available at the new time", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn update_appointment(
    State(state): State<AppState>,
    Path((business_id, appointment_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AppointmentService::new(&state.db);

    let appointment = service
        .update(business_id, appointment_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(appointment)))
}

/// Update only an appointment's status.
///
/// Cancelling frees the calendar; every other status keeps occupying it.
///
/// # Returns
/// - `200 OK` - Successfully updated status
/// - `404 Not Found` - Appointment not found for this business
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/businesses/{business_id}/appointments/{appointment_id}/status",
    tag = APPOINTMENT_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID"),
        ("appointment_id" = i32, Path, description = "Appointment ID")
    ),
    request_body = AppointmentStatusUpdateDto,
    responses(
        (status = 200, description = "Successfully updated status", body = AppointmentDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_appointment_status(
    State(state): State<AppState>,
    Path((business_id, appointment_id)): Path<(i32, i32)>,
    Json(payload): Json<AppointmentStatusUpdateDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AppointmentService::new(&state.db);

    let appointment = service
        .update_status(business_id, appointment_id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(appointment)))
}
