use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, availability::AvailableSlotsDto},
    server::{
        error::AppError, service::availability::AvailabilityService, state::AppState,
        util::time::parse_date,
    },
};

/// Tag for grouping availability endpoints in OpenAPI documentation
pub static AVAILABILITY_TAG: &str = "availability";

#[derive(Deserialize)]
pub struct SlotsParams {
    /// Calendar date in the business timezone (YYYY-MM-DD).
    pub date: String,
    /// Optional comma-separated service ids; when given, each slot's
    /// occupied length is the services' total duration.
    pub service_ids: Option<String>,
}

/// Get bookable slots for a staff member on a date.
///
/// Slots honor working hours, the configured buffer time, existing
/// bookings, and (for today's date) the current time in the business's
/// timezone. The walk steps by the configured slot length even when the
/// requested services run longer.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `business_id` / `staff_id` - Calendar owner
/// - `params` - Date and optional service selection
///
/// # Returns
/// - `200 OK` - Ordered slot list with slot duration and timezone
/// - `400 Bad Request` - Malformed date or invalid service selection
/// - `404 Not Found` - Staff missing or inactive
/// - `422 Unprocessable Entity` - Broken working-hours configuration
/// - `503 Service Unavailable` - Storage failure
#[utoipa::path(
    get,
    path = "/api/businesses/{business_id}/staff/{staff_id}/slots",
    tag = AVAILABILITY_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID"),
        ("staff_id" = i32, Path, description = "Staff ID"),
        ("date" = String, Query, description = "Calendar date (YYYY-MM-DD)"),
        ("service_ids" = Option<String>, Query, description = "Comma-separated service IDs")
    ),
    responses(
        (status = 200, description = "Successfully generated slots", body = AvailableSlotsDto),
        (status = 400, description = "Malformed date or invalid services", body = ErrorDto),
        (status = 404, description = "Staff not found", body = ErrorDto),
        (status = 422, description = "Invalid working hours", body = ErrorDto),
        (status = 503, description = "Storage unavailable", body = ErrorDto)
    ),
)]
pub async fn get_available_slots(
    State(state): State<AppState>,
    Path((business_id, staff_id)): Path<(i32, i32)>,
    Query(params): Query<SlotsParams>,
) -> Result<impl IntoResponse, AppError> {
    let date = parse_date(&params.date)?;

    let service_ids = params
        .service_ids
        .as_deref()
        .map(parse_service_ids)
        .transpose()?;

    let service = AvailabilityService::new(&state.db, state.default_time_zone);

    let slots = service
        .generate(business_id, staff_id, date, service_ids.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(slots)))
}

/// Parses a comma-separated id list ("1,2,3").
///
/// An explicitly supplied but empty parameter yields an empty list, which
/// the duration resolver rejects as an invalid service set rather than
/// silently falling back to the default slot length.
fn parse_service_ids(raw: &str) -> Result<Vec<i32>, AppError> {
    raw.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| {
            part.trim()
                .parse::<i32>()
                .map_err(|_| AppError::BadRequest(format!("Invalid service id: {}", part)))
        })
        .collect()
}
