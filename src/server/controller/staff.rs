use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        staff::{CreateStaffDto, StaffDto, UpdateStaffDto},
    },
    server::{error::AppError, service::staff::StaffService, state::AppState},
};

/// Tag for grouping staff endpoints in OpenAPI documentation
pub static STAFF_TAG: &str = "staff";

/// Create a new staff member.
///
/// # Returns
/// - `201 Created` - Successfully created staff member
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/businesses/{business_id}/staff",
    tag = STAFF_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID")
    ),
    request_body = CreateStaffDto,
    responses(
        (status = 201, description = "Successfully created staff member", body = StaffDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_staff(
    State(state): State<AppState>,
    Path(business_id): Path<i32>,
    Json(payload): Json<CreateStaffDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StaffService::new(&state.db);

    let staff = service.create(business_id, payload).await?;

    Ok((StatusCode::CREATED, Json(staff)))
}

/// List a business's staff (active and inactive).
///
/// # Returns
/// - `200 OK` - Staff ordered by name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/businesses/{business_id}/staff",
    tag = STAFF_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved staff", body = Vec<StaffDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_staff(
    State(state): State<AppState>,
    Path(business_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = StaffService::new(&state.db);

    let staff = service.list(business_id).await?;

    Ok((StatusCode::OK, Json(staff)))
}

/// Get a staff member by ID.
///
/// # Returns
/// - `200 OK` - Staff member details
/// - `404 Not Found` - Staff member not found for this business
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/businesses/{business_id}/staff/{staff_id}",
    tag = STAFF_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID"),
        ("staff_id" = i32, Path, description = "Staff ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved staff member", body = StaffDto),
        (status = 404, description = "Staff member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_staff(
    State(state): State<AppState>,
    Path((business_id, staff_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let service = StaffService::new(&state.db);

    let staff = service
        .get(business_id, staff_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Staff not found".to_string()))?;

    Ok((StatusCode::OK, Json(staff)))
}

/// Update a staff member.
///
/// Deactivating a staff member stops new bookings without touching the
/// existing calendar.
///
/// # Returns
/// - `200 OK` - Successfully updated staff member
/// - `404 Not Found` - Staff member not found for this business
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/businesses/{business_id}/staff/{staff_id}",
    tag = STAFF_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID"),
        ("staff_id" = i32, Path, description = "Staff ID")
    ),
    request_body = UpdateStaffDto,
    responses(
        (status = 200, description = "Successfully updated staff member", body = StaffDto),
        (status = 404, description = "Staff member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_staff(
    State(state): State<AppState>,
    Path((business_id, staff_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateStaffDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StaffService::new(&state.db);

    let staff = service.update(business_id, staff_id, payload).await?;

    Ok((StatusCode::OK, Json(staff)))
}
