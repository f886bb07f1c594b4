use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        service::{CreateServiceDto, ServiceDto, UpdateServiceDto},
    },
    server::{error::AppError, service::catalog::ServiceCatalogService, state::AppState},
};

/// Tag for grouping service-catalog endpoints in OpenAPI documentation
pub static SERVICE_TAG: &str = "service";

/// Create a new catalog service.
///
/// # Returns
/// - `201 Created` - Successfully created service
/// - `400 Bad Request` - Non-positive duration
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/businesses/{business_id}/services",
    tag = SERVICE_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID")
    ),
    request_body = CreateServiceDto,
    responses(
        (status = 201, description = "Successfully created service", body = ServiceDto),
        (status = 400, description = "Invalid service data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_service(
    State(state): State<AppState>,
    Path(business_id): Path<i32>,
    Json(payload): Json<CreateServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ServiceCatalogService::new(&state.db);

    let created = service.create(business_id, payload).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// List a business's services (active and inactive).
///
/// # Returns
/// - `200 OK` - Services ordered by name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/businesses/{business_id}/services",
    tag = SERVICE_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved services", body = Vec<ServiceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_services(
    State(state): State<AppState>,
    Path(business_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ServiceCatalogService::new(&state.db);

    let services = service.list(business_id).await?;

    Ok((StatusCode::OK, Json(services)))
}

/// Get a catalog service by ID.
///
/// # Returns
/// - `200 OK` - Service details
/// - `404 Not Found` - Service not found for this business
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/businesses/{business_id}/services/{service_id}",
    tag = SERVICE_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID"),
        ("service_id" = i32, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved service", body = ServiceDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_service(
    State(state): State<AppState>,
    Path((business_id, service_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let service = ServiceCatalogService::new(&state.db);

    let found = service
        .get(business_id, service_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;

    Ok((StatusCode::OK, Json(found)))
}

/// Update a catalog service.
///
/// Deactivate services via `is_active` instead of deleting them so
/// historical bookings keep their price and duration snapshots.
///
/// # Returns
/// - `200 OK` - Successfully updated service
/// - `400 Bad Request` - Non-positive duration
/// - `404 Not Found` - Service not found for this business
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/businesses/{business_id}/services/{service_id}",
    tag = SERVICE_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID"),
        ("service_id" = i32, Path, description = "Service ID")
    ),
    request_body = UpdateServiceDto,
    responses(
        (status = 200, description = "Successfully updated service", body = ServiceDto),
        (status = 400, description = "Invalid service data", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_service(
    State(state): State<AppState>,
    Path((business_id, service_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ServiceCatalogService::new(&state.db);

    let updated = service.update(business_id, service_id, payload).await?;

    Ok((StatusCode::OK, Json(updated)))
}
