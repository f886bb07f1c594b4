use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        business::{BusinessDto, CreateBusinessDto},
    },
    server::{error::AppError, service::business::BusinessService, state::AppState},
};

/// Tag for grouping business endpoints in OpenAPI documentation
pub static BUSINESS_TAG: &str = "business";

/// Create a new business (tenant bootstrap).
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Business creation data
///
/// # Returns
/// - `201 Created` - Successfully created business
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/businesses",
    tag = BUSINESS_TAG,
    request_body = CreateBusinessDto,
    responses(
        (status = 201, description = "Successfully created business", body = BusinessDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_business(
    State(state): State<AppState>,
    Json(payload): Json<CreateBusinessDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BusinessService::new(&state.db);

    let business = service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(business)))
}

/// Get a business by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `business_id` - Business ID to fetch
///
/// # Returns
/// - `200 OK` - Business details
/// - `404 Not Found` - Business not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/businesses/{business_id}",
    tag = BUSINESS_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved business", body = BusinessDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_business(
    State(state): State<AppState>,
    Path(business_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BusinessService::new(&state.db);

    let business = service
        .get(business_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Business not found".to_string()))?;

    Ok((StatusCode::OK, Json(business)))
}
