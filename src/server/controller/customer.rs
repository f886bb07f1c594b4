use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        customer::{CreateCustomerDto, CustomerDto, UpdateCustomerDto},
    },
    server::{error::AppError, service::customer::CustomerService, state::AppState},
};

/// Tag for grouping customer endpoints in OpenAPI documentation
pub static CUSTOMER_TAG: &str = "customer";

/// Create a new customer for a business.
///
/// # Returns
/// - `201 Created` - Successfully created customer
/// - `400 Bad Request` - Email already in use for this business
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/businesses/{business_id}/customers",
    tag = CUSTOMER_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID")
    ),
    request_body = CreateCustomerDto,
    responses(
        (status = 201, description = "Successfully created customer", body = CustomerDto),
        (status = 400, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_customer(
    State(state): State<AppState>,
    Path(business_id): Path<i32>,
    Json(payload): Json<CreateCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CustomerService::new(&state.db);

    let customer = service.create(business_id, payload).await?;

    Ok((StatusCode::CREATED, Json(customer)))
}

/// List a business's customers.
///
/// # Returns
/// - `200 OK` - Customers ordered by name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/businesses/{business_id}/customers",
    tag = CUSTOMER_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved customers", body = Vec<CustomerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_customers(
    State(state): State<AppState>,
    Path(business_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CustomerService::new(&state.db);

    let customers = service.list(business_id).await?;

    Ok((StatusCode::OK, Json(customers)))
}

/// Get a customer by ID.
///
/// # Returns
/// - `200 OK` - Customer details
/// - `404 Not Found` - Customer not found for this business
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/businesses/{business_id}/customers/{customer_id}",
    tag = CUSTOMER_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID"),
        ("customer_id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved customer", body = CustomerDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path((business_id, customer_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let service = CustomerService::new(&state.db);

    let customer = service
        .get(business_id, customer_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

    Ok((StatusCode::OK, Json(customer)))
}

/// Update a customer's contact details.
///
/// # Returns
/// - `200 OK` - Successfully updated customer
/// - `404 Not Found` - Customer not found for this business
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/businesses/{business_id}/customers/{customer_id}",
    tag = CUSTOMER_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID"),
        ("customer_id" = i32, Path, description = "Customer ID")
    ),
    request_body = UpdateCustomerDto,
    responses(
        (status = 200, description = "Successfully updated customer", body = CustomerDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path((business_id, customer_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CustomerService::new(&state.db);

    let customer = service.update(business_id, customer_id, payload).await?;

    Ok((StatusCode::OK, Json(customer)))
}
