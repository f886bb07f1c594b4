use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        settings::{SettingsDto, UpdateSettingsDto},
    },
    server::{error::AppError, service::settings::SettingsService, state::AppState},
};

/// Tag for grouping settings endpoints in OpenAPI documentation
pub static SETTINGS_TAG: &str = "settings";

/// Get a business's scheduling settings.
///
/// The settings row is created with defaults (30 minute slots, 15 minute
/// buffer, 09:00-18:00 working hours, the configured default timezone) on
/// first read.
///
/// # Returns
/// - `200 OK` - Settings (existing or freshly defaulted)
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/businesses/{business_id}/settings",
    tag = SETTINGS_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved settings", body = SettingsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_settings(
    State(state): State<AppState>,
    Path(business_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = SettingsService::new(&state.db, state.default_time_zone);

    let settings = service.get(business_id).await?;

    Ok((StatusCode::OK, Json(settings)))
}

/// Update a business's scheduling settings.
///
/// # Returns
/// - `200 OK` - Successfully updated settings
/// - `400 Bad Request` - Unknown timezone or non-positive slot/buffer values
/// - `422 Unprocessable Entity` - Working hours end at or before start
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/businesses/{business_id}/settings",
    tag = SETTINGS_TAG,
    params(
        ("business_id" = i32, Path, description = "Business ID")
    ),
    request_body = UpdateSettingsDto,
    responses(
        (status = 200, description = "Successfully updated settings", body = SettingsDto),
        (status = 400, description = "Invalid settings data", body = ErrorDto),
        (status = 422, description = "Invalid working hours", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_settings(
    State(state): State<AppState>,
    Path(business_id): Path<i32>,
    Json(payload): Json<UpdateSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SettingsService::new(&state.db, state.default_time_zone);

    let settings = service.update(business_id, payload).await?;

    Ok((StatusCode::OK, Json(settings)))
}
