use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        appointment::{
            create_appointment, get_appointment, update_appointment, update_appointment_status,
        },
        availability::get_available_slots,
        business::{create_business, get_business},
        catalog::{create_service, get_service, list_services, update_service},
        customer::{create_customer, get_customer, list_customers, update_customer},
        health::health,
        public_booking::create_public_booking,
        settings::{get_settings, update_settings},
        staff::{create_staff, get_staff, list_staff, update_staff},
    },
    doc::ApiDoc,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/businesses", post(create_business))
        .route("/api/businesses/{business_id}", get(get_business))
        .route(
            "/api/businesses/{business_id}/customers",
            post(create_customer).get(list_customers),
        )
        .route(
            "/api/businesses/{business_id}/customers/{customer_id}",
            get(get_customer).put(update_customer),
        )
        .route(
            "/api/businesses/{business_id}/services",
            post(create_service).get(list_services),
        )
        .route(
            "/api/businesses/{business_id}/services/{service_id}",
            get(get_service).put(update_service),
        )
        .route(
            "/api/businesses/{business_id}/staff",
            post(create_staff).get(list_staff),
        )
        .route(
            "/api/businesses/{business_id}/staff/{staff_id}",
            get(get_staff).put(update_staff),
        )
        .route(
            "/api/businesses/{business_id}/staff/{staff_id}/slots",
            get(get_available_slots),
        )
        .route(
            "/api/businesses/{business_id}/settings",
            get(get_settings).put(update_settings),
        )
        .route(
            "/api/businesses/{business_id}/appointments",
            post(create_appointment),
        )
        .route(
            "/api/businesses/{business_id}/appointments/{appointment_id}",
            get(get_appointment).put(update_appointment),
        )
        .route(
            "/api/businesses/{business_id}/appointments/{appointment_id}/status",
            put(update_appointment_status),
        )
        .route(
            "/api/public/businesses/{business_id}/bookings",
            post(create_public_booking),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
