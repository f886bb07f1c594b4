//! OpenAPI documentation aggregate served at `/docs`.

use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        appointment::{
            AppointmentDto, AppointmentServiceDto, AppointmentStatusDto,
            AppointmentStatusUpdateDto, CreateAppointmentDto, UpdateAppointmentDto,
        },
        availability::AvailableSlotsDto,
        business::{BusinessDto, CreateBusinessDto},
        customer::{CreateCustomerDto, CustomerDto, UpdateCustomerDto},
        public_booking::PublicBookingDto,
        service::{CreateServiceDto, ServiceDto, UpdateServiceDto},
        settings::{SettingsDto, UpdateSettingsDto},
        staff::{CreateStaffDto, StaffDto, UpdateStaffDto},
    },
    server::controller,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        controller::health::health,
        controller::business::create_business,
        controller::business::get_business,
        controller::customer::create_customer,
        controller::customer::list_customers,
        controller::customer::get_customer,
        controller::customer::update_customer,
        controller::catalog::create_service,
        controller::catalog::list_services,
        controller::catalog::get_service,
        controller::catalog::update_service,
        controller::staff::create_staff,
        controller::staff::list_staff,
        controller::staff::get_staff,
        controller::staff::update_staff,
        controller::settings::get_settings,
        controller::settings::update_settings,
        controller::availability::get_available_slots,
        controller::appointment::create_appointment,
        controller::appointment::get_appointment,
        controller::appointment::update_appointment,
        controller::appointment::update_appointment_status,
        controller::public_booking::create_public_booking,
    ),
    components(schemas(
        ErrorDto,
        BusinessDto,
        CreateBusinessDto,
        CustomerDto,
        CreateCustomerDto,
        UpdateCustomerDto,
        ServiceDto,
        CreateServiceDto,
        UpdateServiceDto,
        StaffDto,
        CreateStaffDto,
        UpdateStaffDto,
        SettingsDto,
        UpdateSettingsDto,
        AvailableSlotsDto,
        AppointmentDto,
        AppointmentServiceDto,
        AppointmentStatusDto,
        AppointmentStatusUpdateDto,
        CreateAppointmentDto,
        UpdateAppointmentDto,
        PublicBookingDto,
    ))
)]
pub struct ApiDoc;
