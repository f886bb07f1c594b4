pub use super::appointment::Entity as Appointment;
pub use super::appointment_service::Entity as AppointmentService;
pub use super::business::Entity as Business;
pub use super::business_settings::Entity as BusinessSettings;
pub use super::customer::Entity as Customer;
pub use super::service::Entity as Service;
pub use super::staff::Entity as Staff;
pub use super::staff_day_lock::Entity as StaffDayLock;
