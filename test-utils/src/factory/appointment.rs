//! Appointment factory for creating test bookings.
//!
//! Appointments are only meaningful together with their service
//! associations (the summed service durations define the occupied length),
//! so the factory inserts the appointment row and one price-snapshot row
//! per attached service in a single call.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::appointment::AppointmentStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test appointments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::appointment::AppointmentFactory;
///
/// let appointment = AppointmentFactory::new(&db, business.id, customer.id, staff.id)
///     .start_time(start)
///     .services(&[service.clone()])
///     .status(AppointmentStatus::Scheduled)
///     .build()
///     .await?;
/// ```
pub struct AppointmentFactory<'a> {
    db: &'a DatabaseConnection,
    business_id: i32,
    customer_id: i32,
    staff_id: i32,
    start_time: DateTime<Utc>,
    status: AppointmentStatus,
    notes: Option<String>,
    services: Vec<entity::service::Model>,
}

impl<'a> AppointmentFactory<'a> {
    /// Creates a new AppointmentFactory with default values.
    ///
    /// Defaults:
    /// - start_time: 1 hour from now
    /// - status: `Scheduled`
    /// - notes: `Some("Test appointment {id}")`
    /// - services: empty (attach with `services()`)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entities
    /// - `business_id` - Business the appointment belongs to
    /// - `customer_id` - Customer being served
    /// - `staff_id` - Staff member whose calendar is occupied
    ///
    /// # Returns
    /// - `AppointmentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, business_id: i32, customer_id: i32, staff_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            business_id,
            customer_id,
            staff_id,
            start_time: Utc::now() + chrono::Duration::hours(1),
            status: AppointmentStatus::Scheduled,
            notes: Some(format!("Test appointment {}", id)),
            services: Vec::new(),
        }
    }

    /// Sets the appointment start time (UTC).
    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sets the appointment status.
    pub fn status(mut self, status: AppointmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the appointment notes.
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Attaches services to the appointment.
    ///
    /// One `appointment_service` row is created per entry, snapshotting each
    /// service's current price. Repeated entries are allowed and count
    /// additively toward the appointment's duration.
    pub fn services(mut self, services: &[entity::service::Model]) -> Self {
        self.services = services.to_vec();
        self
    }

    /// Builds and inserts the appointment and its service snapshots.
    ///
    /// # Returns
    /// - `Ok(entity::appointment::Model)` - Created appointment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::appointment::Model, DbErr> {
        let appointment = entity::appointment::ActiveModel {
            id: ActiveValue::NotSet,
            business_id: ActiveValue::Set(self.business_id),
            customer_id: ActiveValue::Set(self.customer_id),
            staff_id: ActiveValue::Set(self.staff_id),
            start_time: ActiveValue::Set(self.start_time),
            status: ActiveValue::Set(self.status),
            notes: ActiveValue::Set(self.notes),
            admin_note: ActiveValue::Set(None),
            staff_note: ActiveValue::Set(None),
            customer_note: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        for service in &self.services {
            entity::appointment_service::ActiveModel {
                id: ActiveValue::NotSet,
                appointment_id: ActiveValue::Set(appointment.id),
                service_id: ActiveValue::Set(service.id),
                price: ActiveValue::Set(service.price),
                created_at: ActiveValue::Set(Utc::now()),
            }
            .insert(self.db)
            .await?;
        }

        Ok(appointment)
    }
}

/// Creates a scheduled appointment at the given start time with the given services.
///
/// # Arguments
/// - `db` - Database connection
/// - `business_id` - Business the appointment belongs to
/// - `customer_id` - Customer being served
/// - `staff_id` - Staff member whose calendar is occupied
/// - `start_time` - Appointment start (UTC)
/// - `services` - Services to attach (duration source)
///
/// # Returns
/// - `Ok(entity::appointment::Model)` - Created appointment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_appointment(
    db: &DatabaseConnection,
    business_id: i32,
    customer_id: i32,
    staff_id: i32,
    start_time: DateTime<Utc>,
    services: &[entity::service::Model],
) -> Result<entity::appointment::Model, DbErr> {
    AppointmentFactory::new(db, business_id, customer_id, staff_id)
        .start_time(start_time)
        .services(services)
        .build()
        .await
}
