use chrono::{DateTime, Utc};
use entity::appointment::AppointmentStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::appointment::{InsertAppointmentParams, UpdateAppointmentFields};

pub struct AppointmentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AppointmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new appointment with its per-service price snapshots
    ///
    /// # Arguments
    /// - `params`: Appointment row values
    /// - `services`: Validated catalog services; one snapshot row is written
    ///   per entry with the service's current price
    ///
    /// # Returns
    /// - `Ok(Model)`: The created appointment
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        params: InsertAppointmentParams,
        services: &[entity::service::Model],
    ) -> Result<entity::appointment::Model, DbErr> {
        let appointment = entity::appointment::ActiveModel {
            business_id: ActiveValue::Set(params.business_id),
            customer_id: ActiveValue::Set(params.customer_id),
            staff_id: ActiveValue::Set(params.staff_id),
            start_time: ActiveValue::Set(params.start_time),
            status: ActiveValue::Set(params.status),
            notes: ActiveValue::Set(params.notes),
            admin_note: ActiveValue::Set(params.admin_note),
            staff_note: ActiveValue::Set(params.staff_note),
            customer_note: ActiveValue::Set(params.customer_note),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for service in services {
            entity::appointment_service::ActiveModel {
                appointment_id: ActiveValue::Set(appointment.id),
                service_id: ActiveValue::Set(service.id),
                price: ActiveValue::Set(service.price),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(appointment)
    }

    /// Gets an appointment by ID, scoped to the business
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Appointment found and belongs to the business
    /// - `Ok(None)`: Appointment not found
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(
        &self,
        business_id: i32,
        id: i32,
    ) -> Result<Option<entity::appointment::Model>, DbErr> {
        entity::prelude::Appointment::find_by_id(id)
            .filter(entity::appointment::Column::BusinessId.eq(business_id))
            .one(self.db)
            .await
    }

    /// Fetches and row-locks the non-cancelled appointments whose start
    /// falls in `[window_start, window_end)` for one staff member.
    ///
    /// Rows are ordered by start time ascending before locking; like the
    /// day locks, a consistent order across symmetric concurrent queries
    /// avoids deadlocks. The locks are held until the enclosing transaction
    /// ends. `exclude_appointment_id` keeps an appointment being updated
    /// from conflicting with itself.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Locked candidates, start ascending
    /// - `Err(DbErr)`: Database error (including lock-wait timeout)
    pub async fn find_in_window_for_update(
        &self,
        business_id: i32,
        staff_id: i32,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
        exclude_appointment_id: Option<i32>,
    ) -> Result<Vec<entity::appointment::Model>, DbErr> {
        let mut query = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::BusinessId.eq(business_id))
            .filter(entity::appointment::Column::StaffId.eq(staff_id))
            .filter(entity::appointment::Column::StartTime.gte(window_start))
            .filter(entity::appointment::Column::StartTime.lt(window_end))
            .filter(entity::appointment::Column::Status.ne(AppointmentStatus::Cancelled));

        if let Some(exclude_id) = exclude_appointment_id {
            query = query.filter(entity::appointment::Column::Id.ne(exclude_id));
        }

        query
            .order_by_asc(entity::appointment::Column::StartTime)
            .lock_exclusive()
            .all(self.db)
            .await
    }

    /// Fetches the non-cancelled appointments in `[from, to)` for one staff
    /// member, without locking.
    ///
    /// Read-only variant used by availability slot generation.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Appointments, start ascending
    /// - `Err(DbErr)`: Database error
    pub async fn find_in_range(
        &self,
        business_id: i32,
        staff_id: i32,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<entity::appointment::Model>, DbErr> {
        entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::BusinessId.eq(business_id))
            .filter(entity::appointment::Column::StaffId.eq(staff_id))
            .filter(entity::appointment::Column::StartTime.gte(from))
            .filter(entity::appointment::Column::StartTime.lt(to))
            .filter(entity::appointment::Column::Status.ne(AppointmentStatus::Cancelled))
            .order_by_asc(entity::appointment::Column::StartTime)
            .all(self.db)
            .await
    }

    /// Sums each appointment's occupied minutes from its service
    /// associations.
    ///
    /// Durations come from the referenced catalog rows (tenant-scoped, but
    /// deliberately *not* filtered by `is_active`: a booking keeps its
    /// length after the service is retired). Repeated associations count
    /// additively. Appointments with no associations resolve to 0.
    ///
    /// # Arguments
    /// - `business_id`: Tenant scope
    /// - `appointment_ids`: Appointments to sum durations for
    ///
    /// # Returns
    /// - `Ok(HashMap<appointment_id, total_minutes>)`
    /// - `Err(DbErr)`: Database error
    pub async fn total_durations(
        &self,
        business_id: i32,
        appointment_ids: &[i32],
    ) -> Result<HashMap<i32, i64>, DbErr> {
        if appointment_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let associations = entity::prelude::AppointmentService::find()
            .filter(
                entity::appointment_service::Column::AppointmentId
                    .is_in(appointment_ids.to_vec()),
            )
            .all(self.db)
            .await?;

        let mut service_ids: Vec<i32> = associations.iter().map(|a| a.service_id).collect();
        service_ids.sort_unstable();
        service_ids.dedup();

        let services = entity::prelude::Service::find()
            .filter(entity::service::Column::BusinessId.eq(business_id))
            .filter(entity::service::Column::Id.is_in(service_ids))
            .all(self.db)
            .await?;

        let duration_by_service: HashMap<i32, i64> = services
            .into_iter()
            .map(|s| (s.id, i64::from(s.duration_minutes)))
            .collect();

        let mut totals: HashMap<i32, i64> = HashMap::new();
        for association in associations {
            let duration = duration_by_service
                .get(&association.service_id)
                .copied()
                .unwrap_or(0);
            *totals.entry(association.appointment_id).or_insert(0) += duration;
        }

        Ok(totals)
    }

    /// Gets an appointment's service snapshots together with their catalog
    /// rows
    ///
    /// # Returns
    /// - `Ok(Vec<(snapshot, Option<catalog service>)>)`: One entry per
    ///   association; the catalog row is `None` if it was deleted
    /// - `Err(DbErr)`: Database error
    pub async fn services_with_catalog(
        &self,
        appointment_id: i32,
    ) -> Result<
        Vec<(
            entity::appointment_service::Model,
            Option<entity::service::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::AppointmentService::find()
            .filter(entity::appointment_service::Column::AppointmentId.eq(appointment_id))
            .find_also_related(entity::prelude::Service)
            .all(self.db)
            .await
    }

    /// Gets the service ids currently associated with an appointment
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)`: Service ids in association order
    /// - `Err(DbErr)`: Database error
    pub async fn service_ids(&self, appointment_id: i32) -> Result<Vec<i32>, DbErr> {
        Ok(entity::prelude::AppointmentService::find()
            .filter(entity::appointment_service::Column::AppointmentId.eq(appointment_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|association| association.service_id)
            .collect())
    }

    /// Applies a partial update to an appointment row
    ///
    /// # Arguments
    /// - `business_id`: Tenant scope
    /// - `id`: Appointment ID
    /// - `fields`: Field updates; `None` leaves a field untouched
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated appointment
    /// - `Err(DbErr)`: Database error, `RecordNotFound` if missing
    pub async fn update(
        &self,
        business_id: i32,
        id: i32,
        fields: UpdateAppointmentFields,
    ) -> Result<entity::appointment::Model, DbErr> {
        let appointment = self
            .find_by_id(business_id, id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Appointment {} not found", id)))?;

        let mut active_model: entity::appointment::ActiveModel = appointment.into();

        if let Some(customer_id) = fields.customer_id {
            active_model.customer_id = ActiveValue::Set(customer_id);
        }
        if let Some(staff_id) = fields.staff_id {
            active_model.staff_id = ActiveValue::Set(staff_id);
        }
        if let Some(start_time) = fields.start_time {
            active_model.start_time = ActiveValue::Set(start_time);
        }
        if let Some(status) = fields.status {
            active_model.status = ActiveValue::Set(status);
        }
        if let Some(notes) = fields.notes {
            active_model.notes = ActiveValue::Set(Some(notes));
        }
        if let Some(admin_note) = fields.admin_note {
            active_model.admin_note = ActiveValue::Set(admin_note);
        }
        if let Some(staff_note) = fields.staff_note {
            active_model.staff_note = ActiveValue::Set(staff_note);
        }
        if let Some(customer_note) = fields.customer_note {
            active_model.customer_note = ActiveValue::Set(customer_note);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Replaces an appointment's service associations with new snapshots.
    ///
    /// Deletes the existing association rows and writes one snapshot per
    /// given service with its current price.
    ///
    /// # Returns
    /// - `Ok(())`: Associations replaced
    /// - `Err(DbErr)`: Database error
    pub async fn replace_services(
        &self,
        appointment_id: i32,
        services: &[entity::service::Model],
    ) -> Result<(), DbErr> {
        entity::prelude::AppointmentService::delete_many()
            .filter(entity::appointment_service::Column::AppointmentId.eq(appointment_id))
            .exec(self.db)
            .await?;

        for service in services {
            entity::appointment_service::ActiveModel {
                appointment_id: ActiveValue::Set(appointment_id),
                service_id: ActiveValue::Set(service.id),
                price: ActiveValue::Set(service.price),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }
}
