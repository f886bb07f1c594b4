use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::appointment::{
        AppointmentDto, AppointmentServiceDto, AppointmentStatusDto, CreateAppointmentDto,
        UpdateAppointmentDto,
    },
    server::{
        data::{
            appointment::AppointmentRepository, customer::CustomerRepository,
            staff::StaffRepository,
        },
        error::AppError,
        model::appointment::{InsertAppointmentParams, UpdateAppointmentFields},
        service::scheduling::BookingGuard,
    },
};

use entity::appointment::AppointmentStatus;

/// Bounded retry count for booking attempts that lose a lock race.
///
/// Deadlock victims re-run the whole attempt, duration resolution included,
/// since service data could have changed under the failed transaction.
const BOOKING_RETRY_ATTEMPTS: u32 = 3;

pub struct AppointmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an appointment after passing the double-booking guard.
    ///
    /// The guard evaluation, the appointment insert, and the per-service
    /// price snapshots all happen in one transaction; a rejected attempt
    /// writes nothing. Transient lock conflicts retry the whole attempt a
    /// bounded number of times.
    ///
    /// # Arguments
    /// - `business_id`: Tenant scope
    /// - `dto`: Appointment creation data
    ///
    /// # Returns
    /// - `Ok(AppointmentDto)`: The created appointment with enriched data
    /// - `Err(AppError::NotFound)`: Customer or staff missing/inactive
    /// - `Err(AppError::BookingConflict)`: Guard rejected the time slot
    /// - `Err(AppError::SchedulingErr)`: Invalid services or storage failure
    pub async fn create(
        &self,
        business_id: i32,
        dto: CreateAppointmentDto,
    ) -> Result<AppointmentDto, AppError> {
        CustomerRepository::new(self.db)
            .find_by_id(business_id, dto.customer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        StaffRepository::new(self.db)
            .find_active(business_id, dto.staff_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Staff not found or inactive".to_string()))?;

        let mut attempt = 1;
        loop {
            match self.try_create(business_id, &dto).await {
                Err(AppError::SchedulingErr(err))
                    if err.is_retryable() && attempt < BOOKING_RETRY_ATTEMPTS =>
                {
                    tracing::warn!(
                        "booking attempt {}/{} lost a lock race, retrying: {}",
                        attempt,
                        BOOKING_RETRY_ATTEMPTS,
                        err
                    );
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    async fn try_create(
        &self,
        business_id: i32,
        dto: &CreateAppointmentDto,
    ) -> Result<AppointmentDto, AppError> {
        let txn = self.db.begin().await?;

        // Errors from here on drop the transaction, which rolls it back.
        let decision = BookingGuard::new(&txn)
            .evaluate(
                business_id,
                dto.staff_id,
                dto.start_time,
                &dto.service_ids,
                None,
            )
            .await?;

        if !decision.accepted {
            txn.rollback().await?;
            return Err(AppError::BookingConflict {
                conflicts: decision.conflicts.len(),
            });
        }

        let appointment = AppointmentRepository::new(&txn)
            .create(
                InsertAppointmentParams {
                    business_id,
                    customer_id: dto.customer_id,
                    staff_id: dto.staff_id,
                    start_time: dto.start_time,
                    status: AppointmentStatus::Scheduled,
                    notes: dto.notes.clone(),
                    admin_note: normalize_note(dto.admin_note.as_deref()),
                    staff_note: normalize_note(dto.staff_note.as_deref()),
                    customer_note: normalize_note(dto.customer_note.as_deref()),
                },
                &decision.services,
            )
            .await?;

        txn.commit().await?;

        self.get(business_id, appointment.id).await?.ok_or_else(|| {
            AppError::InternalError("Failed to retrieve appointment after creation".to_string())
        })
    }

    /// Gets an appointment by ID with enriched data (customer/staff names,
    /// booked services with price snapshots)
    ///
    /// # Returns
    /// - `Ok(Some(AppointmentDto))`: The appointment with enriched data
    /// - `Ok(None)`: Appointment not found for this business
    /// - `Err(AppError)`: Database error
    pub async fn get(
        &self,
        business_id: i32,
        id: i32,
    ) -> Result<Option<AppointmentDto>, AppError> {
        let repository = AppointmentRepository::new(self.db);

        let Some(appointment) = repository.find_by_id(business_id, id).await? else {
            return Ok(None);
        };

        let customer = CustomerRepository::new(self.db)
            .find_by_id(business_id, appointment.customer_id)
            .await?;
        let staff = StaffRepository::new(self.db)
            .find_by_id(business_id, appointment.staff_id)
            .await?;

        let services = repository
            .services_with_catalog(appointment.id)
            .await?
            .into_iter()
            .filter_map(|(snapshot, catalog)| {
                catalog.map(|service| AppointmentServiceDto {
                    service_id: snapshot.service_id,
                    name: service.name,
                    duration_minutes: service.duration_minutes,
                    price: snapshot.price,
                })
            })
            .collect();

        Ok(Some(AppointmentDto {
            id: appointment.id,
            business_id: appointment.business_id,
            customer_id: appointment.customer_id,
            staff_id: appointment.staff_id,
            start_time: appointment.start_time,
            status: appointment.status.into(),
            notes: appointment.notes,
            admin_note: appointment.admin_note,
            staff_note: appointment.staff_note,
            customer_note: appointment.customer_note,
            customer_full_name: customer.map(|c| c.full_name),
            staff_full_name: staff.map(|s| s.full_name),
            services,
            created_at: appointment.created_at,
            updated_at: appointment.updated_at,
        }))
    }

    /// Updates an appointment, re-running the double-booking guard when the
    /// time, staff, or service selection changes.
    ///
    /// The appointment's own row is excluded from its conflict check, so
    /// re-saving an unchanged time is always accepted. Pure note or status
    /// edits skip the guard entirely. When `service_ids` is provided the
    /// service associations are replaced with fresh price snapshots.
    ///
    /// # Arguments
    /// - `business_id`: Tenant scope
    /// - `appointment_id`: Appointment to update
    /// - `dto`: Partial update data
    ///
    /// # Returns
    /// - `Ok(AppointmentDto)`: The updated appointment with enriched data
    /// - `Err(AppError::NotFound)`: Appointment, customer or staff missing
    /// - `Err(AppError::BookingConflict)`: Guard rejected the new time
    /// - `Err(AppError::SchedulingErr)`: Invalid services or storage failure
    pub async fn update(
        &self,
        business_id: i32,
        appointment_id: i32,
        dto: UpdateAppointmentDto,
    ) -> Result<AppointmentDto, AppError> {
        let mut attempt = 1;
        loop {
            match self.try_update(business_id, appointment_id, &dto).await {
                Err(AppError::SchedulingErr(err))
                    if err.is_retryable() && attempt < BOOKING_RETRY_ATTEMPTS =>
                {
                    tracing::warn!(
                        "update attempt {}/{} lost a lock race, retrying: {}",
                        attempt,
                        BOOKING_RETRY_ATTEMPTS,
                        err
                    );
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    async fn try_update(
        &self,
        business_id: i32,
        appointment_id: i32,
        dto: &UpdateAppointmentDto,
    ) -> Result<AppointmentDto, AppError> {
        let txn = self.db.begin().await?;
        let repository = AppointmentRepository::new(&txn);

        let existing = repository
            .find_by_id(business_id, appointment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))?;

        let customer_id = dto.customer_id.unwrap_or(existing.customer_id);
        let staff_id = dto.staff_id.unwrap_or(existing.staff_id);
        let start_time = dto.start_time.unwrap_or(existing.start_time);

        CustomerRepository::new(&txn)
            .find_by_id(business_id, customer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        StaffRepository::new(&txn)
            .find_active(business_id, staff_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Staff not found or inactive".to_string()))?;

        let service_ids = match &dto.service_ids {
            Some(ids) => ids.clone(),
            None => repository.service_ids(appointment_id).await?,
        };

        // Only a changed time, staff, or service selection can introduce a
        // new conflict; the appointment itself is excluded from the check.
        let mut validated_services = None;
        if dto.start_time.is_some() || dto.staff_id.is_some() || dto.service_ids.is_some() {
            let decision = BookingGuard::new(&txn)
                .evaluate(
                    business_id,
                    staff_id,
                    start_time,
                    &service_ids,
                    Some(appointment_id),
                )
                .await?;

            if !decision.accepted {
                txn.rollback().await?;
                return Err(AppError::BookingConflict {
                    conflicts: decision.conflicts.len(),
                });
            }

            validated_services = Some(decision.services);
        }

        repository
            .update(
                business_id,
                appointment_id,
                UpdateAppointmentFields {
                    customer_id: dto.customer_id,
                    staff_id: dto.staff_id,
                    start_time: dto.start_time,
                    status: dto.status.map(Into::into),
                    notes: dto.notes.clone(),
                    admin_note: dto
                        .admin_note
                        .as_deref()
                        .map(|note| normalize_note(Some(note))),
                    staff_note: dto
                        .staff_note
                        .as_deref()
                        .map(|note| normalize_note(Some(note))),
                    customer_note: dto
                        .customer_note
                        .as_deref()
                        .map(|note| normalize_note(Some(note))),
                },
            )
            .await?;

        if dto.service_ids.is_some() {
            if let Some(services) = &validated_services {
                repository
                    .replace_services(appointment_id, services)
                    .await?;
            }
        }

        txn.commit().await?;

        self.get(business_id, appointment_id).await?.ok_or_else(|| {
            AppError::InternalError("Failed to retrieve appointment after update".to_string())
        })
    }

    /// Updates only an appointment's status.
    ///
    /// Status transitions never move the appointment in time, so the guard
    /// is not consulted. Cancelling is what frees the calendar: cancelled
    /// appointments disappear from every overlap and lock computation.
    ///
    /// # Returns
    /// - `Ok(AppointmentDto)`: The updated appointment
    /// - `Err(AppError::NotFound)`: Appointment not found for this business
    /// - `Err(AppError)`: Database error
    pub async fn update_status(
        &self,
        business_id: i32,
        appointment_id: i32,
        status: AppointmentStatusDto,
    ) -> Result<AppointmentDto, AppError> {
        let repository = AppointmentRepository::new(self.db);

        repository
            .find_by_id(business_id, appointment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))?;

        repository
            .update(
                business_id,
                appointment_id,
                UpdateAppointmentFields {
                    status: Some(status.into()),
                    ..Default::default()
                },
            )
            .await?;

        self.get(business_id, appointment_id).await?.ok_or_else(|| {
            AppError::InternalError("Failed to retrieve appointment after update".to_string())
        })
    }
}

/// Collapses blank note input to NULL so empty strings never persist.
pub(crate) fn normalize_note(note: Option<&str>) -> Option<String> {
    note.and_then(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}
