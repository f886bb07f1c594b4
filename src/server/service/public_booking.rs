use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{appointment::AppointmentDto, public_booking::PublicBookingDto},
    server::{
        data::{
            appointment::AppointmentRepository, business::BusinessRepository,
            customer::CustomerRepository, staff::StaffRepository,
        },
        error::AppError,
        model::appointment::InsertAppointmentParams,
        service::{appointment::AppointmentService, scheduling::BookingGuard},
    },
};

use entity::appointment::AppointmentStatus;

const BOOKING_RETRY_ATTEMPTS: u32 = 3;

/// Booking flow for unauthenticated customers.
///
/// Runs the same double-booking guard as the staff-facing flow, but matches
/// or creates the customer by email inside the booking transaction and
/// books into the `pending` request state, which occupies the calendar
/// until it is confirmed or rejected.
pub struct PublicBookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PublicBookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending appointment from a public booking request.
    ///
    /// # Arguments
    /// - `business_id`: Tenant the booking targets
    /// - `dto`: Public booking payload
    ///
    /// # Returns
    /// - `Ok(AppointmentDto)`: The created pending appointment
    /// - `Err(AppError::NotFound)`: Business does not exist
    /// - `Err(AppError::BadRequest)`: Staff missing or inactive
    /// - `Err(AppError::BookingConflict)`: Guard rejected the time slot
    /// - `Err(AppError::SchedulingErr)`: Invalid services or storage failure
    pub async fn create(
        &self,
        business_id: i32,
        dto: PublicBookingDto,
    ) -> Result<AppointmentDto, AppError> {
        BusinessRepository::new(self.db)
            .find_by_id(business_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Business not found".to_string()))?;

        StaffRepository::new(self.db)
            .find_active(business_id, dto.staff_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Staff not found or inactive".to_string()))?;

        let mut attempt = 1;
        loop {
            match self.try_create(business_id, &dto).await {
                Err(AppError::SchedulingErr(err))
                    if err.is_retryable() && attempt < BOOKING_RETRY_ATTEMPTS =>
                {
                    tracing::warn!(
                        "public booking attempt {}/{} lost a lock race, retrying: {}",
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
        dto: &PublicBookingDto,
    ) -> Result<AppointmentDto, AppError> {
        let txn = self.db.begin().await?;

        // Customer creation joins the booking transaction so a rejected
        // attempt leaves no stray customer row.
        let customer = CustomerRepository::new(&txn)
            .find_or_create(
                business_id,
                dto.customer_name.clone(),
                dto.customer_email.trim().to_lowercase(),
                dto.customer_phone.clone(),
            )
            .await?;

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
                    customer_id: customer.id,
                    staff_id: dto.staff_id,
                    start_time: dto.start_time,
                    status: AppointmentStatus::Pending,
                    notes: dto.notes.clone(),
                    admin_note: None,
                    staff_note: None,
                    customer_note: None,
                },
                &decision.services,
            )
            .await?;

        txn.commit().await?;

        AppointmentService::new(self.db)
            .get(business_id, appointment.id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(
                    "Failed to retrieve appointment after creation".to_string(),
                )
            })
    }
}
