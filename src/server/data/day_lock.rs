use chrono::NaiveDate;
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait, QuerySelect};

/// Repository over the synthetic per-(business, staff, day) lock rows.
///
/// Booking attempts serialize on these rows instead of on the appointment
/// rows themselves, because two concurrent first-bookings for an untouched
/// day have no appointment row to contend on: a plain "lock if exists"
/// would let both proceed past an empty read. The protocol is therefore
/// two-phase: idempotently upsert the marker, then take an exclusive row
/// lock on it, both in strictly ascending day order. Rows persist forever
/// and carry no business meaning.
pub struct StaffDayLockRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StaffDayLockRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upserts the marker row for one staff day.
    ///
    /// Insert-if-absent, no-op (and no error) if present: the composite
    /// primary key is the conflict target.
    ///
    /// # Returns
    /// - `Ok(())`: Row exists after the call
    /// - `Err(DbErr)`: Database error
    pub async fn touch(
        &self,
        business_id: i32,
        staff_id: i32,
        day: NaiveDate,
    ) -> Result<(), DbErr> {
        entity::prelude::StaffDayLock::insert(entity::staff_day_lock::ActiveModel {
            business_id: ActiveValue::Set(business_id),
            staff_id: ActiveValue::Set(staff_id),
            day: ActiveValue::Set(day),
        })
        .on_conflict(
            OnConflict::columns([
                entity::staff_day_lock::Column::BusinessId,
                entity::staff_day_lock::Column::StaffId,
                entity::staff_day_lock::Column::Day,
            ])
            .do_nothing()
            .to_owned(),
        )
        .do_nothing()
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Takes an exclusive row lock on one staff day's marker.
    ///
    /// The lock is held until the enclosing transaction commits or rolls
    /// back; a concurrent holder blocks this call until then.
    ///
    /// # Returns
    /// - `Ok(())`: Lock acquired
    /// - `Err(DbErr)`: Database error (including lock-wait timeout)
    pub async fn acquire(
        &self,
        business_id: i32,
        staff_id: i32,
        day: NaiveDate,
    ) -> Result<(), DbErr> {
        entity::prelude::StaffDayLock::find_by_id((business_id, staff_id, day))
            .lock_exclusive()
            .one(self.db)
            .await?;

        Ok(())
    }

    /// Locks every given day for the staff member, strictly ascending.
    ///
    /// Upserts all markers first, then acquires the locks, both passes in
    /// ascending day order regardless of the order days were derived in.
    /// Ascending order across concurrent transactions is what keeps the
    /// global lock order consistent and the protocol deadlock-free; it is a
    /// hard requirement, not an optimization.
    ///
    /// # Arguments
    /// - `business_id` / `staff_id`: Calendar owner
    /// - `days`: Calendar days the buffered interval spans (any order)
    ///
    /// # Returns
    /// - `Ok(())`: All days locked
    /// - `Err(DbErr)`: Database error
    pub async fn lock_days(
        &self,
        business_id: i32,
        staff_id: i32,
        days: &[NaiveDate],
    ) -> Result<(), DbErr> {
        let mut ordered: Vec<NaiveDate> = days.to_vec();
        ordered.sort();
        ordered.dedup();

        for day in &ordered {
            self.touch(business_id, staff_id, *day).await?;
        }

        for day in &ordered {
            self.acquire(business_id, staff_id, *day).await?;
        }

        Ok(())
    }
}
