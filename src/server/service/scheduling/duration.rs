//! Duration resolution for a requested set of services.

use sea_orm::ConnectionTrait;

use crate::server::{data::service::ServiceRepository, error::scheduling::SchedulingError};

/// Outcome of validating a service-id list against the tenant catalog.
pub struct ResolvedServices {
    /// Sum of the distinct services' durations, in minutes. Always > 0.
    pub total_duration_minutes: i64,
    /// The validated catalog rows, in first-occurrence order of the request.
    /// Downstream code snapshots prices from these.
    pub services: Vec<entity::service::Model>,
}

/// Resolves a service-id list into a total duration and validated catalog
/// rows.
///
/// Duplicates are removed preserving first occurrence, then the distinct
/// ids are fetched with tenant and active-flag filters. The distinct found
/// count must equal the distinct requested count; a mismatch means at least
/// one id is missing, inactive, or belongs to another tenant, and which of
/// those it is must not be distinguishable to the caller.
///
/// Runs on any connection handle, so the booking guard can resolve inside
/// its transaction while slot generation uses the shared pool. No side
/// effects.
///
/// # Arguments
/// - `db` - Connection or transaction handle
/// - `business_id` - Tenant scope
/// - `service_ids` - Requested services, possibly with duplicates
///
/// # Returns
/// - `Ok(ResolvedServices)` - Total minutes and validated rows
/// - `Err(SchedulingError::InvalidServiceSet)` - Empty list, unknown or
///   inactive or foreign-tenant id, or zero total duration
/// - `Err(SchedulingError::StorageUnavailable)` - Database failure
pub async fn resolve_services<C: ConnectionTrait>(
    db: &C,
    business_id: i32,
    service_ids: &[i32],
) -> Result<ResolvedServices, SchedulingError> {
    if service_ids.is_empty() {
        return Err(SchedulingError::InvalidServiceSet(
            "service_ids cannot be empty".to_string(),
        ));
    }

    // Dedup preserving first occurrence.
    let mut unique_ids: Vec<i32> = Vec::with_capacity(service_ids.len());
    for id in service_ids {
        if !unique_ids.contains(id) {
            unique_ids.push(*id);
        }
    }

    let found = ServiceRepository::new(db)
        .find_active_by_ids(business_id, &unique_ids)
        .await?;

    if found.len() != unique_ids.len() {
        return Err(SchedulingError::InvalidServiceSet(format!(
            "one or more services not found or inactive: expected {} distinct service(s), found {}",
            unique_ids.len(),
            found.len()
        )));
    }

    let total_duration_minutes: i64 = found
        .iter()
        .map(|service| i64::from(service.duration_minutes))
        .sum();

    if total_duration_minutes == 0 {
        return Err(SchedulingError::InvalidServiceSet(
            "total service duration cannot be zero".to_string(),
        ));
    }

    // Return rows in the order the caller asked for them.
    let services = unique_ids
        .iter()
        .filter_map(|id| found.iter().find(|service| service.id == *id).cloned())
        .collect();

    Ok(ResolvedServices {
        total_duration_minutes,
        services,
    })
}
