//! The scheduling engine.
//!
//! Everything that decides whether time on a staff member's calendar can be
//! occupied lives here:
//!
//! - [`interval`] - pure buffered-interval arithmetic shared by the guard
//!   and the slot generator, so both always agree on what "overlapping"
//!   means
//! - [`duration`] - tenant-safe resolution of a service-id list into a
//!   total duration and validated catalog rows
//! - [`guard`] - the transactional double-booking guard
//!
//! The availability slot generator (`server::service::availability`) builds
//! on the same interval and duration primitives.

pub mod duration;
pub mod guard;
pub mod interval;

pub use duration::{resolve_services, ResolvedServices};
pub use guard::{BookingDecision, BookingGuard, ConflictingAppointment};
pub use interval::{merge_sorted, Interval};
