//! Port interfaces for availability resolution
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use agenda_domain::{Booking, Result, StaffMember};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Trait for reading bookings from the local scheduling store.
///
/// The local store is authoritative: failures here abort the whole
/// resolution call.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Find bookings for a staff member overlapping the given interval.
    async fn find_conflicts(
        &self,
        staff_id: &str,
        interval_start: DateTime<Utc>,
        interval_end: DateTime<Utc>,
    ) -> Result<Vec<Booking>>;
}

/// Trait for looking up staff members
#[async_trait]
pub trait StaffDirectory: Send + Sync {
    /// Look up a bookable staff member by id, returning `None` when unknown
    /// or not bookable.
    async fn find_staff(&self, staff_id: &str) -> Result<Option<StaffMember>>;
}

/// Trait for querying the external calendar for conflicts.
///
/// The external calendar is best-effort: callers treat any failure as
/// "no conflict" so external sync issues never block local bookings.
#[async_trait]
pub trait CalendarOracle: Send + Sync {
    /// Whether the calendar identified by `calendar_id` has any busy time
    /// within `[start, end)`.
    async fn has_conflict(
        &self,
        calendar_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<bool>;
}
