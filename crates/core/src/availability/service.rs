//! Availability resolution service - core business logic

use std::sync::Arc;
use std::time::Duration as StdDuration;

use agenda_domain::constants::{
    BUSINESS_DAY_CLOSE_HOUR, BUSINESS_DAY_OPEN_HOUR, BUSINESS_TIMEZONE,
    CALENDAR_ORACLE_TIMEOUT_SECS, DEFAULT_SLOT_DURATION_MINUTES, SLOT_STRIDE_MINUTES,
};
use agenda_domain::{AgendaError, Booking, Result, Slot};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use futures::future::join_all;
use tracing::{debug, warn};

use super::ports::{BookingRepository, CalendarOracle, StaffDirectory};

/// Parameters for one availability resolution call
#[derive(Debug, Clone)]
pub struct AvailabilityRequest {
    pub staff_id: String,
    /// Calendar date, interpreted in the pinned business timezone.
    pub date: NaiveDate,
    pub duration_minutes: i64,
    /// External calendar identity override. When absent, the staff member's
    /// stored calendar email is used; when that is also absent no external
    /// check is performed.
    pub calendar_id: Option<String>,
}

impl AvailabilityRequest {
    /// Create a request with the default meeting duration.
    pub fn new(staff_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            staff_id: staff_id.into(),
            date,
            duration_minutes: DEFAULT_SLOT_DURATION_MINUTES,
            calendar_id: None,
        }
    }

    /// Override the meeting duration in minutes.
    pub fn with_duration(mut self, minutes: i64) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Override the external calendar identity.
    pub fn with_calendar_id(mut self, calendar_id: impl Into<String>) -> Self {
        self.calendar_id = Some(calendar_id.into());
        self
    }
}

/// Availability resolution service
pub struct AvailabilityService {
    bookings: Arc<dyn BookingRepository>,
    staff: Arc<dyn StaffDirectory>,
    oracle: Arc<dyn CalendarOracle>,
    oracle_timeout: StdDuration,
}

impl AvailabilityService {
    /// Create a new availability service
    pub fn new(
        bookings: Arc<dyn BookingRepository>,
        staff: Arc<dyn StaffDirectory>,
        oracle: Arc<dyn CalendarOracle>,
    ) -> Self {
        Self {
            bookings,
            staff,
            oracle,
            oracle_timeout: StdDuration::from_secs(CALENDAR_ORACLE_TIMEOUT_SECS),
        }
    }

    /// Bound each external oracle call by the given timeout.
    pub fn with_oracle_timeout(mut self, timeout: StdDuration) -> Self {
        self.oracle_timeout = timeout;
        self
    }

    /// Resolve the business-day slot sequence for a staff member.
    ///
    /// Returns slots ordered by start instant at a fixed 30-minute stride,
    /// each flagged available or occupied. Read-only: booking state is never
    /// mutated.
    ///
    /// # Errors
    /// - `InvalidInput` if the duration is not positive or the date has no
    ///   valid business-day bounds in the business timezone
    /// - `NotFound` if the staff member is unknown
    /// - `Database` if the local booking store fails; the local store is
    ///   authoritative, so availability cannot be assumed without it
    ///
    /// External oracle failures are never surfaced: each one is logged and
    /// the affected slot is reported available (fail-open).
    pub async fn resolve(&self, request: &AvailabilityRequest) -> Result<Vec<Slot>> {
        if request.duration_minutes <= 0 {
            return Err(AgendaError::InvalidInput(format!(
                "duration must be positive, got {} minutes",
                request.duration_minutes
            )));
        }
        let max_duration = i64::from(BUSINESS_DAY_CLOSE_HOUR - BUSINESS_DAY_OPEN_HOUR) * 60;
        if request.duration_minutes > max_duration {
            return Err(AgendaError::InvalidInput(format!(
                "duration must fit within the business day ({max_duration} minutes), got {} minutes",
                request.duration_minutes
            )));
        }

        let staff = self
            .staff
            .find_staff(&request.staff_id)
            .await?
            .ok_or_else(|| AgendaError::NotFound(format!("staff member {}", request.staff_id)))?;

        let (window_start, window_end) = business_window(request.date)?;
        let duration = Duration::minutes(request.duration_minutes);
        let stride = Duration::minutes(SLOT_STRIDE_MINUTES);

        // One window-wide read; per-slot overlap is resolved in memory.
        let bookings =
            self.bookings.find_conflicts(&request.staff_id, window_start, window_end).await?;
        let blocking: Vec<&Booking> =
            bookings.iter().filter(|b| b.status.blocks_availability()).collect();

        let calendar_id = request.calendar_id.as_deref().or(staff.calendar_email.as_deref());

        let mut candidates = Vec::new();
        let mut cursor = window_start;
        while cursor + duration <= window_end {
            candidates.push((cursor, cursor + duration));
            cursor = cursor + stride;
        }

        debug!(
            staff_id = %request.staff_id,
            date = %request.date,
            duration_minutes = request.duration_minutes,
            candidates = candidates.len(),
            local_bookings = blocking.len(),
            external_check = calendar_id.is_some(),
            "resolving availability"
        );

        // The oracle dominates latency, so slot checks fan out concurrently.
        // A slot already taken locally never reaches the oracle.
        let checks = candidates.into_iter().map(|(start, end)| {
            let locally_busy =
                blocking.iter().any(|b| intervals_overlap(b.start, b.end(), start, end));
            async move {
                if locally_busy {
                    return Slot { start, end, available: false };
                }
                let externally_busy = match calendar_id {
                    Some(id) => self.external_conflict(id, start, end).await,
                    None => false,
                };
                Slot { start, end, available: !externally_busy }
            }
        });

        Ok(join_all(checks).await)
    }

    /// Consult the external oracle for one slot, folding every failure into
    /// "no conflict" so external sync issues never block local bookings.
    async fn external_conflict(
        &self,
        calendar_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> bool {
        match tokio::time::timeout(
            self.oracle_timeout,
            self.oracle.has_conflict(calendar_id, start, end),
        )
        .await
        {
            Ok(Ok(busy)) => busy,
            Ok(Err(err)) => {
                warn!(calendar_id, %start, error = %err, "calendar oracle failed, slot treated as free");
                false
            }
            Err(_) => {
                warn!(calendar_id, %start, "calendar oracle timed out, slot treated as free");
                false
            }
        }
    }
}

/// Business-hours bounds for a date, as UTC instants.
fn business_window(date: NaiveDate) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    Ok((local_instant(date, BUSINESS_DAY_OPEN_HOUR)?, local_instant(date, BUSINESS_DAY_CLOSE_HOUR)?))
}

fn local_instant(date: NaiveDate, hour: u32) -> Result<DateTime<Utc>> {
    let time = NaiveTime::from_hms_opt(hour, 0, 0)
        .ok_or_else(|| AgendaError::Internal(format!("invalid business hour: {hour}")))?;
    BUSINESS_TIMEZONE
        .from_local_datetime(&date.and_time(time))
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| {
            AgendaError::InvalidInput(format!(
                "{date} {hour:02}:00 does not exist in {BUSINESS_TIMEZONE}"
            ))
        })
}

/// Half-open interval overlap: `[a_start, a_end)` intersects `[b_start, b_end)`.
fn intervals_overlap(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && b_start < a_end
}
