//! In-memory port implementations for availability service tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration as StdDuration;

use agenda_core::{BookingRepository, CalendarOracle, StaffDirectory};
use agenda_domain::constants::BUSINESS_TIMEZONE;
use agenda_domain::{AgendaError, Booking, BookingStatus, Result as DomainResult, StaffMember};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Instant for `hour:minute` local business time on `date`.
pub fn local(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
    BUSINESS_TIMEZONE
        .from_local_datetime(&date.and_hms_opt(hour, minute, 0).expect("valid local time"))
        .single()
        .expect("unambiguous local time")
        .with_timezone(&Utc)
}

pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date")
}

pub fn booking(staff_id: &str, start: DateTime<Utc>, minutes: i64, status: BookingStatus) -> Booking {
    Booking {
        id: format!("bk-{}", start.timestamp()),
        staff_id: staff_id.to_string(),
        client_name: Some("Client".to_string()),
        start,
        duration_minutes: minutes,
        status,
        created_at: Utc::now(),
    }
}

pub fn staff_member(id: &str, calendar_email: Option<&str>) -> StaffMember {
    StaffMember {
        id: id.to_string(),
        full_name: "Ana Souza".to_string(),
        calendar_email: calendar_email.map(str::to_string),
        active: true,
        created_at: Utc::now(),
    }
}

/// In-memory mock for `BookingRepository`.
///
/// Returns every stored booking for the staff member that overlaps the
/// requested window, regardless of status - status filtering is the
/// service's responsibility.
#[derive(Default, Clone)]
pub struct MockBookingRepository {
    bookings: Arc<Mutex<Vec<Booking>>>,
    fail: Arc<AtomicBool>,
}

impl MockBookingRepository {
    pub fn new(bookings: Vec<Booking>) -> Self {
        Self { bookings: Arc::new(Mutex::new(bookings)), fail: Arc::new(AtomicBool::new(false)) }
    }

    /// Convenience helper for adding a single booking to the mock.
    pub fn with_booking(self, booking: Booking) -> Self {
        self.bookings.lock().unwrap().push(booking);
        self
    }

    /// Make every subsequent query fail with a database error.
    pub fn failing(self) -> Self {
        self.fail.store(true, Ordering::SeqCst);
        self
    }
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn find_conflicts(
        &self,
        staff_id: &str,
        interval_start: DateTime<Utc>,
        interval_end: DateTime<Utc>,
    ) -> DomainResult<Vec<Booking>> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AgendaError::Database("booking store unavailable".into()));
        }
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| {
                b.staff_id == staff_id && b.start < interval_end && b.end() > interval_start
            })
            .cloned()
            .collect())
    }
}

/// In-memory mock for `StaffDirectory`.
#[derive(Default, Clone)]
pub struct MockStaffDirectory {
    staff: Arc<Mutex<Vec<StaffMember>>>,
}

impl MockStaffDirectory {
    pub fn new(staff: Vec<StaffMember>) -> Self {
        Self { staff: Arc::new(Mutex::new(staff)) }
    }
}

#[async_trait]
impl StaffDirectory for MockStaffDirectory {
    async fn find_staff(&self, staff_id: &str) -> DomainResult<Option<StaffMember>> {
        Ok(self.staff.lock().unwrap().iter().find(|s| s.id == staff_id).cloned())
    }
}

/// Behaviour of the mock oracle for each lookup.
#[derive(Clone, Copy)]
pub enum OracleMode {
    /// Answer from the seeded busy intervals.
    Normal,
    /// Fail every lookup with a network error.
    Fail,
    /// Never answer; forces the caller's timeout path.
    Hang,
}

/// In-memory mock for `CalendarOracle` with seeded busy intervals and a
/// lookup counter for short-circuit assertions.
#[derive(Clone)]
pub struct MockCalendarOracle {
    busy: Arc<Mutex<Vec<(DateTime<Utc>, DateTime<Utc>)>>>,
    mode: OracleMode,
    calls: Arc<AtomicUsize>,
}

impl MockCalendarOracle {
    pub fn new(mode: OracleMode) -> Self {
        Self { busy: Arc::new(Mutex::new(Vec::new())), mode, calls: Arc::new(AtomicUsize::new(0)) }
    }

    /// Convenience helper for adding a single busy interval to the mock.
    pub fn with_busy(self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.busy.lock().unwrap().push((start, end));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CalendarOracle for MockCalendarOracle {
    async fn has_conflict(
        &self,
        _calendar_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.mode {
            OracleMode::Normal => Ok(self
                .busy
                .lock()
                .unwrap()
                .iter()
                .any(|&(busy_start, busy_end)| busy_start < end && start < busy_end)),
            OracleMode::Fail => {
                Err(AgendaError::Network("calendar backend unreachable".into()))
            }
            OracleMode::Hang => {
                tokio::time::sleep(StdDuration::from_secs(30)).await;
                Ok(false)
            }
        }
    }
}
