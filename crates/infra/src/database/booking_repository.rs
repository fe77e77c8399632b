//! SQLite-backed implementation of the BookingRepository port.

use std::sync::Arc;

use agenda_core::BookingRepository;
use agenda_domain::{AgendaError, Booking, BookingStatus, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::params;
use tracing::{debug, instrument};

use super::{map_sql_error, DbManager};

/// SQLite implementation of BookingRepository
pub struct SqliteBookingRepository {
    db: Arc<DbManager>,
}

impl SqliteBookingRepository {
    /// Create a new booking repository
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepository {
    #[instrument(skip(self))]
    async fn find_conflicts(
        &self,
        staff_id: &str,
        interval_start: DateTime<Utc>,
        interval_end: DateTime<Utc>,
    ) -> Result<Vec<Booking>> {
        let conn = self.db.get_connection()?;

        let start = interval_start.timestamp();
        let end = interval_end.timestamp();

        debug!(staff_id, start, end, "querying bookings overlapping interval");

        // Half-open overlap on epoch seconds; cancelled bookings are already
        // excluded at the query level.
        let mut stmt = conn
            .prepare(
                "SELECT id, staff_id, client_name, start_ts, duration_minutes, status, created_at
                 FROM bookings
                 WHERE staff_id = ?1
                   AND status != 'cancelled'
                   AND start_ts < ?3
                   AND start_ts + duration_minutes * 60 > ?2
                 ORDER BY start_ts",
            )
            .map_err(map_sql_error)?;

        let rows = stmt
            .query_map(params![staff_id, start, end], |row| {
                Ok(BookingRow {
                    id: row.get(0)?,
                    staff_id: row.get(1)?,
                    client_name: row.get(2)?,
                    start_ts: row.get(3)?,
                    duration_minutes: row.get(4)?,
                    status: row.get(5)?,
                    created_at: row.get(6)?,
                })
            })
            .map_err(map_sql_error)?;

        let mut bookings = Vec::new();
        for row in rows {
            bookings.push(row.map_err(map_sql_error)?.into_booking()?);
        }
        Ok(bookings)
    }
}

struct BookingRow {
    id: String,
    staff_id: String,
    client_name: Option<String>,
    start_ts: i64,
    duration_minutes: i64,
    status: String,
    created_at: i64,
}

impl BookingRow {
    fn into_booking(self) -> Result<Booking> {
        let status: BookingStatus = self.status.parse()?;
        Ok(Booking {
            id: self.id,
            staff_id: self.staff_id,
            client_name: self.client_name,
            start: epoch_to_datetime(self.start_ts)?,
            duration_minutes: self.duration_minutes,
            status,
            created_at: epoch_to_datetime(self.created_at)?,
        })
    }
}

pub(crate) fn epoch_to_datetime(ts: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
        .ok_or_else(|| AgendaError::Database(format!("timestamp out of range: {ts}")))
}
