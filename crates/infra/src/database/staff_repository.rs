//! SQLite-backed implementation of the StaffDirectory port.

use std::sync::Arc;

use agenda_core::StaffDirectory;
use agenda_domain::{Result, StaffMember};
use async_trait::async_trait;
use rusqlite::params;
use tracing::instrument;

use super::booking_repository::epoch_to_datetime;
use super::{map_sql_error, DbManager};

/// SQLite implementation of StaffDirectory
pub struct SqliteStaffDirectory {
    db: Arc<DbManager>,
}

impl SqliteStaffDirectory {
    /// Create a new staff directory
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StaffDirectory for SqliteStaffDirectory {
    #[instrument(skip(self))]
    async fn find_staff(&self, staff_id: &str) -> Result<Option<StaffMember>> {
        let conn = self.db.get_connection()?;

        // Inactive staff are not bookable, so they resolve as unknown.
        let result = conn.query_row(
            "SELECT id, full_name, calendar_email, active, created_at
             FROM staff
             WHERE id = ?1 AND active = 1",
            params![staff_id],
            |row| {
                Ok(StaffRow {
                    id: row.get(0)?,
                    full_name: row.get(1)?,
                    calendar_email: row.get(2)?,
                    active: row.get(3)?,
                    created_at: row.get(4)?,
                })
            },
        );

        match result {
            Ok(row) => Ok(Some(row.into_staff()?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(err) => Err(map_sql_error(err)),
        }
    }
}

struct StaffRow {
    id: String,
    full_name: String,
    calendar_email: Option<String>,
    active: bool,
    created_at: i64,
}

impl StaffRow {
    fn into_staff(self) -> Result<StaffMember> {
        Ok(StaffMember {
            id: self.id,
            full_name: self.full_name,
            calendar_email: self.calendar_email,
            active: self.active,
            created_at: epoch_to_datetime(self.created_at)?,
        })
    }
}
