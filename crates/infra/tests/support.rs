//! Shared helpers for infra integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use agenda_domain::BookingStatus;
use agenda_infra::DbManager;
use chrono::{DateTime, Utc};
use rusqlite::params;
use tempfile::TempDir;

/// Temporary database wrapper that keeps the underlying file alive for the
/// duration of a test run.
pub struct TestDatabase {
    pub manager: Arc<DbManager>,
    _temp_dir: TempDir,
}

impl TestDatabase {
    /// Create a new temporary database with the full schema applied.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let db_path = temp_dir.path().join("test.db");

        let manager = DbManager::new(&db_path, 4).expect("db manager should be created");
        manager.run_migrations().expect("migrations should run");

        Self { manager: Arc::new(manager), _temp_dir: temp_dir }
    }

    /// Insert a staff member row.
    pub fn insert_staff(&self, id: &str, calendar_email: Option<&str>) {
        let conn = self.manager.get_connection().expect("connection available");
        conn.execute(
            "INSERT INTO staff (id, full_name, calendar_email, active, created_at)
             VALUES (?1, ?2, ?3, 1, ?4)",
            params![id, "Ana Souza", calendar_email, Utc::now().timestamp()],
        )
        .expect("staff insert should succeed");
    }

    /// Insert a staff member row flagged inactive.
    pub fn insert_inactive_staff(&self, id: &str) {
        let conn = self.manager.get_connection().expect("connection available");
        conn.execute(
            "INSERT INTO staff (id, full_name, calendar_email, active, created_at)
             VALUES (?1, ?2, NULL, 0, ?3)",
            params![id, "Ana Souza", Utc::now().timestamp()],
        )
        .expect("staff insert should succeed");
    }

    /// Insert a booking row.
    pub fn insert_booking(
        &self,
        id: &str,
        staff_id: &str,
        start: DateTime<Utc>,
        duration_minutes: i64,
        status: BookingStatus,
    ) {
        let conn = self.manager.get_connection().expect("connection available");
        conn.execute(
            "INSERT INTO bookings (id, staff_id, client_name, start_ts, duration_minutes, status, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                id,
                staff_id,
                "Client",
                start.timestamp(),
                duration_minutes,
                status.as_str(),
                Utc::now().timestamp()
            ],
        )
        .expect("booking insert should succeed");
    }
}

impl Default for TestDatabase {
    fn default() -> Self {
        Self::new()
    }
}
