//! Application context
//!
//! Single composition root: owns the database manager and the wired
//! availability service. Route handlers only ever see this context.

use std::sync::Arc;
use std::time::Duration;

use agenda_core::{AvailabilityService, CalendarOracle};
use agenda_domain::{Config, Result};
use agenda_infra::{
    DbManager, DisabledCalendarOracle, GoogleFreeBusyClient, SqliteBookingRepository,
    SqliteStaffDirectory,
};
use tracing::info;

/// Shared application state
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub availability: AvailabilityService,
}

impl AppContext {
    /// Wire the full dependency graph from configuration.
    ///
    /// Runs migrations so a fresh database is immediately usable.
    pub fn build(config: Config) -> Result<Self> {
        let db = Arc::new(DbManager::new(&config.database.path, config.database.pool_size)?);
        db.run_migrations()?;

        let bookings = Arc::new(SqliteBookingRepository::new(db.clone()));
        let staff = Arc::new(SqliteStaffDirectory::new(db.clone()));

        let oracle: Arc<dyn CalendarOracle> = if config.calendar.enabled {
            info!("external calendar check enabled");
            Arc::new(GoogleFreeBusyClient::new(&config.calendar)?)
        } else {
            info!("external calendar check disabled");
            Arc::new(DisabledCalendarOracle)
        };

        let availability = AvailabilityService::new(bookings, staff, oracle)
            .with_oracle_timeout(Duration::from_secs(config.calendar.timeout_seconds.max(1)));

        Ok(Self { config, db, availability })
    }
}
