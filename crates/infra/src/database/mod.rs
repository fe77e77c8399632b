//! SQLite-backed implementations of the core persistence ports.

pub mod booking_repository;
pub mod manager;
pub mod staff_repository;

pub use booking_repository::SqliteBookingRepository;
pub use manager::{DbConnection, DbManager};
pub use staff_repository::SqliteStaffDirectory;

use agenda_domain::AgendaError;

use crate::errors::InfraError;

pub(crate) fn map_sql_error(err: rusqlite::Error) -> AgendaError {
    AgendaError::from(InfraError::from(err))
}

pub(crate) fn map_pool_error(err: r2d2::Error) -> AgendaError {
    AgendaError::from(InfraError::from(err))
}
