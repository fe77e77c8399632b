//! # Agenda Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Database implementations (SQLite)
//! - External calendar integration (Google free/busy)
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `agenda-core`
//! - Depends on `agenda-domain` and `agenda-core`
//! - Contains all "impure" code (I/O, HTTP)

pub mod config;
pub mod database;
pub mod errors;
pub mod integrations;

// Re-export commonly used items
pub use database::{DbManager, SqliteBookingRepository, SqliteStaffDirectory};
pub use errors::InfraError;
pub use integrations::calendar::{DisabledCalendarOracle, GoogleFreeBusyClient};
