//! # Agenda Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The availability resolver service
//! - Port/adapter interfaces (traits) for its collaborators
//!
//! ## Architecture Principles
//! - Only depends on `agenda-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod availability;

// Re-export specific items to avoid ambiguity
pub use availability::ports::{BookingRepository, CalendarOracle, StaffDirectory};
pub use availability::{AvailabilityRequest, AvailabilityService};
