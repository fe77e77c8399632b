//! # Agenda Domain
//!
//! Business domain types and models for the Agenda scheduling service.
//!
//! This crate contains:
//! - Domain data types (Booking, StaffMember, Slot)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants (business hours, timezone, slot geometry)
//!
//! ## Architecture
//! - No dependencies on other Agenda crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
