//! Availability resolution
//!
//! Computes free/busy time slots across the business day for a staff member,
//! merging the local booking store with an external calendar oracle.

pub mod ports;
pub mod service;

pub use service::{AvailabilityRequest, AvailabilityService};
