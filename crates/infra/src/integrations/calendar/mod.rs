//! External calendar integration
//!
//! Implements the core `CalendarOracle` port against the Google Calendar
//! free/busy API. The oracle is consulted per candidate slot; callers apply
//! the fail-open policy, so implementations here report failures honestly
//! and never swallow them.

pub mod freebusy;
pub mod types;

pub use freebusy::{DisabledCalendarOracle, GoogleFreeBusyClient};
pub use types::{BusyInterval, FreeBusyRequest, FreeBusyResponse};
