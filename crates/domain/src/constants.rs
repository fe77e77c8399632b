//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

use chrono_tz::Tz;

/// Timezone every business-hours computation is anchored to.
///
/// Pinned explicitly so slot boundaries stay identical across deployment
/// environments regardless of the host machine's local time settings.
pub const BUSINESS_TIMEZONE: Tz = chrono_tz::America::Sao_Paulo;

// Business-day window (local time in BUSINESS_TIMEZONE)
pub const BUSINESS_DAY_OPEN_HOUR: u32 = 8;
pub const BUSINESS_DAY_CLOSE_HOUR: u32 = 17;

// Slot geometry
pub const SLOT_STRIDE_MINUTES: i64 = 30;
pub const DEFAULT_SLOT_DURATION_MINUTES: i64 = 60;

// External calendar oracle
pub const CALENDAR_ORACLE_TIMEOUT_SECS: u64 = 3;
