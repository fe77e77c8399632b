//! Availability slot types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fixed-length candidate interval within business hours.
///
/// Slots are produced fresh on every resolution call and never persisted or
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub available: bool,
}
