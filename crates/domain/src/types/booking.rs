//! Booking types
//!
//! A booking is an appointment a client holds with a staff member. Bookings
//! are written by the CRUD side of the application; the availability core
//! only ever reads them.

use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AgendaError;

/// Lifecycle status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Stable string representation used for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether a booking in this status occupies the staff member's time.
    ///
    /// Cancelled bookings never block availability.
    pub fn blocks_availability(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

impl FromStr for BookingStatus {
    type Err = AgendaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(AgendaError::InvalidInput(format!("unknown booking status: {other}"))),
        }
    }
}

/// An appointment held by a client with a staff member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub staff_id: String,
    pub client_name: Option<String>,
    pub start: DateTime<Utc>,
    pub duration_minutes: i64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Exclusive end instant of the booked interval.
    ///
    /// Saturates at the maximum representable instant when the stored
    /// duration is out of range, so a corrupt row blocks time rather than
    /// panicking.
    pub fn end(&self) -> DateTime<Utc> {
        Duration::try_minutes(self.duration_minutes)
            .and_then(|duration| self.start.checked_add_signed(duration))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}
