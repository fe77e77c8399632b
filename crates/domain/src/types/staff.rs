//! Staff member types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A staff member clients can book appointments with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub full_name: String,
    /// Identity used to query the staff member's external calendar.
    /// Absent means no external availability check is performed.
    pub calendar_email: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
