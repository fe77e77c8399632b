//! Wire types for the Google Calendar free/busy API.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Body of a `POST …/freeBusy` request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeBusyRequest {
    /// RFC 3339 lower bound of the queried interval
    pub time_min: String,
    /// RFC 3339 upper bound of the queried interval
    pub time_max: String,
    pub items: Vec<FreeBusyItem>,
}

/// One calendar to query
#[derive(Debug, Serialize)]
pub struct FreeBusyItem {
    pub id: String,
}

/// Free/busy response, keyed by calendar id
#[derive(Debug, Deserialize)]
pub struct FreeBusyResponse {
    #[serde(default)]
    pub calendars: HashMap<String, FreeBusyCalendar>,
}

/// Busy intervals and per-calendar errors for one queried calendar
#[derive(Debug, Default, Deserialize)]
pub struct FreeBusyCalendar {
    #[serde(default)]
    pub busy: Vec<BusyInterval>,
    #[serde(default)]
    pub errors: Vec<FreeBusyError>,
}

/// A busy interval reported by the provider
#[derive(Debug, Deserialize)]
pub struct BusyInterval {
    pub start: String,
    pub end: String,
}

/// Per-calendar error entry in a free/busy response
#[derive(Debug, Deserialize)]
pub struct FreeBusyError {
    pub domain: Option<String>,
    pub reason: String,
}
