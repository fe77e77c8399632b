//! Availability endpoint

use std::sync::Arc;

use agenda_core::AvailabilityRequest;
use agenda_domain::Slot;
use axum::extract::{Path, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use super::{ApiError, ApiQuery};
use crate::context::AppContext;

/// Query parameters for an availability request
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    /// Calendar date (YYYY-MM-DD), interpreted in the business timezone
    pub date: NaiveDate,
    /// Meeting duration in minutes; defaults to the standard appointment length
    pub duration: Option<i64>,
    /// External calendar identity override
    pub calendar_id: Option<String>,
}

/// `GET /api/staff/{staff_id}/availability`
///
/// Returns the full business-day slot sequence for the staff member, each
/// slot flagged available or occupied.
pub async fn get_availability(
    State(context): State<Arc<AppContext>>,
    Path(staff_id): Path<String>,
    ApiQuery(query): ApiQuery<AvailabilityQuery>,
) -> Result<Json<Vec<Slot>>, ApiError> {
    let mut request = AvailabilityRequest::new(staff_id, query.date);
    if let Some(duration) = query.duration {
        request = request.with_duration(duration);
    }
    if let Some(calendar_id) = query.calendar_id {
        request = request.with_calendar_id(calendar_id);
    }

    let slots = context.availability.resolve(&request).await?;
    Ok(Json(slots))
}
