//! Health check endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use crate::context::AppContext;

/// Health check response body
#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// `GET /health` - verifies database connectivity.
pub async fn health(
    State(context): State<Arc<AppContext>>,
) -> Result<Json<HealthStatus>, ApiError> {
    context.db.health_check()?;
    Ok(Json(HealthStatus { status: "ok" }))
}
