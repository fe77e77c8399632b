//! HTTP routes and error mapping

pub mod availability;
pub mod health;

use std::sync::Arc;

use agenda_domain::AgendaError;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::de::DeserializeOwned;

use crate::context::AppContext;

/// Build the application router.
pub fn router(context: Arc<AppContext>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/staff/{staff_id}/availability", get(availability::get_availability))
        .with_state(context)
}

/// Wrapper turning a domain error into an HTTP response.
///
/// The domain error serializes as `{"type": …, "message": …}` and becomes
/// the response body unchanged.
pub struct ApiError(pub AgendaError);

impl From<AgendaError> for ApiError {
    fn from(value: AgendaError) -> Self {
        ApiError(value)
    }
}

/// Query extractor whose rejection takes the same JSON error shape as every
/// other error: a malformed query string becomes an `InvalidInput` 400
/// instead of axum's plain-text default.
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError(AgendaError::InvalidInput(rejection.body_text()))),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AgendaError::NotFound(_) => StatusCode::NOT_FOUND,
            AgendaError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AgendaError::Auth(_) => StatusCode::UNAUTHORIZED,
            AgendaError::Network(_) => StatusCode::BAD_GATEWAY,
            AgendaError::Database(_) | AgendaError::Config(_) | AgendaError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(self.0)).into_response()
    }
}
