//! Google Calendar free/busy client

use std::time::Duration;

use agenda_core::CalendarOracle;
use agenda_domain::{AgendaError, CalendarConfig, Result};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::types::{FreeBusyItem, FreeBusyRequest, FreeBusyResponse};
use crate::errors::InfraError;

/// Calendar oracle backed by the Google Calendar free/busy endpoint
#[derive(Debug)]
pub struct GoogleFreeBusyClient {
    http: Client,
    api_base: String,
    access_token: String,
}

impl GoogleFreeBusyClient {
    /// Create a new client from the calendar configuration.
    ///
    /// The request timeout is set on the HTTP client itself, so a hung
    /// provider surfaces as a timeout error to the caller.
    pub fn new(config: &CalendarConfig) -> Result<Self> {
        let access_token = config.access_token.clone().ok_or_else(|| {
            AgendaError::Auth("calendar access token not configured".to_string())
        })?;

        Url::parse(&config.api_base)
            .map_err(|e| AgendaError::Config(format!("invalid calendar api_base: {e}")))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.max(1)))
            .build()
            .map_err(|e| AgendaError::from(InfraError::from(e)))?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            access_token,
        })
    }
}

#[async_trait]
impl CalendarOracle for GoogleFreeBusyClient {
    async fn has_conflict(
        &self,
        calendar_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<bool> {
        let url = format!("{}/freeBusy", self.api_base);
        let body = FreeBusyRequest {
            time_min: start.to_rfc3339_opts(SecondsFormat::Secs, true),
            time_max: end.to_rfc3339_opts(SecondsFormat::Secs, true),
            items: vec![FreeBusyItem { id: calendar_id.to_string() }],
        };

        debug!(calendar_id, %start, %end, "querying free/busy");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| AgendaError::from(InfraError::from(e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(InfraError(AgendaError::Network(format!(
                "free/busy request failed ({}): {}",
                status, error_text
            )))
            .into());
        }

        let parsed: FreeBusyResponse = response.json().await.map_err(|e| {
            InfraError(AgendaError::Network(format!("failed to parse free/busy response: {e}")))
        })?;

        let calendar = parsed.calendars.get(calendar_id).ok_or_else(|| {
            AgendaError::Network(format!("calendar {calendar_id} missing from free/busy response"))
        })?;

        if let Some(error) = calendar.errors.first() {
            return Err(AgendaError::Network(format!(
                "provider reported error for {calendar_id}: {}",
                error.reason
            )));
        }

        Ok(!calendar.busy.is_empty())
    }
}

/// Oracle used when the calendar integration is switched off.
///
/// Reports every interval as free, which matches the resolver's fail-open
/// stance: with no external source, only local bookings decide availability.
pub struct DisabledCalendarOracle;

#[async_trait]
impl CalendarOracle for DisabledCalendarOracle {
    async fn has_conflict(
        &self,
        _calendar_id: &str,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<bool> {
        Ok(false)
    }
}
