//! Reqwest-backed doctor records adapter.
//!
//! This adapter owns transport details only: URL construction, timeout and
//! HTTP error mapping, and JSON decoding into the dashboard payloads.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::ports::{
    AppointmentsSource, AvailabilitySource, DashboardSourceError, EarningsSource, PayoutsSource,
};
use crate::domain::{
    AppointmentsPayload, AvailabilityPayload, CallerId, DashboardSource, EarningsPayload,
    PayoutsPayload, TRACE_ID_HEADER, TraceId,
};

const USER_AGENT: &str = concat!("doctor-dashboard/", env!("CARGO_PKG_VERSION"));

/// Records service adapter issuing `GET {base}/doctors/{id}/{resource}`.
///
/// One instance serves all four ports so they share a connection pool.
#[derive(Clone)]
pub struct DoctorRecordsHttpSource {
    client: Client,
    base_url: Url,
}

impl DoctorRecordsHttpSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, base_url })
    }

    fn endpoint(
        &self,
        doctor_id: &CallerId,
        source: DashboardSource,
    ) -> Result<Url, DashboardSourceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                DashboardSourceError::transport(format!(
                    "records base URL {} cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["doctors", doctor_id.as_ref(), source.as_str()]);
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        doctor_id: &CallerId,
        source: DashboardSource,
    ) -> Result<T, DashboardSourceError> {
        let url = self.endpoint(doctor_id, source)?;
        debug!(%source, %url, "fetching dashboard source");

        let mut request = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(trace_id) = TraceId::current() {
            request = request.header(TRACE_ID_HEADER, trace_id.to_string());
        }
        let response = request.send().await.map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        decode(source, body.as_ref())
    }
}

#[async_trait]
impl AppointmentsSource for DoctorRecordsHttpSource {
    async fn doctor_appointments(
        &self,
        doctor_id: &CallerId,
    ) -> Result<AppointmentsPayload, DashboardSourceError> {
        self.fetch(doctor_id, DashboardSource::Appointments).await
    }
}

#[async_trait]
impl AvailabilitySource for DoctorRecordsHttpSource {
    async fn doctor_availability(
        &self,
        doctor_id: &CallerId,
    ) -> Result<AvailabilityPayload, DashboardSourceError> {
        self.fetch(doctor_id, DashboardSource::Availability).await
    }
}

#[async_trait]
impl EarningsSource for DoctorRecordsHttpSource {
    async fn doctor_earnings(
        &self,
        doctor_id: &CallerId,
    ) -> Result<EarningsPayload, DashboardSourceError> {
        self.fetch(doctor_id, DashboardSource::Earnings).await
    }
}

#[async_trait]
impl PayoutsSource for DoctorRecordsHttpSource {
    async fn doctor_payouts(
        &self,
        doctor_id: &CallerId,
    ) -> Result<PayoutsPayload, DashboardSourceError> {
        self.fetch(doctor_id, DashboardSource::Payouts).await
    }
}

fn decode<T: DeserializeOwned>(
    source: DashboardSource,
    body: &[u8],
) -> Result<T, DashboardSourceError> {
    serde_json::from_slice(body).map_err(|error| {
        DashboardSourceError::decode(format!("invalid {source} payload: {error}"))
    })
}

fn map_transport_error(error: reqwest::Error) -> DashboardSourceError {
    if error.is_timeout() {
        DashboardSourceError::timeout(error.to_string())
    } else if error.is_decode() {
        DashboardSourceError::decode(error.to_string())
    } else {
        DashboardSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> DashboardSourceError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_owned()
    } else {
        preview
    };
    DashboardSourceError::status(status.as_u16(), message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
#[path = "http_source_tests.rs"]
mod tests;
