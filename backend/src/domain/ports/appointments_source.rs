//! Port for the doctor's appointment list.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Appointment, AppointmentStatus, AppointmentsPayload, CallerId};

use super::DashboardSourceError;

/// Read-only source of a doctor's appointments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentsSource: Send + Sync {
    /// Fetch the appointments booked with `doctor_id`.
    async fn doctor_appointments(
        &self,
        doctor_id: &CallerId,
    ) -> Result<AppointmentsPayload, DashboardSourceError>;
}

/// Deterministic appointments used until a records service is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAppointmentsSource;

#[async_trait]
impl AppointmentsSource for FixtureAppointmentsSource {
    async fn doctor_appointments(
        &self,
        _doctor_id: &CallerId,
    ) -> Result<AppointmentsPayload, DashboardSourceError> {
        Ok(AppointmentsPayload {
            appointments: vec![Appointment {
                id: "appt_fixture_1".to_owned(),
                patient_id: "patient_demo".to_owned(),
                start_time: fixture_instant(1_792_573_200)?,
                end_time: fixture_instant(1_792_575_000)?,
                status: AppointmentStatus::Scheduled,
                notes: Some("Follow-up on blood pressure readings".to_owned()),
            }],
        })
    }
}

/// Convert a fixture Unix timestamp, surfacing bad constants as decode errors.
pub(crate) fn fixture_instant(seconds: i64) -> Result<DateTime<Utc>, DashboardSourceError> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| DashboardSourceError::decode(format!("invalid fixture timestamp {seconds}")))
}
