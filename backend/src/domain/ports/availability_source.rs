//! Port for the doctor's availability slots.

use async_trait::async_trait;

use crate::domain::{AvailabilityPayload, AvailabilitySlot, CallerId, SlotStatus};

use super::DashboardSourceError;
use super::appointments_source::fixture_instant;

/// Read-only source of the slots a doctor has opened for booking.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AvailabilitySource: Send + Sync {
    /// Fetch the availability slots published by `doctor_id`.
    async fn doctor_availability(
        &self,
        doctor_id: &CallerId,
    ) -> Result<AvailabilityPayload, DashboardSourceError>;
}

/// Deterministic availability used until a records service is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAvailabilitySource;

#[async_trait]
impl AvailabilitySource for FixtureAvailabilitySource {
    async fn doctor_availability(
        &self,
        _doctor_id: &CallerId,
    ) -> Result<AvailabilityPayload, DashboardSourceError> {
        Ok(AvailabilityPayload {
            slots: vec![AvailabilitySlot {
                id: "slot_fixture_1".to_owned(),
                start_time: fixture_instant(1_792_569_600)?,
                end_time: fixture_instant(1_792_598_400)?,
                status: SlotStatus::Available,
            }],
        })
    }
}
