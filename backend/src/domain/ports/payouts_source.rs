//! Port for the doctor's payout history.

use async_trait::async_trait;

use crate::domain::{CallerId, Payout, PayoutStatus, PayoutsPayload};

use super::DashboardSourceError;
use super::appointments_source::fixture_instant;

/// Read-only source of payouts requested by a doctor.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PayoutsSource: Send + Sync {
    /// Fetch the payout history for `doctor_id`.
    async fn doctor_payouts(
        &self,
        doctor_id: &CallerId,
    ) -> Result<PayoutsPayload, DashboardSourceError>;
}

/// Deterministic payouts used until a records service is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePayoutsSource;

#[async_trait]
impl PayoutsSource for FixturePayoutsSource {
    async fn doctor_payouts(
        &self,
        _doctor_id: &CallerId,
    ) -> Result<PayoutsPayload, DashboardSourceError> {
        Ok(PayoutsPayload {
            payouts: vec![Payout {
                id: "payout_fixture_1".to_owned(),
                credits: 4,
                amount_cents: 4_000,
                platform_fee_cents: 800,
                net_amount_cents: 3_200,
                status: PayoutStatus::Processed,
                created_at: fixture_instant(1_791_000_000)?,
                processed_at: Some(fixture_instant(1_791_086_400)?),
            }],
        })
    }
}
