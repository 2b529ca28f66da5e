//! Port for the doctor's earnings summary.

use async_trait::async_trait;

use crate::domain::{CallerId, EarningsPayload, EarningsSummary};

use super::DashboardSourceError;

/// Read-only source of earnings figures computed elsewhere.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EarningsSource: Send + Sync {
    /// Fetch the earnings summary for `doctor_id`.
    async fn doctor_earnings(
        &self,
        doctor_id: &CallerId,
    ) -> Result<EarningsPayload, DashboardSourceError>;
}

/// Deterministic earnings used until a records service is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEarningsSource;

#[async_trait]
impl EarningsSource for FixtureEarningsSource {
    async fn doctor_earnings(
        &self,
        _doctor_id: &CallerId,
    ) -> Result<EarningsPayload, DashboardSourceError> {
        Ok(EarningsPayload {
            earnings: EarningsSummary {
                total_earnings_cents: Some(64_000),
                this_month_earnings_cents: Some(16_000),
                completed_appointments: Some(8),
                average_earnings_per_month_cents: Some(21_333),
                available_credits: Some(4),
                available_payout_cents: Some(32_000),
            },
        })
    }
}
