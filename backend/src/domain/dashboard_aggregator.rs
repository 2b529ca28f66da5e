//! Concurrent fan-out over the four dashboard data sources.
//!
//! The aggregator issues all four reads at once, waits for every branch to
//! settle, and folds the results into a [`DashboardViewModel`] according to a
//! [`JoinPolicy`]. It is total: source failures are logged and replaced with
//! empty defaults, never returned.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use futures_util::future::join4;
use tracing::{error, warn};

use super::ports::{
    AppointmentsSource, AvailabilitySource, DashboardSourceError, EarningsSource, PayoutsSource,
};
use super::{CallerId, DashboardSource, DashboardViewModel};

/// How branch failures affect the joined result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JoinPolicy {
    /// Any failed branch discards every branch and yields the empty view.
    #[default]
    AllOrNothing,
    /// Each failed branch falls back to its own empty default.
    PerSource,
}

impl JoinPolicy {
    /// Configuration spelling of the policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllOrNothing => "all-or-nothing",
            Self::PerSource => "per-source",
        }
    }
}

impl fmt::Display for JoinPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a configured join policy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown join policy '{0}'; expected all-or-nothing|per-source")]
pub struct ParseJoinPolicyError(String);

impl FromStr for JoinPolicy {
    type Err = ParseJoinPolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all-or-nothing" | "all_or_nothing" => Ok(Self::AllOrNothing),
            "per-source" | "per_source" => Ok(Self::PerSource),
            _ => Err(ParseJoinPolicyError(value.to_owned())),
        }
    }
}

/// Terminal state of one aggregation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AggregationOutcome {
    /// Every source answered.
    AllSucceeded,
    /// At least one source failed; `failed` lists them in source order.
    AnyFailed {
        /// Sources that returned an error.
        failed: Vec<DashboardSource>,
    },
}

impl AggregationOutcome {
    /// Whether at least one source failed.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::AnyFailed { .. })
    }
}

/// View model plus the state it was produced in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregation {
    /// Whether every source answered.
    pub outcome: AggregationOutcome,
    /// Data to render; defaults stand in for failed sources.
    pub view_model: DashboardViewModel,
}

/// Parameter object bundling the four data-source ports.
#[derive(Clone)]
pub struct DashboardSources {
    /// Booked appointments.
    pub appointments: Arc<dyn AppointmentsSource>,
    /// Offered availability slots.
    pub availability: Arc<dyn AvailabilitySource>,
    /// Earnings summary.
    pub earnings: Arc<dyn EarningsSource>,
    /// Payout history.
    pub payouts: Arc<dyn PayoutsSource>,
}

/// Fans out to the data sources and joins their answers.
#[derive(Clone)]
pub struct DashboardAggregator {
    sources: DashboardSources,
    policy: JoinPolicy,
}

impl DashboardAggregator {
    /// Create an aggregator over `sources` using `policy`.
    #[must_use]
    pub const fn new(sources: DashboardSources, policy: JoinPolicy) -> Self {
        Self { sources, policy }
    }

    /// Configured join policy.
    #[must_use]
    pub const fn policy(&self) -> JoinPolicy {
        self.policy
    }

    /// Build the dashboard view model for `doctor_id`.
    ///
    /// The caller must already be an authorised doctor.
    pub async fn aggregate(&self, doctor_id: &CallerId) -> DashboardViewModel {
        self.run(doctor_id).await.view_model
    }

    /// Build the view model and report which terminal state was reached.
    pub async fn run(&self, doctor_id: &CallerId) -> Aggregation {
        let (appointments, availability, earnings, payouts) = join4(
            self.sources.appointments.doctor_appointments(doctor_id),
            self.sources.availability.doctor_availability(doctor_id),
            self.sources.earnings.doctor_earnings(doctor_id),
            self.sources.payouts.doctor_payouts(doctor_id),
        )
        .await;

        let mut failed = Vec::new();
        note_failure(&mut failed, DashboardSource::Appointments, &appointments, doctor_id);
        note_failure(&mut failed, DashboardSource::Availability, &availability, doctor_id);
        note_failure(&mut failed, DashboardSource::Earnings, &earnings, doctor_id);
        note_failure(&mut failed, DashboardSource::Payouts, &payouts, doctor_id);

        if failed.is_empty() {
            let view_model = DashboardViewModel::from_payloads(
                appointments.unwrap_or_default(),
                availability.unwrap_or_default(),
                earnings.unwrap_or_default(),
                payouts.unwrap_or_default(),
            );
            return Aggregation {
                outcome: AggregationOutcome::AllSucceeded,
                view_model,
            };
        }

        let labels: Vec<&str> = failed.iter().map(|source| source.as_str()).collect();
        error!(
            caller_id = %doctor_id,
            failed_sources = ?labels,
            policy = %self.policy,
            "dashboard aggregation degraded"
        );

        let view_model = match self.policy {
            JoinPolicy::AllOrNothing => DashboardViewModel::default(),
            JoinPolicy::PerSource => DashboardViewModel::from_payloads(
                appointments.unwrap_or_default(),
                availability.unwrap_or_default(),
                earnings.unwrap_or_default(),
                payouts.unwrap_or_default(),
            ),
        };
        Aggregation {
            outcome: AggregationOutcome::AnyFailed { failed },
            view_model,
        }
    }
}

fn note_failure<T>(
    failed: &mut Vec<DashboardSource>,
    source: DashboardSource,
    result: &Result<T, DashboardSourceError>,
    doctor_id: &CallerId,
) {
    if let Err(error) = result {
        warn!(caller_id = %doctor_id, source = %source, %error, "dashboard source failed");
        failed.push(source);
    }
}

#[cfg(test)]
#[path = "dashboard_aggregator_tests.rs"]
mod tests;
