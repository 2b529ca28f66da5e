//! Doctor dashboard use-case: authorise, then aggregate.

use tracing::info;

use super::{
    Aggregation, DashboardAggregator, RedirectTarget, RequestSession, Resolution, SessionResolver,
};

/// What the presentation layer should do with a dashboard request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardPage {
    /// Send the caller to another page; no data was loaded.
    Redirect(RedirectTarget),
    /// Render the dashboard.
    Dashboard(Aggregation),
}

/// Composes the [`SessionResolver`] and [`DashboardAggregator`].
#[derive(Clone)]
pub struct DoctorDashboardService {
    resolver: SessionResolver,
    aggregator: DashboardAggregator,
}

impl DoctorDashboardService {
    /// Create the service from its two collaborators.
    pub fn new(resolver: SessionResolver, aggregator: DashboardAggregator) -> Self {
        Self {
            resolver,
            aggregator,
        }
    }

    /// Resolve `session` and, for verified doctors only, load the dashboard.
    pub async fn render_dashboard(&self, session: &RequestSession) -> DashboardPage {
        match self.resolver.resolve(session).await {
            Resolution::RedirectTo(target) => DashboardPage::Redirect(target),
            Resolution::Authorized(caller) => {
                let aggregation = self.aggregator.run(caller.id()).await;
                info!(
                    caller_id = %caller.id(),
                    degraded = aggregation.outcome.is_degraded(),
                    "doctor dashboard assembled"
                );
                DashboardPage::Dashboard(aggregation)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::{
        FixtureAppointmentsSource, FixtureAvailabilitySource, FixtureEarningsSource,
        FixturePayoutsSource, MockAppointmentsSource, MockAvailabilitySource, MockEarningsSource,
        MockIdentityResolver, MockPayoutsSource,
    };
    use crate::domain::{
        AggregationOutcome, Caller, CallerId, DashboardSources, JoinPolicy, Role,
        VerificationStatus,
    };
    use rstest::rstest;

    fn identity_returning(caller: Option<Caller>) -> Arc<MockIdentityResolver> {
        let mut identity = MockIdentityResolver::new();
        identity
            .expect_current_caller()
            .times(1)
            .return_once(move |_| Ok(caller));
        Arc::new(identity)
    }

    /// Sources that fail the test if the aggregator ever calls them.
    fn untouchable_sources() -> DashboardSources {
        let mut appointments = MockAppointmentsSource::new();
        appointments.expect_doctor_appointments().never();
        let mut availability = MockAvailabilitySource::new();
        availability.expect_doctor_availability().never();
        let mut earnings = MockEarningsSource::new();
        earnings.expect_doctor_earnings().never();
        let mut payouts = MockPayoutsSource::new();
        payouts.expect_doctor_payouts().never();
        DashboardSources {
            appointments: Arc::new(appointments),
            availability: Arc::new(availability),
            earnings: Arc::new(earnings),
            payouts: Arc::new(payouts),
        }
    }

    fn fixture_sources() -> DashboardSources {
        DashboardSources {
            appointments: Arc::new(FixtureAppointmentsSource),
            availability: Arc::new(FixtureAvailabilitySource),
            earnings: Arc::new(FixtureEarningsSource),
            payouts: Arc::new(FixturePayoutsSource),
        }
    }

    fn service(caller: Option<Caller>, sources: DashboardSources) -> DoctorDashboardService {
        DoctorDashboardService::new(
            SessionResolver::new(identity_returning(caller)),
            DashboardAggregator::new(sources, JoinPolicy::AllOrNothing),
        )
    }

    fn caller(role: Role, status: Option<VerificationStatus>) -> Caller {
        Caller::new(CallerId::new("d1").expect("caller id"), role, status)
    }

    #[rstest]
    #[case(None, RedirectTarget::Onboarding)]
    #[case(Some(caller(Role::Patient, None)), RedirectTarget::Onboarding)]
    #[case(
        Some(caller(Role::Doctor, Some(VerificationStatus::Pending))),
        RedirectTarget::Verification
    )]
    #[tokio::test]
    async fn redirects_never_touch_data_sources(
        #[case] resolved: Option<Caller>,
        #[case] target: RedirectTarget,
    ) {
        let page = service(resolved, untouchable_sources())
            .render_dashboard(&RequestSession::anonymous())
            .await;
        assert_eq!(page, DashboardPage::Redirect(target));
    }

    #[rstest]
    #[tokio::test]
    async fn verified_doctor_gets_the_aggregated_dashboard() {
        let doctor = caller(Role::Doctor, Some(VerificationStatus::Verified));
        let session = RequestSession::signed_in(doctor.id().clone());

        let page = service(Some(doctor), fixture_sources())
            .render_dashboard(&session)
            .await;

        let DashboardPage::Dashboard(aggregation) = page else {
            panic!("expected the dashboard page");
        };
        assert_eq!(aggregation.outcome, AggregationOutcome::AllSucceeded);
        assert_eq!(aggregation.view_model.appointments().len(), 1);
        assert_eq!(aggregation.view_model.slots().len(), 1);
        assert!(!aggregation.view_model.earnings().is_empty());
        assert_eq!(aggregation.view_model.payouts().len(), 1);
    }
}
