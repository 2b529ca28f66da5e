//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::DoctorDashboardService;
use crate::domain::ports::LoginService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub dashboard: DoctorDashboardService,
}

impl HttpState {
    /// Construct state from the login port and the dashboard use-case.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use doctor_dashboard::domain::ports::{
    ///     FixtureAppointmentsSource, FixtureAvailabilitySource, FixtureEarningsSource,
    ///     FixtureIdentityResolver, FixtureLoginService, FixturePayoutsSource,
    /// };
    /// use doctor_dashboard::domain::{
    ///     DashboardAggregator, DashboardSources, DoctorDashboardService, JoinPolicy,
    ///     SessionResolver,
    /// };
    /// use doctor_dashboard::inbound::http::state::HttpState;
    ///
    /// let sources = DashboardSources {
    ///     appointments: Arc::new(FixtureAppointmentsSource),
    ///     availability: Arc::new(FixtureAvailabilitySource),
    ///     earnings: Arc::new(FixtureEarningsSource),
    ///     payouts: Arc::new(FixturePayoutsSource),
    /// };
    /// let dashboard = DoctorDashboardService::new(
    ///     SessionResolver::new(Arc::new(FixtureIdentityResolver)),
    ///     DashboardAggregator::new(sources, JoinPolicy::AllOrNothing),
    /// );
    /// let state = HttpState::new(Arc::new(FixtureLoginService), dashboard);
    /// let _login = state.login.clone();
    /// ```
    pub fn new(login: Arc<dyn LoginService>, dashboard: DoctorDashboardService) -> Self {
        Self { login, dashboard }
    }
}
