//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

use crate::domain::ports::{
    FixtureAppointmentsSource, FixtureAvailabilitySource, FixtureEarningsSource,
    FixtureIdentityResolver, FixtureLoginService, FixturePayoutsSource, IdentityResolver,
};
use crate::domain::{
    DashboardAggregator, DashboardSources, DoctorDashboardService, JoinPolicy, SessionResolver,
};
use crate::inbound::http::state::HttpState;

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Data sources answering with the fixture payloads.
pub fn fixture_sources() -> DashboardSources {
    DashboardSources {
        appointments: Arc::new(FixtureAppointmentsSource),
        availability: Arc::new(FixtureAvailabilitySource),
        earnings: Arc::new(FixtureEarningsSource),
        payouts: Arc::new(FixturePayoutsSource),
    }
}

/// Handler state built from the given identity port and sources.
pub fn state_with(
    identity: Arc<dyn IdentityResolver>,
    sources: DashboardSources,
    policy: JoinPolicy,
) -> HttpState {
    let dashboard = DoctorDashboardService::new(
        SessionResolver::new(identity),
        DashboardAggregator::new(sources, policy),
    );
    HttpState::new(Arc::new(FixtureLoginService), dashboard)
}

/// Handler state wired entirely to fixtures.
pub fn fixture_state() -> HttpState {
    state_with(
        Arc::new(FixtureIdentityResolver),
        fixture_sources(),
        JoinPolicy::AllOrNothing,
    )
}
