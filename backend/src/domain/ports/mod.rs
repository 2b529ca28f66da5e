//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports cover the identity provider and the four dashboard data
//! sources; the driving login port feeds the session cookie. Every port ships
//! a fixture implementation so the service runs without external systems.

mod macros;
pub(crate) use macros::define_port_error;

mod appointments_source;
mod availability_source;
mod dashboard_source_error;
mod earnings_source;
mod identity_resolver;
mod login_service;
mod payouts_source;

#[cfg(test)]
pub use appointments_source::MockAppointmentsSource;
pub use appointments_source::{AppointmentsSource, FixtureAppointmentsSource};
#[cfg(test)]
pub use availability_source::MockAvailabilitySource;
pub use availability_source::{AvailabilitySource, FixtureAvailabilitySource};
pub use dashboard_source_error::DashboardSourceError;
#[cfg(test)]
pub use earnings_source::MockEarningsSource;
pub use earnings_source::{EarningsSource, FixtureEarningsSource};
#[cfg(test)]
pub use identity_resolver::MockIdentityResolver;
pub use identity_resolver::{
    FIXTURE_PATIENT_ID, FIXTURE_PENDING_DOCTOR_ID, FIXTURE_VERIFIED_DOCTOR_ID,
    FixtureIdentityResolver, IdentityResolver, IdentityResolverError,
};
pub use login_service::{FIXTURE_PASSWORD, FixtureLoginService, LoginService};
#[cfg(test)]
pub use payouts_source::MockPayoutsSource;
pub use payouts_source::{FixturePayoutsSource, PayoutsSource};
