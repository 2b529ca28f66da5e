//! Builders wiring domain services to fixture or HTTP-backed ports.

use std::sync::Arc;

use doctor_dashboard::domain::ports::{
    FixtureAppointmentsSource, FixtureAvailabilitySource, FixtureEarningsSource,
    FixtureIdentityResolver, FixtureLoginService, FixturePayoutsSource,
};
use doctor_dashboard::domain::{
    DashboardAggregator, DashboardSources, DoctorDashboardService, SessionResolver,
};
use doctor_dashboard::inbound::http::state::HttpState;
use doctor_dashboard::outbound::records::DoctorRecordsHttpSource;
use tracing::{info, warn};

use super::ServerConfig;
use super::config::RecordsServiceConfig;

/// Data sources backed by the records service, or fixtures when none is set.
///
/// # Errors
/// Returns [`std::io::Error`] when the HTTP client cannot be constructed.
pub(crate) fn build_dashboard_sources(
    records: Option<&RecordsServiceConfig>,
) -> std::io::Result<DashboardSources> {
    let Some(records) = records else {
        warn!("DASHBOARD_RECORDS_BASE_URL not set; serving fixture dashboard data");
        return Ok(DashboardSources {
            appointments: Arc::new(FixtureAppointmentsSource),
            availability: Arc::new(FixtureAvailabilitySource),
            earnings: Arc::new(FixtureEarningsSource),
            payouts: Arc::new(FixturePayoutsSource),
        });
    };

    let source = DoctorRecordsHttpSource::new(records.base_url.clone(), records.timeout)
        .map_err(|error| std::io::Error::other(format!("records client setup failed: {error}")))?;
    info!(
        base_url = %records.base_url,
        timeout_secs = records.timeout.as_secs(),
        "dashboard data served by records service"
    );
    let source = Arc::new(source);
    Ok(DashboardSources {
        appointments: source.clone(),
        availability: source.clone(),
        earnings: source.clone(),
        payouts: source,
    })
}

/// Build the shared handler state from configuration.
///
/// # Errors
/// Propagates failures from [`build_dashboard_sources`].
pub(crate) fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    let sources = build_dashboard_sources(config.records.as_ref())?;
    let dashboard = DoctorDashboardService::new(
        SessionResolver::new(Arc::new(FixtureIdentityResolver)),
        DashboardAggregator::new(sources, config.join_policy),
    );
    Ok(HttpState::new(Arc::new(FixtureLoginService), dashboard))
}

#[cfg(test)]
mod tests {
    //! Coverage for state wiring choices.

    use super::*;
    use std::time::Duration;

    use doctor_dashboard::domain::CallerId;
    use doctor_dashboard::domain::ports::{AppointmentsSource as _, PayoutsSource as _};
    use reqwest::Url;
    use rstest::rstest;

    fn doctor() -> CallerId {
        CallerId::new("doctor_verified").expect("doctor id")
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_sources_are_used_without_a_records_service() {
        let sources = build_dashboard_sources(None).expect("fixture sources");
        let appointments = sources
            .appointments
            .doctor_appointments(&doctor())
            .await
            .expect("fixture appointments");
        assert!(!appointments.appointments.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn records_service_sources_report_transport_failures() {
        // Nothing listens on the discard port in the test environment.
        let records = RecordsServiceConfig {
            base_url: Url::parse("http://127.0.0.1:9/").expect("url"),
            timeout: Duration::from_secs(1),
        };
        let sources = build_dashboard_sources(Some(&records)).expect("http sources");
        let result = sources.payouts.doctor_payouts(&doctor()).await;
        assert!(result.is_err());
    }
}
