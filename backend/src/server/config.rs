//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use actix_web::cookie::{Key, SameSite};
use reqwest::Url;

use doctor_dashboard::domain::JoinPolicy;
use doctor_dashboard::inbound::http::session_config::SessionSettings;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

/// Location and timeout of the doctor records service.
#[derive(Debug, Clone)]
pub struct RecordsServiceConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) join_policy: JoinPolicy,
    pub(crate) records: Option<RecordsServiceConfig>,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Construct a server configuration from validated session settings.
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr) -> Self {
        let SessionSettings {
            key,
            cookie_secure,
            same_site,
        } = session;
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            join_policy: JoinPolicy::default(),
            records: None,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Choose how dashboard source failures are folded into the response.
    #[must_use]
    pub fn with_join_policy(mut self, policy: JoinPolicy) -> Self {
        self.join_policy = policy;
        self
    }

    /// Serve dashboard data from the records service instead of fixtures.
    #[must_use]
    pub fn with_records_service(mut self, records: Option<RecordsServiceConfig>) -> Self {
        self.records = records;
        self
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
