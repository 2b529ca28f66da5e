//! Dashboard runtime settings loaded via OrthoConfig.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use reqwest::Url;
use serde::Deserialize;

use doctor_dashboard::domain::{JoinPolicy, ParseJoinPolicyError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SOURCE_TIMEOUT_SECS: u64 = 10;

/// Errors raised when a configured value cannot be interpreted.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid DASHBOARD_BIND_ADDR '{value}': {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error(transparent)]
    JoinPolicy(#[from] ParseJoinPolicyError),
    #[error("invalid DASHBOARD_RECORDS_BASE_URL '{value}': {source}")]
    RecordsBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("DASHBOARD_SOURCE_TIMEOUT_SECS must be greater than zero")]
    ZeroTimeout,
}

/// Configuration values controlling the dashboard server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DASHBOARD")]
pub struct DashboardSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Join policy for the dashboard aggregator.
    pub join_policy: Option<String>,
    /// Base URL of the doctor records service; fixtures are used when unset.
    pub records_base_url: Option<String>,
    /// Per-request timeout for records service calls, in seconds.
    pub source_timeout_secs: Option<u64>,
}

impl DashboardSettings {
    /// Configured bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|source| SettingsError::BindAddr {
            value: raw.to_owned(),
            source,
        })
    }

    /// Configured join policy, falling back to all-or-nothing.
    pub fn join_policy(&self) -> Result<JoinPolicy, SettingsError> {
        match self.join_policy.as_deref() {
            Some(raw) => Ok(raw.parse()?),
            None => Ok(JoinPolicy::default()),
        }
    }

    /// Records service base URL, if one is configured.
    pub fn records_base_url(&self) -> Result<Option<Url>, SettingsError> {
        let Some(raw) = self.records_base_url.as_deref() else {
            return Ok(None);
        };
        Url::parse(raw)
            .map(Some)
            .map_err(|source| SettingsError::RecordsBaseUrl {
                value: raw.to_owned(),
                source,
            })
    }

    /// Timeout applied to each records service request.
    pub fn source_timeout(&self) -> Result<Duration, SettingsError> {
        match self.source_timeout_secs.unwrap_or(DEFAULT_SOURCE_TIMEOUT_SECS) {
            0 => Err(SettingsError::ZeroTimeout),
            secs => Ok(Duration::from_secs(secs)),
        }
    }
}
