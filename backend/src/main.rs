//! Backend entry-point: loads configuration, wires adapters, and serves HTTP.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use doctor_dashboard::inbound::http::health::HealthState;
use doctor_dashboard::inbound::http::session_config::{BuildMode, session_settings_from_env};
#[cfg(feature = "metrics")]
use server::make_metrics;
use server::{DashboardSettings, RecordsServiceConfig, ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = DashboardSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;

    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let join_policy = settings.join_policy().map_err(std::io::Error::other)?;
    let records = match settings.records_base_url().map_err(std::io::Error::other)? {
        Some(base_url) => Some(RecordsServiceConfig {
            base_url,
            timeout: settings.source_timeout().map_err(std::io::Error::other)?,
        }),
        None => None,
    };

    let config = ServerConfig::new(session, bind_addr)
        .with_join_policy(join_policy)
        .with_records_service(records);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(make_metrics()?));

    info!(%bind_addr, %join_policy, "starting doctor dashboard");
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
