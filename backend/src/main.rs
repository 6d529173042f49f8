//! Job board entry-point: loads settings, migrates the database and serves
//! the page routes.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;

use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use jobboard::config::AppSettings;
use jobboard::inbound::http::session_config::{BuildMode, session_settings};
use jobboard::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use jobboard::server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        AppSettings::load_from_iter(env::args_os()).wrap_err("failed to load settings")?;
    let session = session_settings(settings.session_options(), BuildMode::from_debug_assertions())
        .wrap_err("failed to resolve session key")?;

    let database_url = settings.database_path().to_string_lossy().into_owned();
    run_migrations(&database_url)
        .await
        .wrap_err_with(|| format!("failed to migrate {database_url}"))?;
    let pool = DbPool::new(PoolConfig::new(database_url.as_str()))
        .await
        .wrap_err("failed to build database pool")?;

    let server = create_server(ServerConfig::new(session, settings.bind_addr(), pool))
        .wrap_err("failed to bind HTTP server")?;
    server.await.wrap_err("HTTP server terminated")?;
    info!("server stopped");
    Ok(())
}
