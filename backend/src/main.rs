//! Storefront entry-point: loads settings, opens the database and serves the API.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use storefront::inbound::http::health::HealthState;
use storefront::outbound::persistence::Database;
use storefront::settings::StorefrontSettings;

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

    let settings = StorefrontSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let database = Database::open(settings.database_config())
        .await
        .map_err(std::io::Error::other)?;
    info!(database = settings.database_url(), "database ready");

    let health_state =
        web::Data::new(HealthState::new().with_storage(Arc::new(database.clone())));
    let config = ServerConfig::new((settings.host().to_owned(), settings.port()), database.clone())
        .with_notifier(settings.notifier());
    let server = create_server(health_state.clone(), config)?;
    let outcome = server.await;

    health_state.mark_draining();
    database.close().await;
    outcome
}
