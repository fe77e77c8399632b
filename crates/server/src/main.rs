//! Agenda scheduling service
//!
//! Main entry point for the HTTP server.

use std::sync::Arc;

use agenda_domain::Config;
use agenda_server::{logging, routes, AppContext};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env file found"),
    }

    let config = agenda_infra::config::load().unwrap_or_else(|err| {
        warn!(error = %err, "no configuration found, using defaults");
        Config::default()
    });

    let context = Arc::new(AppContext::build(config)?);

    let listener = tokio::net::TcpListener::bind(&context.config.server.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "agenda server listening");

    axum::serve(listener, routes::router(context)).await?;
    Ok(())
}
