//! Agendum HTTP server binary.
//!
//! Loads configuration from `~/.config/agendum/config.toml`, sets up the
//! router, and serves the agenda API.
//!
//! # Environment Variables
//!
//! - `HOST`: overrides the configured bind host
//! - `PORT`: overrides the configured bind port
//! - `RUST_LOG`: log level (default: info)
//! - `AGENDUM_ENV`: `dev` switches to `~/.config/agendum-dev/`

mod error;
mod handlers;
mod routes;
mod state;

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use agendum_core::{AgendaGenerator, Config};

use crate::routes::create_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Agendum HTTP server");

    let config = Config::load_or_default();
    let generator = AgendaGenerator::new(&config.generator)?;
    info!(endpoint = %config.generator.base_url, model = %config.generator.model, "generator configured");

    let state = AppState::new(generator, config.defaults.clone());
    let app = create_router(state);

    let host = env::var("HOST").unwrap_or_else(|_| config.server.host.clone());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{host}:{port}").parse()?;

    info!("Server listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
