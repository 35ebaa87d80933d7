//! Soma HTTP server.
//!
//! Environment variables:
//!
//! - `SOMA_CONFIG`: path to a TOML config (default: `configs/soma.toml`)
//! - `HOST`, `PORT`: bind address overrides
//! - `SWISS_EPHEMERIS_PATH`: Swiss Ephemeris data directory
//! - `RUST_LOG`: log filter (default: info)

use std::sync::Arc;

use soma_engine::SwissEphemerisAdapter;
use soma_server::{create_router, serve, AppState};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = soma_config::load_settings()?;
    log::info!(
        "Starting Soma server on {}:{} (timeout {:?})",
        settings.server.host,
        settings.server.port,
        settings.server.request_timeout
    );

    // The ephemeris path is process-wide; set it before any worker thread exists.
    let adapter = SwissEphemerisAdapter::new(settings.ephemeris.path.clone())?;
    match adapter.ephemeris_path() {
        Some(path) => log::info!("Ephemeris oracle ready (data files in {})", path.display()),
        None => log::info!("Ephemeris oracle ready (Moshier model)"),
    }
    let state = AppState::new(Arc::new(adapter));
    let app = create_router(state, settings.server.request_timeout);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(serve(app, &settings.server))
}
