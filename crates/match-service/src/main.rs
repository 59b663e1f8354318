//! Match Service - Entry point.

use match_service::{
    api::{create_router, AppState},
    config::Config,
    logging,
    steam::SteamClient,
};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging; the guard keeps the file writer alive
    let _log_guard = match logging::init(&config.log) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {:#}", e);
            std::process::exit(1);
        }
    };

    info!("Starting Match Service");
    if let Some(dir) = &config.log.path {
        info!("Writing logs to {}/{}.<date>", dir, config.log.prefix);
    }

    let steam = match SteamClient::new(
        &config.steam.base_url,
        config.steam.api_key.clone(),
        Duration::from_secs(config.steam.timeout_secs),
    ) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create Steam client: {}", e);
            std::process::exit(1);
        }
    };

    info!("Steam Web API endpoint: {}", config.steam.base_url);

    let app = create_router(AppState::new(steam));

    let addr = SocketAddr::new(
        config
            .server
            .listen_addr
            .parse()
            .unwrap_or([127, 0, 0, 1].into()),
        config.server.port,
    );

    info!("Listening on {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
