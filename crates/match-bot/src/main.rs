//! Match Bot - Main entry point.

use anyhow::Context;
use match_bot::config::Config;
use match_bot::error::AppResult;
use match_bot::{Bot, Dispatcher};
use match_client::MatchClient;
use std::sync::Arc;
use tokio::signal;
use tokio_stream::StreamExt;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wechat_client::{EventReceiver, StartOptions, WechatClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.bot.log_level);

    info!("Starting Match Bot...");

    // Initialize clients
    let matches = Arc::new(
        MatchClient::new(&config.matches.base_url, config.matches.timeout)
            .context("Failed to create match client")?,
    );

    let wechat = WechatClient::new(&config.wechat.gateway_url, config.wechat.token.clone())
        .context("Failed to create WeChat gateway client")?;

    // Health checks
    if matches.health_check().await {
        info!("Match service healthy at {}", matches.base_url());
    } else {
        warn!("Match service not reachable at {} - queries will fail until it is", matches.base_url());
    }

    if wechat.health_check().await {
        info!("WeChat gateway healthy");
    } else {
        warn!("WeChat gateway not reachable at {}", wechat.base_url());
    }

    let dispatcher = Arc::new(Dispatcher::new(matches.clone()));
    info!("Registered {} command handlers", dispatcher.len());

    let bot = Bot::new(Arc::new(wechat.clone()), dispatcher);

    let options = StartOptions {
        name: config.wechat.name.clone(),
        uos: config.wechat.uos,
    };
    match wechat.start(&options).await {
        Ok(()) => info!("Starter Bot Started."),
        Err(e) => error!("Failed to start gateway session: {}", e),
    }

    info!("Listening for events...");

    let receiver = EventReceiver::new(wechat, config.wechat.poll_interval);
    let mut stream = Box::pin(receiver.stream());

    // Main event loop
    loop {
        tokio::select! {
            Some(event) = stream.next() => {
                // Handle each event in its own task so a slow query does not
                // hold up the events behind it.
                let bot = bot.clone();
                tokio::spawn(async move {
                    bot.handle_event(event).await;
                });
            }
            _ = signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    info!("Shutting down...");
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
