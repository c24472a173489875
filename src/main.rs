mod discord;
mod formatting;
mod price;
mod publishing;
mod scheduling;
mod types;

#[cfg(test)]
mod test_support;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use serenity::all::{ClientBuilder, Http};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::discord::discord_bot;
use crate::discord::discord_config::DiscordConfig;
use crate::discord::discord_publisher::DiscordPublisher;
use crate::formatting::price_embed_formatter::PriceEmbedFormatter;
use crate::price::coingecko_source::{COINGECKO_URL, CoinGeckoSource, DEFAULT_ASSET_ID};
use crate::scheduling::price_scheduler::PriceScheduler;
use crate::scheduling::schedule_state::ScheduleState;

#[derive(Debug, Clone, Parser)]
struct Args {
    #[arg(long, default_value = "!")]
    pub command_prefix: String,

    /// Upper bound for each price feed request.
    #[arg(long, default_value_t = 10)]
    pub request_timeout_secs: u64,

    #[arg(long, default_value = COINGECKO_URL)]
    pub price_url: String,
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!(%error, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("xrp_notifier=info".parse()?),
        )
        .with_target(false)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();
    let config = DiscordConfig::from_env()?;
    let timeout = Duration::from_secs(args.request_timeout_secs);

    let publisher = Arc::new(DiscordPublisher::new(Arc::new(Http::new(&config.token))));
    let source = CoinGeckoSource::with_url(&args.price_url, DEFAULT_ASSET_ID, timeout)?;
    info!(url = %source.endpoint(), channel_id = %config.channel_id, "price feed configured");

    let scheduler = Arc::new(PriceScheduler::new(
        ScheduleState::new(config.channel_id),
        Box::new(source),
        Box::new(PriceEmbedFormatter::default()),
        publisher,
    ));

    let mut client = ClientBuilder::new(&config.token, discord_bot::intents())
        .framework(discord_bot::framework(
            scheduler.clone(),
            &args.command_prefix,
        ))
        .await
        .context("failed to build discord client")?;

    discord_bot::serve(client.start(), shutdown_signal(), scheduler.state()).await
}
