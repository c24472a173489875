use std::sync::Arc;

use crate::scheduling::price_scheduler::PriceScheduler;

pub mod discord_bot;
pub mod discord_config;
pub mod discord_publisher;

pub struct Data {
    pub scheduler: Arc<PriceScheduler>,
}

pub type Error = anyhow::Error;
pub type Context<'a> = poise::Context<'a, Data, Error>;
