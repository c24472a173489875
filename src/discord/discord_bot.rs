use std::future::Future;
use std::sync::Arc;

use anyhow::Context as _;
use serenity::all::GatewayIntents;
use tracing::{debug, info};

use crate::discord::{Context, Data, Error};
use crate::scheduling::price_scheduler::PriceScheduler;
use crate::scheduling::schedule_state::ScheduleState;
use crate::types::channel::{ChannelId, ReplyTarget};

pub fn intents() -> GatewayIntents {
    GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT
}

/// Posts the current XRP price in this channel
#[poise::command(prefix_command)]
pub async fn price(ctx: Context<'_>) -> Result<(), Error> {
    let target = ReplyTarget {
        channel_id: ChannelId::new(ctx.channel_id().get()),
        requester: ctx.author().name.clone(),
    };

    let outcome = ctx.data().scheduler.on_demand(&target).await;
    debug!(?outcome, "price command handled");

    Ok(())
}

pub fn framework_options(command_prefix: &str) -> poise::FrameworkOptions<Data, Error> {
    poise::FrameworkOptions {
        commands: vec![price()],
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some(command_prefix.to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// The schedule starts on the first ready event. Later ready events after
/// a resume never reach setup.
pub fn framework(
    scheduler: Arc<PriceScheduler>,
    command_prefix: &str,
) -> poise::Framework<Data, Error> {
    poise::Framework::builder()
        .options(framework_options(command_prefix))
        .setup(move |_ctx, ready, _framework| {
            Box::pin(async move {
                info!(user_name = %ready.user.name, "bot is ready");

                tokio::spawn(scheduler.clone().run());

                Ok(Data { scheduler })
            })
        })
        .build()
}

/// Runs until the gateway connection ends or shutdown is requested. Either
/// way the schedule is stopped. A connection error, such as a rejected token
/// or disallowed intents, is returned so the process exits with it.
pub async fn serve<C, S>(connection: C, shutdown: S, state: &ScheduleState) -> anyhow::Result<()>
where
    C: Future<Output = serenity::Result<()>>,
    S: Future<Output = ()>,
{
    let result = tokio::select! {
        result = connection => result.context("discord connection ended"),
        _ = shutdown => {
            info!("shutdown requested");
            Ok(())
        }
    };

    state.stop();

    result
}
