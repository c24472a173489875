use std::sync::Arc;

use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

use crate::formatting::MessageFormatter;
use crate::price::PriceSource;
use crate::publishing::Publisher;
use crate::scheduling::schedule_state::{SchedulePhase, ScheduleState};
use crate::scheduling::types::{CommandOutcome, PriceUpdateError, TickOutcome};
use crate::types::channel::{ChannelId, ReplyTarget};
use crate::types::price_reading::PriceReading;
use crate::types::rendered_message::TitleKind;

pub struct PriceScheduler {
    state: ScheduleState,
    source: Box<dyn PriceSource>,
    formatter: Box<dyn MessageFormatter>,
    publisher: Arc<dyn Publisher>,
}

impl PriceScheduler {
    pub fn new(
        state: ScheduleState,
        source: Box<dyn PriceSource>,
        formatter: Box<dyn MessageFormatter>,
        publisher: Arc<dyn Publisher>,
    ) -> Self {
        Self {
            state,
            source,
            formatter,
            publisher,
        }
    }

    pub fn state(&self) -> &ScheduleState {
        &self.state
    }

    /// Ticks immediately, then every interval measured from the previous tick
    /// start. Returns only once the state is stopped.
    pub async fn run(self: Arc<Self>) {
        if !self.state.start() {
            warn!("price scheduler already started; ignoring");
            return;
        }

        info!(
            interval_secs = self.state.interval().as_secs(),
            channel_id = %self.state.channel_id(),
            "price scheduler running"
        );

        let mut interval = tokio::time::interval(self.state.interval());
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;

            if self.state.phase() == SchedulePhase::Stopped {
                info!("price scheduler stopped");
                break;
            }

            let outcome = self.tick().await;
            debug!(?outcome, "scheduled tick complete");
        }
    }

    pub async fn tick(&self) -> TickOutcome {
        let channel_id = match self
            .publisher
            .resolve_channel(self.state.channel_id())
            .await
        {
            Ok(channel_id) => channel_id,
            Err(error) => {
                warn!(%error, "target channel unavailable; skipping price update");

                return TickOutcome::ChannelUnresolved;
            }
        };

        match self.publish_price(channel_id, TitleKind::Scheduled).await {
            Ok(reading) => {
                info!(usd = %format!("{:.4}", reading.usd), "price update sent");

                TickOutcome::Published
            }
            Err(PriceUpdateError::Fetch(error)) => {
                error!(%error, "error fetching price for scheduled update");

                TickOutcome::FetchFailed
            }
            Err(PriceUpdateError::Publish(error)) => {
                error!(%error, "error publishing scheduled price update");

                TickOutcome::PublishFailed
            }
        }
    }

    /// Unlike `tick`, failures are reported back to the requester.
    pub async fn on_demand(&self, target: &ReplyTarget) -> CommandOutcome {
        info!(
            requester = %target.requester,
            channel_id = %target.channel_id,
            "manual price check requested"
        );

        let error = match self.publish_price(target.channel_id, TitleKind::OnDemand).await {
            Ok(_) => return CommandOutcome::Replied,
            Err(error) => error,
        };

        error!(%error, requester = %target.requester, "error in price command");

        let notice = format!("Error fetching price: {error}");
        match self.publisher.send_text(target.channel_id, &notice).await {
            Ok(()) => CommandOutcome::ReportedFailure,
            Err(reply_error) => {
                error!(error = %reply_error, "failed to report price error to requester");

                CommandOutcome::Undeliverable
            }
        }
    }

    async fn publish_price(
        &self,
        channel_id: ChannelId,
        kind: TitleKind,
    ) -> Result<PriceReading, PriceUpdateError> {
        let reading = self.source.fetch().await?;
        let message = self.formatter.render(&reading, kind);
        debug!(title = %message.title, sentiment = %message.sentiment, "rendered price message");

        self.publisher.send(channel_id, &message).await?;

        Ok(reading)
    }
}
