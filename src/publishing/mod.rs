pub mod publish_error;

use async_trait::async_trait;

use crate::publishing::publish_error::PublishError;
use crate::types::channel::ChannelId;
use crate::types::rendered_message::RenderedMessage;

#[async_trait]
pub trait Publisher: Send + Sync {
    /// Confirms the channel still exists and is reachable with our credentials.
    async fn resolve_channel(&self, channel_id: ChannelId) -> Result<ChannelId, PublishError>;

    async fn send(
        &self,
        channel_id: ChannelId,
        message: &RenderedMessage,
    ) -> Result<(), PublishError>;

    async fn send_text(&self, channel_id: ChannelId, text: &str) -> Result<(), PublishError>;
}
