use thiserror::Error;

use crate::types::channel::ChannelId;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("channel {channel_id} could not be resolved")]
    ChannelUnresolved { channel_id: ChannelId },

    #[error("discord delivery failed: {0}")]
    Discord(#[from] serenity::Error),
}
