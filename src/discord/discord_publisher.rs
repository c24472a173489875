use std::sync::Arc;

use async_trait::async_trait;
use serenity::all::{CreateEmbed, CreateMessage, Http, Timestamp};

use crate::publishing::Publisher;
use crate::publishing::publish_error::PublishError;
use crate::types::channel::ChannelId;
use crate::types::rendered_message::RenderedMessage;

/// Delivers rendered messages through serenity's REST client.
#[derive(Clone)]
pub struct DiscordPublisher {
    http: Arc<Http>,
}

impl DiscordPublisher {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    async fn create_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<(), PublishError> {
        serenity::all::ChannelId::new(channel_id.get())
            .send_message(self.http.as_ref(), message)
            .await?;

        Ok(())
    }
}

pub fn create_embed(message: &RenderedMessage) -> CreateEmbed {
    message.fields.iter().fold(
        CreateEmbed::new()
            .title(&message.title)
            .colour(message.sentiment.color())
            .timestamp(Timestamp::from(message.timestamp)),
        |embed, field| embed.field(&field.name, &field.value, field.inline),
    )
}

/* 403 and 404 mean the bot cannot see the channel any more */
fn is_unreachable(error: &serenity::Error) -> bool {
    let serenity::Error::Http(http_error) = error else {
        return false;
    };

    http_error
        .status_code()
        .is_some_and(|status| matches!(status.as_u16(), 403 | 404))
}

#[async_trait]
impl Publisher for DiscordPublisher {
    async fn resolve_channel(&self, channel_id: ChannelId) -> Result<ChannelId, PublishError> {
        match serenity::all::ChannelId::new(channel_id.get())
            .to_channel(self.http.as_ref())
            .await
        {
            Ok(_) => Ok(channel_id),
            Err(error) if is_unreachable(&error) => {
                Err(PublishError::ChannelUnresolved { channel_id })
            }
            Err(error) => Err(error.into()),
        }
    }

    async fn send(
        &self,
        channel_id: ChannelId,
        message: &RenderedMessage,
    ) -> Result<(), PublishError> {
        self.create_message(channel_id, CreateMessage::new().embed(create_embed(message)))
            .await
    }

    async fn send_text(&self, channel_id: ChannelId, text: &str) -> Result<(), PublishError> {
        self.create_message(channel_id, CreateMessage::new().content(text))
            .await
    }
}
