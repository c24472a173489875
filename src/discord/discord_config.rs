use std::env;

use anyhow::{Context, Result, anyhow};

use crate::types::channel::ChannelId;

pub struct DiscordConfig {
    pub token: String,
    pub channel_id: ChannelId,
}

impl DiscordConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_values(env::var("DISCORD_TOKEN").ok(), env::var("CHANNEL_ID").ok())
    }

    fn from_values(token: Option<String>, channel_id: Option<String>) -> Result<Self> {
        let token = token
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| anyhow!("DISCORD_TOKEN not set"))?;

        let channel_id = channel_id
            .ok_or_else(|| anyhow!("CHANNEL_ID not set"))?
            .parse::<ChannelId>()
            .context("CHANNEL_ID is not a valid channel id")?;

        Ok(Self { token, channel_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn accepts_token_and_channel() {
        let config = DiscordConfig::from_values(some("abc.def"), some("1122334455")).unwrap();

        assert_eq!(config.token, "abc.def");
        assert_eq!(config.channel_id, ChannelId::new(1122334455));
    }

    #[test]
    fn missing_values_are_fatal() {
        assert!(DiscordConfig::from_values(None, some("1")).is_err());
        assert!(DiscordConfig::from_values(some("  "), some("1")).is_err());
        assert!(DiscordConfig::from_values(some("abc"), None).is_err());
    }

    #[test]
    fn zero_or_garbage_channel_is_fatal() {
        assert!(DiscordConfig::from_values(some("abc"), some("0")).is_err());
        assert!(DiscordConfig::from_values(some("abc"), some("#general")).is_err());
    }
}
