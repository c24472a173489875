use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};

/// Discord snowflake identifying a text channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelId(u64);

impl ChannelId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for ChannelId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: u64 = s
            .trim()
            .parse()
            .map_err(|_| anyhow!("invalid channel id: {s}"))?;

        if value == 0 {
            anyhow::bail!("channel id must not be zero");
        }

        Ok(Self::new(value))
    }
}

/// Where an on-demand answer goes: the channel the command was typed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyTarget {
    pub channel_id: ChannelId,
    pub requester: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snowflakes() {
        let id: ChannelId = "1234567890123".parse().unwrap();
        assert_eq!(id, ChannelId::new(1234567890123));
        assert_eq!(id.to_string(), "1234567890123");
    }

    #[test]
    fn rejects_zero_and_garbage() {
        assert!("0".parse::<ChannelId>().is_err());
        assert!("general".parse::<ChannelId>().is_err());
        assert!("".parse::<ChannelId>().is_err());
    }
}
