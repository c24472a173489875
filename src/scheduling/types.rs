use thiserror::Error;

use crate::price::fetch_error::FetchError;
use crate::publishing::publish_error::PublishError;

#[derive(Debug, Error)]
pub enum PriceUpdateError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Publish(#[from] PublishError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Published,
    ChannelUnresolved,
    FetchFailed,
    PublishFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Replied,
    ReportedFailure,
    /// Neither the price nor the failure notice reached the requester.
    Undeliverable,
}
