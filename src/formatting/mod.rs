pub mod price_embed_formatter;

use crate::types::price_reading::PriceReading;
use crate::types::rendered_message::{RenderedMessage, TitleKind};

pub trait MessageFormatter: Send + Sync {
    fn render(&self, reading: &PriceReading, kind: TitleKind) -> RenderedMessage;
}
