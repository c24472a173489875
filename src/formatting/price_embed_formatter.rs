use chrono::{DateTime, Utc};

use crate::formatting::MessageFormatter;
use crate::types::price_reading::PriceReading;
use crate::types::rendered_message::{EmbedField, RenderedMessage, Sentiment, TitleKind};

#[derive(Debug, Clone)]
pub struct PriceEmbedFormatter {
    asset_symbol: String,
}

impl Default for PriceEmbedFormatter {
    fn default() -> Self {
        Self::new("XRP")
    }
}

impl PriceEmbedFormatter {
    pub fn new(asset_symbol: impl Into<String>) -> Self {
        Self {
            asset_symbol: asset_symbol.into(),
        }
    }

    pub fn title(&self, kind: TitleKind) -> String {
        match kind {
            TitleKind::Scheduled => format!("{} Price Update", self.asset_symbol),
            TitleKind::OnDemand => format!("{} Price Check", self.asset_symbol),
        }
    }

    pub fn render_at(
        &self,
        reading: &PriceReading,
        kind: TitleKind,
        timestamp: DateTime<Utc>,
    ) -> RenderedMessage {
        RenderedMessage {
            title: self.title(kind),
            sentiment: Sentiment::from_change(reading.usd_24h_change),
            timestamp,
            fields: vec![
                EmbedField::inline("USD", format!("${:.4}", reading.usd)),
                EmbedField::inline("EUR", format!("€{:.4}", reading.eur)),
                EmbedField::inline("24h Change", format!("{:.2}%", reading.usd_24h_change)),
            ],
        }
    }
}

impl MessageFormatter for PriceEmbedFormatter {
    fn render(&self, reading: &PriceReading, kind: TitleKind) -> RenderedMessage {
        self.render_at(reading, kind, Utc::now())
    }
}
