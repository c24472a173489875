/// A single normalized quote for the tracked asset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceReading {
    pub usd: f64,
    pub eur: f64,

    /// Percentage change of the USD quote over the last 24 hours.
    pub usd_24h_change: f64,
}

impl PriceReading {
    pub fn new(usd: f64, eur: f64, usd_24h_change: f64) -> Self {
        Self {
            usd,
            eur,
            usd_24h_change,
        }
    }
}
