use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Abstract interface for fetching market data.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Daily closes for a coin over the trailing `days`, oldest first, as
    /// (UTC date, close) rows.
    async fn fetch_daily_series(&self, coin_id: &str, days: u32) -> Result<Vec<(NaiveDate, f64)>>;

    /// Current spot quote for a coin.
    async fn fetch_live_price(&self, coin_id: &str) -> Result<f64>;
}
