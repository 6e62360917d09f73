//! CoinGecko API configuration

/// Endpoints and transport settings for the CoinGecko public API.
pub struct CoinGeckoApiConfig {
    pub base_url: &'static str,
    /// Quote currency for every price in the app
    pub quote_currency: &'static str,
    /// Per-request timeout
    pub timeout_ms: u64,
}

pub const COINGECKO: CoinGeckoApiConfig = CoinGeckoApiConfig {
    base_url: "https://api.coingecko.com/api/v3",
    quote_currency: "usd",
    timeout_ms: 10_000,
};

impl CoinGeckoApiConfig {
    /// Daily close series over the trailing `days` window.
    pub fn market_chart_url(&self, coin_id: &str, days: u32) -> String {
        format!(
            "{}/coins/{}/market_chart?vs_currency={}&days={}&interval=daily",
            self.base_url, coin_id, self.quote_currency, days
        )
    }

    /// Current spot quote for one coin.
    pub fn simple_price_url(&self, coin_id: &str) -> String {
        format!(
            "{}/simple/price?ids={}&vs_currencies={}",
            self.base_url, coin_id, self.quote_currency
        )
    }
}
