use {
    anyhow::{Context, Result, bail},
    async_trait::async_trait,
    chrono::NaiveDate,
    serde::Deserialize,
    serde::de::DeserializeOwned,
    std::{collections::HashMap, error::Error, fmt, time::Duration},
};

use crate::config::COINGECKO;
use crate::data::MarketDataProvider;
use crate::utils::epoch_ms_to_utc_date;

/// Wire shape of /coins/{id}/market_chart. Each row is [epoch_ms, price];
/// the market_caps and total_volumes arrays are ignored.
#[derive(Debug, Deserialize)]
struct MarketChartResponse {
    prices: Vec<(i64, f64)>,
}

#[derive(Debug)]
pub enum CoinGeckoError {
    HttpStatus {
        operation: &'static str,
        coin_id: String,
        status: u16,
    },
    Transport {
        operation: &'static str,
        coin_id: String,
        message: String,
    },
    MalformedPayload {
        operation: &'static str,
        coin_id: String,
        message: String,
    },
}

impl fmt::Display for CoinGeckoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> std::fmt::Result {
        match self {
            CoinGeckoError::HttpStatus {
                operation,
                coin_id,
                status,
            } => {
                write!(f, "CoinGecko {operation} for {coin_id} answered HTTP {status}.")
            }
            CoinGeckoError::Transport {
                operation,
                coin_id,
                message,
            } => {
                write!(f, "CoinGecko {operation} for {coin_id} failed: {message}.")
            }
            CoinGeckoError::MalformedPayload {
                operation,
                coin_id,
                message,
            } => {
                write!(f, "Malformed CoinGecko {operation} payload for {coin_id}: {message}.")
            }
        }
    }
}

impl Error for CoinGeckoError {}

/// Async client for the CoinGecko public API.
pub struct CoinGeckoProvider {
    client: reqwest::Client,
}

impl CoinGeckoProvider {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(COINGECKO.timeout_ms))
            .build()
            .context("building the CoinGecko HTTP client")?;
        Ok(Self { client })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        operation: &'static str,
        coin_id: &str,
    ) -> Result<T, CoinGeckoError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CoinGeckoError::Transport {
                operation,
                coin_id: coin_id.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoinGeckoError::HttpStatus {
                operation,
                coin_id: coin_id.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CoinGeckoError::MalformedPayload {
                operation,
                coin_id: coin_id.to_string(),
                message: e.to_string(),
            })
    }
}

/// Convert chart rows to (UTC date, close) rows. Timestamps are epoch ms at
/// 00:00 UTC for full days plus one partial current-day row at fetch time.
fn rows_from_chart(
    coin_id: &str,
    chart: MarketChartResponse,
) -> Result<Vec<(NaiveDate, f64)>, CoinGeckoError> {
    chart
        .prices
        .into_iter()
        .map(|(epoch_ms, price)| {
            epoch_ms_to_utc_date(epoch_ms).map(|date| (date, price)).ok_or_else(|| {
                CoinGeckoError::MalformedPayload {
                    operation: "market_chart",
                    coin_id: coin_id.to_string(),
                    message: format!("timestamp {epoch_ms} out of range"),
                }
            })
        })
        .collect()
}

#[async_trait]
impl MarketDataProvider for CoinGeckoProvider {
    async fn fetch_daily_series(&self, coin_id: &str, days: u32) -> Result<Vec<(NaiveDate, f64)>> {
        let url = COINGECKO.market_chart_url(coin_id, days);
        log::info!("Fetching {days} days of daily closes for {coin_id}");
        let chart: MarketChartResponse = self
            .get_json(&url, "market_chart", coin_id)
            .await
            .with_context(|| format!("fetching the daily series for {coin_id}"))?;
        if chart.prices.is_empty() {
            bail!("CoinGecko returned no price rows for {coin_id}");
        }
        let rows = rows_from_chart(coin_id, chart)?;
        log::debug!("{coin_id}: {} raw price rows", rows.len());
        Ok(rows)
    }

    async fn fetch_live_price(&self, coin_id: &str) -> Result<f64> {
        let url = COINGECKO.simple_price_url(coin_id);
        log::info!("Fetching the live {} quote for {coin_id}", COINGECKO.quote_currency);
        let payload: HashMap<String, HashMap<String, f64>> = self
            .get_json(&url, "simple_price", coin_id)
            .await
            .with_context(|| format!("fetching the live quote for {coin_id}"))?;
        let price = payload
            .get(coin_id)
            .and_then(|per_coin| per_coin.get(COINGECKO.quote_currency))
            .copied()
            .ok_or_else(|| CoinGeckoError::MalformedPayload {
                operation: "simple_price",
                coin_id: coin_id.to_string(),
                message: format!("missing {} quote", COINGECKO.quote_currency),
            })?;
        Ok(price)
    }
}
