mod cache;
mod coingecko;
mod provider;

pub use {
    cache::{SeriesCache, fetch_series_cached},
    coingecko::{CoinGeckoError, CoinGeckoProvider},
    provider::MarketDataProvider,
};
