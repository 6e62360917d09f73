//! Configuration module for the radar application.

// Can all be private because we have a public re-export.
mod analysis;
mod assets;
mod coingecko;
mod persistence;
mod signals;
mod types;

// Re-export commonly used items
pub use analysis::{
    AnalysisConfig,
    MonthlyGrouping,
    OscillatorSettings,
    RoundingPolicy,
    TrendSettings,
};
pub use assets::{ASSETS, AssetEntry, resolve_ticker, supported_tickers};
pub use coingecko::{COINGECKO, CoinGeckoApiConfig};
pub use persistence::{CACHE, FetchCacheConfig, series_cache_filename};
pub use signals::{SIGNALS, SignalConfig, SignalThresholds, WindowDefaults};
pub use types::{OscValue, UsdPrice};
