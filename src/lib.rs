#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod report;
pub mod utils;

// Re-export commonly used types outside of crate
pub use analysis::{HistoryStatus, MomentumReport, analyze};
pub use config::{AnalysisConfig, SIGNALS};
pub use data::{CoinGeckoProvider, MarketDataProvider, SeriesCache, fetch_series_cached};
pub use report::render_report;

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::config::{
    MonthlyGrouping, OscillatorSettings, RoundingPolicy, TrendSettings, UsdPrice, resolve_ticker,
    supported_tickers,
};

// CLI argument parsing
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Asset ticker (BTC, ETH, SOL, ADA, DOT, BNB)
    #[arg(long, default_value = "BTC")]
    pub ticker: String,

    /// Lookback window in days (the usual presets are 90, 180 and 365)
    #[arg(long, default_value_t = SIGNALS.windows.lookback_days)]
    pub days: u32,

    /// Oscillator period
    #[arg(long, default_value_t = SIGNALS.windows.oscillator_period)]
    pub period: usize,

    /// Short SMA window
    #[arg(long, default_value_t = SIGNALS.windows.sma_short)]
    pub short_window: usize,

    /// Long SMA window
    #[arg(long, default_value_t = SIGNALS.windows.sma_long)]
    pub long_window: usize,

    /// Skip the fetch cache and pull fresh data
    #[arg(long, default_value_t = false)]
    pub refresh: bool,

    /// Bucket key for the monthly rollup
    #[arg(long, value_enum, default_value_t = MonthlyGrouping::MonthOfYear)]
    pub monthly_grouping: MonthlyGrouping,

    /// Round the oscillator to 2 decimals before classification
    #[arg(long, default_value_t = false)]
    pub round_before_classify: bool,
}

impl Cli {
    pub fn to_analysis_config(&self) -> Result<AnalysisConfig> {
        let config = AnalysisConfig {
            lookback_days: self.days,
            oscillator: OscillatorSettings {
                period: self.period,
                rounding: if self.round_before_classify {
                    RoundingPolicy::RoundBeforeClassify
                } else {
                    RoundingPolicy::ClassifyUnrounded
                },
            },
            trend: TrendSettings {
                short_window: self.short_window,
                long_window: self.long_window,
            },
            grouping: self.monthly_grouping,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Main application entry point - one fetch-analyze-render run
/// This is the public API for the binary to call
pub async fn run_app(args: Cli) -> Result<()> {
    let Some(asset) = resolve_ticker(&args.ticker) else {
        bail!(
            "unknown ticker {:?}; supported tickers: {}",
            args.ticker,
            supported_tickers()
        );
    };
    let config = args.to_analysis_config()?;

    let provider = CoinGeckoProvider::new()?;
    let cache = SeriesCache::new();

    let series = fetch_series_cached(
        &provider,
        &cache,
        asset.coin_id,
        config.lookback_days,
        args.refresh,
    )
    .await
    .with_context(|| format!("loading the {} series", asset.ticker))?;
    let live_price = provider
        .fetch_live_price(asset.coin_id)
        .await
        .map(UsdPrice::new)
        .with_context(|| format!("loading the live {} quote", asset.ticker))?;

    let report = analyze(&series, live_price, &config);
    print!("{}", render_report(asset.ticker, &config, &report));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_match_the_signal_config() {
        let args = Cli::parse_from(["rsi-radar"]);
        assert_eq!(args.ticker, "BTC");
        assert_eq!(args.days, SIGNALS.windows.lookback_days);
        assert_eq!(args.period, SIGNALS.windows.oscillator_period);
        assert_eq!(args.short_window, SIGNALS.windows.sma_short);
        assert_eq!(args.long_window, SIGNALS.windows.sma_long);
        assert!(!args.refresh);
        assert!(!args.round_before_classify);

        let config = args.to_analysis_config().unwrap();
        assert_eq!(config.grouping, MonthlyGrouping::MonthOfYear);
        assert_eq!(config.oscillator.rounding, RoundingPolicy::ClassifyUnrounded);
    }

    #[test]
    fn test_flags_flow_into_the_config() {
        let args = Cli::parse_from([
            "rsi-radar",
            "--ticker",
            "sol",
            "--days",
            "365",
            "--period",
            "14",
            "--monthly-grouping",
            "year-month",
            "--round-before-classify",
        ]);
        let config = args.to_analysis_config().unwrap();
        assert_eq!(config.lookback_days, 365);
        assert_eq!(config.oscillator.period, 14);
        assert_eq!(config.grouping, MonthlyGrouping::YearMonth);
        assert_eq!(
            config.oscillator.rounding,
            RoundingPolicy::RoundBeforeClassify
        );
    }

    #[test]
    fn test_bad_windows_are_rejected_at_the_cli_boundary() {
        let args = Cli::parse_from(["rsi-radar", "--short-window", "200"]);
        assert!(args.to_analysis_config().is_err());
    }
}
