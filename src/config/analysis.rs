//! Analysis and computation configuration

use anyhow::{Result, bail};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::SIGNALS;

/// Whether classification sees the oscillator at full precision or at
/// display precision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
pub enum RoundingPolicy {
    /// Classify on the unrounded value; round only for display.
    #[default]
    ClassifyUnrounded,
    /// Round to 2 decimals first, then classify. Readings like 29.996
    /// flip from oversold to neutral under this policy.
    RoundBeforeClassify,
}

/// Key used to group classified days for the monthly rollup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
pub enum MonthlyGrouping {
    /// Month-of-year (1-12). Lookbacks beyond a year land the same month
    /// from different years in one bucket.
    #[default]
    MonthOfYear,
    /// Year plus month; no cross-year merging.
    YearMonth,
}

/// Oscillator engine settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OscillatorSettings {
    /// Trailing period for the gain/loss averages
    pub period: usize,
    pub rounding: RoundingPolicy,
}

/// Trend reference settings. The long window falls back to the short one
/// when the trimmed series is too short for it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrendSettings {
    pub short_window: usize,
    pub long_window: usize,
}

/// The Master Analysis Configuration: every knob for one run in a single
/// value handed to the pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub lookback_days: u32,

    // Sub-groups
    pub oscillator: OscillatorSettings,
    pub trend: TrendSettings,
    pub grouping: MonthlyGrouping,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            lookback_days: SIGNALS.windows.lookback_days,
            oscillator: OscillatorSettings {
                period: SIGNALS.windows.oscillator_period,
                rounding: RoundingPolicy::default(),
            },
            trend: TrendSettings {
                short_window: SIGNALS.windows.sma_short,
                long_window: SIGNALS.windows.sma_long,
            },
            grouping: MonthlyGrouping::default(),
        }
    }
}

impl AnalysisConfig {
    /// Reject configurations the pipeline has no sensible answer for.
    pub fn validate(&self) -> Result<()> {
        if self.lookback_days == 0 {
            bail!("lookback must be at least 1 day");
        }
        if self.oscillator.period == 0 {
            bail!("oscillator period must be at least 1");
        }
        if self.trend.short_window == 0 || self.trend.long_window == 0 {
            bail!("trend windows must be at least 1");
        }
        if self.trend.short_window > self.trend.long_window {
            bail!(
                "short window ({}) must not exceed long window ({})",
                self.trend.short_window,
                self.trend.long_window
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AnalysisConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_period_rejected() {
        let mut config = AnalysisConfig::default();
        config.oscillator.period = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_windows_rejected() {
        let mut config = AnalysisConfig::default();
        config.trend.short_window = 120;
        config.trend.long_window = 100;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_equal_windows_allowed() {
        let mut config = AnalysisConfig::default();
        config.trend.short_window = 50;
        config.trend.long_window = 50;
        assert!(config.validate().is_ok());
    }
}
