//! Signal thresholds and window defaults

/// Oscillator thresholds for day classification. Boundaries are strict
/// (`< oversold`, `> overbought`): a reading of exactly 30 or 70 is neutral.
pub struct SignalThresholds {
    pub oversold: f64,
    pub overbought: f64,
    pub extreme_oversold: f64,
    pub extreme_overbought: f64,
}

/// Default lookback and window sizes. Each is overridable per run from the
/// command line.
pub struct WindowDefaults {
    /// Lookback window in days (presets: 90, 180, 365)
    pub lookback_days: u32,
    /// Trailing period for the gain/loss averages
    pub oscillator_period: usize,
    /// Short trend reference window
    pub sma_short: usize,
    /// Long trend reference window
    pub sma_long: usize,
}

/// The Master Signal Configuration
pub struct SignalConfig {
    pub thresholds: SignalThresholds,
    pub windows: WindowDefaults,
}

pub const SIGNALS: SignalConfig = SignalConfig {
    thresholds: SignalThresholds {
        oversold: 30.0,
        overbought: 70.0,
        extreme_oversold: 20.0,
        extreme_overbought: 80.0,
    },
    windows: WindowDefaults {
        lookback_days: 180,
        oscillator_period: 9,
        sma_short: 50,
        sma_long: 100,
    },
};
