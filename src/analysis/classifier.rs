//! Per-day flag classification from an oscillator reading and the long trend
//! reference.

use crate::config::{SIGNALS, SignalThresholds};
use crate::domain::DayFlags;

/// All comparisons are strict. A reading sitting exactly on a threshold is
/// neutral and a close sitting exactly on the reference is in neither trend,
/// so the composite flags stay mutually exclusive.
pub fn classify_with(
    thresholds: &SignalThresholds,
    oscillator: f64,
    close: f64,
    sma_long: f64,
) -> DayFlags {
    let oversold = oscillator < thresholds.oversold;
    let overbought = oscillator > thresholds.overbought;
    let uptrend = close > sma_long;
    let downtrend = close < sma_long;
    DayFlags {
        oversold,
        overbought,
        extreme_oversold: oscillator < thresholds.extreme_oversold,
        extreme_overbought: oscillator > thresholds.extreme_overbought,
        uptrend,
        downtrend,
        buy_uptrend: oversold && uptrend,
        sell_downtrend: overbought && downtrend,
        buy_risky: oversold && downtrend,
        sell_uptrend: overbought && uptrend,
    }
}

pub fn classify_day(oscillator: f64, close: f64, sma_long: f64) -> DayFlags {
    classify_with(&SIGNALS.thresholds, oscillator, close, sma_long)
}
