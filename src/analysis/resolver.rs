//! Final recommendation: most recent classified day's oscillator reading
//! against a live quote.

use crate::config::{SIGNALS, SignalThresholds, UsdPrice};
use crate::domain::{ClassifiedDay, LiveReading, PositionLabel, TradeSignal};

/// The live quote, not the latest close, decides which side of the long
/// reference the market sits on. Oversold with the quote at or below the
/// reference resolves to hold, not to a risky buy.
pub fn resolve_with(
    thresholds: &SignalThresholds,
    latest: &ClassifiedDay,
    live_price: UsdPrice,
) -> LiveReading {
    let oscillator = latest.oscillator.value();
    let live_above = live_price.value() > latest.sma_long.value();

    let signal = if oscillator < thresholds.oversold && live_above {
        TradeSignal::BuyOversoldUptrend
    } else if oscillator > thresholds.overbought && !live_above {
        TradeSignal::SellOverboughtDowntrend
    } else if oscillator > thresholds.overbought {
        TradeSignal::SellPullbackUptrend
    } else {
        TradeSignal::HoldNeutral
    };

    LiveReading {
        live_price,
        latest_oscillator: latest.oscillator,
        signal,
        position: if live_above {
            PositionLabel::AboveSmaLong
        } else {
            PositionLabel::BelowSmaLong
        },
    }
}

pub fn resolve_live_signal(latest: &ClassifiedDay, live_price: UsdPrice) -> LiveReading {
    resolve_with(&SIGNALS.thresholds, latest, live_price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OscValue;
    use crate::domain::DayFlags;
    use chrono::NaiveDate;

    fn latest(oscillator: f64, sma_long: f64) -> ClassifiedDay {
        ClassifiedDay {
            date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            close: UsdPrice::new(sma_long),
            oscillator: OscValue::new(oscillator),
            sma_short: UsdPrice::new(sma_long),
            sma_long: UsdPrice::new(sma_long),
            flags: DayFlags::default(),
        }
    }

    #[test]
    fn test_oversold_above_reference_is_a_buy() {
        let reading = resolve_live_signal(&latest(25.0, 100.0), UsdPrice::new(105.0));
        assert_eq!(reading.signal, TradeSignal::BuyOversoldUptrend);
        assert_eq!(reading.position, PositionLabel::AboveSmaLong);
        assert_eq!(reading.signal.to_string(), "Buy (oversold in uptrend)");
    }

    #[test]
    fn test_overbought_at_reference_is_a_downtrend_sell() {
        // A quote exactly on the reference is not above it.
        let reading = resolve_live_signal(&latest(75.0, 100.0), UsdPrice::new(100.0));
        assert_eq!(reading.signal, TradeSignal::SellOverboughtDowntrend);
        assert_eq!(reading.position, PositionLabel::BelowSmaLong);
        assert_eq!(
            reading.signal.to_string(),
            "Sell (overbought in downtrend)"
        );
    }

    #[test]
    fn test_overbought_above_reference_is_a_pullback_sell() {
        let reading = resolve_live_signal(&latest(75.0, 100.0), UsdPrice::new(110.0));
        assert_eq!(reading.signal, TradeSignal::SellPullbackUptrend);
        assert_eq!(
            reading.signal.to_string(),
            "Sell (possible pullback in uptrend)"
        );
    }

    #[test]
    fn test_everything_else_holds() {
        let reading = resolve_live_signal(&latest(50.0, 100.0), UsdPrice::new(110.0));
        assert_eq!(reading.signal, TradeSignal::HoldNeutral);
        assert_eq!(
            reading.signal.to_string(),
            "Hold (neutral momentum / stable trend)"
        );
        // Oversold below the reference holds rather than buying the knife.
        let reading = resolve_live_signal(&latest(25.0, 100.0), UsdPrice::new(95.0));
        assert_eq!(reading.signal, TradeSignal::HoldNeutral);
        assert_eq!(reading.position, PositionLabel::BelowSmaLong);
    }

    #[test]
    fn test_threshold_readings_hold() {
        let reading = resolve_live_signal(&latest(30.0, 100.0), UsdPrice::new(110.0));
        assert_eq!(reading.signal, TradeSignal::HoldNeutral);
        let reading = resolve_live_signal(&latest(70.0, 100.0), UsdPrice::new(90.0));
        assert_eq!(reading.signal, TradeSignal::HoldNeutral);
    }

    #[test]
    fn test_reading_carries_quote_and_oscillator() {
        let reading = resolve_live_signal(&latest(42.0, 100.0), UsdPrice::new(123.45));
        assert_eq!(reading.live_price, UsdPrice::new(123.45));
        assert_eq!(reading.latest_oscillator, OscValue::new(42.0));
    }
}
