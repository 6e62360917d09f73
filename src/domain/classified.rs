use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::config::{OscValue, UsdPrice};

/// Boolean classification flags for one day. oversold/overbought come from
/// disjoint thresholds and uptrend/downtrend from strict comparisons, so at
/// most one of the four composites can hold; a day can satisfy none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayFlags {
    pub oversold: bool,
    pub overbought: bool,
    pub extreme_oversold: bool,
    pub extreme_overbought: bool,
    pub uptrend: bool,
    pub downtrend: bool,
    pub buy_uptrend: bool,
    pub sell_downtrend: bool,
    pub buy_risky: bool,
    pub sell_uptrend: bool,
}

impl DayFlags {
    /// True when any composite (interaction-worthy) flag holds.
    pub fn has_composite(&self) -> bool {
        self.buy_uptrend || self.sell_downtrend || self.buy_risky || self.sell_uptrend
    }
}

/// A fully annotated day: close, oscillator reading, both trend references
/// and the derived flags. Only rows with complete data survive trimming, so
/// none of these fields is optional.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedDay {
    pub date: NaiveDate,
    pub close: UsdPrice,
    pub oscillator: OscValue,
    pub sma_short: UsdPrice,
    pub sma_long: UsdPrice,
    pub flags: DayFlags,
}

/// The four composite signal categories, in resolution priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
pub enum SignalCategory {
    #[strum(to_string = "Buy Uptrend")]
    BuyUptrend,
    #[strum(to_string = "Sell Downtrend")]
    SellDowntrend,
    #[strum(to_string = "Buy Risky (Downtrend)")]
    BuyRisky,
    #[strum(to_string = "Sell Uptrend (Pullback)")]
    SellUptrend,
}

/// Side of the long trend reference a price sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum PositionLabel {
    #[strum(to_string = "above SMA-long")]
    AboveSmaLong,
    #[strum(to_string = "below SMA-long")]
    BelowSmaLong,
}

/// One emitted interaction: a day where an oscillator extreme met a trend
/// state. At most one record exists per date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub date: NaiveDate,
    pub category: SignalCategory,
    pub price: UsdPrice,
    pub oscillator: OscValue,
    pub position: PositionLabel,
}

/// Human-readable final recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum TradeSignal {
    #[strum(to_string = "Buy (oversold in uptrend)")]
    BuyOversoldUptrend,
    #[strum(to_string = "Sell (overbought in downtrend)")]
    SellOverboughtDowntrend,
    #[strum(to_string = "Sell (possible pullback in uptrend)")]
    SellPullbackUptrend,
    #[strum(to_string = "Hold (neutral momentum / stable trend)")]
    HoldNeutral,
}

/// The resolved recommendation for the most recent day plus a live quote.
/// Transient: derived per run, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiveReading {
    pub live_price: UsdPrice,
    pub latest_oscillator: OscValue,
    pub signal: TradeSignal,
    pub position: PositionLabel,
}
