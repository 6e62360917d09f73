//! Interaction log: one record per day carrying a composite flag.

use crate::domain::{ClassifiedDay, InteractionRecord, PositionLabel, SignalCategory};

/// First composite flag wins, in fixed priority order. The classifier keeps
/// the composites mutually exclusive, so the priority only decides for
/// hand-built flag sets.
fn match_category(day: &ClassifiedDay) -> Option<SignalCategory> {
    let flags = &day.flags;
    if flags.buy_uptrend {
        Some(SignalCategory::BuyUptrend)
    } else if flags.sell_downtrend {
        Some(SignalCategory::SellDowntrend)
    } else if flags.buy_risky {
        Some(SignalCategory::BuyRisky)
    } else if flags.sell_uptrend {
        Some(SignalCategory::SellUptrend)
    } else {
        None
    }
}

/// Uptrend categories test "above", downtrend categories test "below"; ties
/// fall to the untested side either way.
fn position_for(category: SignalCategory, close: f64, sma_long: f64) -> PositionLabel {
    match category {
        SignalCategory::BuyUptrend | SignalCategory::SellUptrend => {
            if close > sma_long {
                PositionLabel::AboveSmaLong
            } else {
                PositionLabel::BelowSmaLong
            }
        }
        SignalCategory::SellDowntrend | SignalCategory::BuyRisky => {
            if close < sma_long {
                PositionLabel::BelowSmaLong
            } else {
                PositionLabel::AboveSmaLong
            }
        }
    }
}

/// Chronological log of every day with a composite flag. At most one record
/// per day.
pub fn build_interaction_log(days: &[ClassifiedDay]) -> Vec<InteractionRecord> {
    days.iter()
        .filter_map(|day| {
            let category = match_category(day)?;
            Some(InteractionRecord {
                date: day.date,
                category,
                price: day.close,
                oscillator: day.oscillator,
                position: position_for(category, day.close.value(), day.sma_long.value()),
            })
        })
        .collect()
}
