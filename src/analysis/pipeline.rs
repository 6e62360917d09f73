//! End-to-end momentum pipeline: oscillator, trim, trend references, flags,
//! tallies and the live resolution, assembled into one report value.

use serde::{Deserialize, Serialize};

use crate::analysis::classifier::classify_day;
use crate::analysis::events::{FlagStats, MonthlyBucket, flag_stats, monthly_rollup};
use crate::analysis::interactions::build_interaction_log;
use crate::analysis::oscillator::oscillator_values;
use crate::analysis::resolver::resolve_live_signal;
use crate::analysis::trend::{realized_long_window, sma};
use crate::config::{AnalysisConfig, OscValue, RoundingPolicy, UsdPrice};
use crate::domain::{ClassifiedDay, InteractionRecord, LiveReading, PriceSeries};

/// Whether the fetched window left enough rows to classify after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryStatus {
    Ready {
        classified_len: usize,
        realized_long_window: usize,
    },
    /// Too little history even for the short trend reference. Not an error:
    /// the report renders a notice instead of tables.
    Insufficient {
        fetched: usize,
        usable_after_oscillator: usize,
        short_window: usize,
    },
}

/// Everything one run derives from a price series. `days`, `stats`, `monthly`
/// and `interactions` are empty when `status` is `Insufficient`; `live` is
/// present whenever at least one day was classified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MomentumReport {
    pub status: HistoryStatus,
    pub days: Vec<ClassifiedDay>,
    pub stats: FlagStats,
    pub monthly: Vec<MonthlyBucket>,
    pub interactions: Vec<InteractionRecord>,
    pub live: Option<LiveReading>,
}

impl MomentumReport {
    fn insufficient(fetched: usize, usable: usize, short_window: usize) -> Self {
        Self {
            status: HistoryStatus::Insufficient {
                fetched,
                usable_after_oscillator: usable,
                short_window,
            },
            days: Vec::new(),
            stats: FlagStats::default(),
            monthly: Vec::new(),
            interactions: Vec::new(),
            live: None,
        }
    }
}

/// Display-precision rounding. Ties at the third decimal round away from
/// zero.
fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Run the whole pipeline over a validated series. Total: any input degrades
/// to an `Insufficient` report rather than an error.
///
/// Trimming order matters and mirrors the derivation chain: the oscillator
/// runs over the full series, rows without a reading are dropped, the trend
/// references are computed over the remainder, and only rows with a long
/// reference survive into classification.
pub fn analyze(
    series: &PriceSeries,
    live_price: UsdPrice,
    config: &AnalysisConfig,
) -> MomentumReport {
    let oscillator = oscillator_values(series, config.oscillator.period);

    let mut survivors: Vec<(chrono::NaiveDate, f64, f64)> = series
        .points()
        .iter()
        .zip(&oscillator)
        .filter_map(|(point, reading)| {
            reading.map(|value| (point.date, point.close.value(), value))
        })
        .collect();

    if config.oscillator.rounding == RoundingPolicy::RoundBeforeClassify {
        for (_, _, value) in &mut survivors {
            *value = round_two(*value);
        }
    }

    let trend = &config.trend;
    let Some(realized_long) =
        realized_long_window(survivors.len(), trend.short_window, trend.long_window)
    else {
        log::warn!(
            "insufficient history: {} fetched, {} usable, short window {}",
            series.len(),
            survivors.len(),
            trend.short_window
        );
        return MomentumReport::insufficient(series.len(), survivors.len(), trend.short_window);
    };

    let closes: Vec<f64> = survivors.iter().map(|(_, close, _)| *close).collect();
    let sma_short = sma(&closes, trend.short_window);
    let sma_long = sma(&closes, realized_long);

    let mut days: Vec<ClassifiedDay> = Vec::with_capacity(survivors.len());
    for (i, (date, close, osc_value)) in survivors.iter().enumerate() {
        // The long window is never shorter than the short one, so a defined
        // long reference implies a defined short one.
        let (Some(long_val), Some(short_val)) = (sma_long[i], sma_short[i]) else {
            continue;
        };
        days.push(ClassifiedDay {
            date: *date,
            close: UsdPrice::new(*close),
            oscillator: OscValue::new(*osc_value),
            sma_short: UsdPrice::new(short_val),
            sma_long: UsdPrice::new(long_val),
            flags: classify_day(*osc_value, *close, long_val),
        });
    }
    log::debug!(
        "pipeline: {} fetched -> {} with oscillator -> {} classified (long window {})",
        series.len(),
        survivors.len(),
        days.len(),
        realized_long
    );

    let stats = flag_stats(&days);
    let monthly = monthly_rollup(&days, config.grouping);
    let interactions = build_interaction_log(&days);
    let live: Option<LiveReading> = days
        .last()
        .map(|latest| resolve_live_signal(latest, live_price));

    MomentumReport {
        status: HistoryStatus::Ready {
            classified_len: days.len(),
            realized_long_window: realized_long,
        },
        days,
        stats,
        monthly,
        interactions,
        live,
    }
}
