// Momentum analysis: oscillator, trend references, classification, rollups
mod classifier;
mod events;
mod interactions;
mod oscillator;
mod pipeline;
mod resolver;
mod trend;

// Re-export commonly used items to the world
pub use classifier::{classify_day, classify_with};
pub use events::{
    FlagStats, MonthKey, MonthlyBucket, count_days, count_events, flag_stats, monthly_rollup,
};
pub use interactions::build_interaction_log;
pub use oscillator::oscillator_values;
pub use pipeline::{HistoryStatus, MomentumReport, analyze};
pub use resolver::{resolve_live_signal, resolve_with};
pub use trend::{realized_long_window, sma};
