// Domain types and value objects
mod classified;
mod series;

// Re-export commonly used types to the world
pub use classified::{
    ClassifiedDay, DayFlags, InteractionRecord, LiveReading, PositionLabel, SignalCategory,
    TradeSignal,
};
pub use series::{PricePoint, PriceSeries};
