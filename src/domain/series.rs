use anyhow::{Result, bail};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::UsdPrice;

/// One daily close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: UsdPrice,
}

/// A validated daily close series: dates strictly increasing, one point per
/// calendar date, every close positive and finite.
#[derive(Debug, Clone, Default)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build from provider rows, already in ascending time order. Two rows
    /// landing on the same calendar date collapse to the later one (daily
    /// payloads end with a partial current-day point). Out-of-order dates
    /// and non-positive closes reject the whole series.
    pub fn from_provider_rows(rows: Vec<(NaiveDate, f64)>) -> Result<Self> {
        let mut points: Vec<PricePoint> = Vec::with_capacity(rows.len());
        for (date, close) in rows {
            if !close.is_finite() || close <= 0.0 {
                bail!("non-positive close {} on {}", close, date);
            }
            let point = PricePoint {
                date,
                close: UsdPrice::new(close),
            };
            match points.last() {
                Some(last) if last.date == date => {
                    // Same-date refresh: the later row wins.
                    let idx = points.len() - 1;
                    points[idx] = point;
                }
                Some(last) if last.date > date => {
                    bail!("out-of-order date {} after {}", date, last.date);
                }
                _ => points.push(point),
            }
        }
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close.value()).collect()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Synthetic series on consecutive dates, for tests.
    #[cfg(test)]
    pub fn from_closes(start: NaiveDate, closes: &[f64]) -> Self {
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PricePoint {
                date: start + chrono::Days::new(i as u64),
                close: UsdPrice::new(close),
            })
            .collect();
        Self { points }
    }
}
