//! Momentum oscillator over daily closes.
//!
//! For each day the close-to-close delta is split into a gain (positive part)
//! and a loss (magnitude of the negative part). Both are averaged with a plain
//! rolling mean over the trailing period and combined into
//! `100 - 100 / (1 + avg_gain / avg_loss)`, bounded to [0, 100].

use crate::domain::PriceSeries;

/// One oscillator reading per input day. The first `period` entries are
/// `None`: a reading needs `period` trailing deltas and the first close has
/// none. A flat trailing window (no gains, no losses) is also `None`.
pub fn oscillator_values(series: &PriceSeries, period: usize) -> Vec<Option<f64>> {
    compute(&series.closes(), period)
}

fn compute(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 || closes.len() <= period {
        return out;
    }

    // gains[i] and losses[i] belong to the step from closes[i] to closes[i + 1].
    let (gains, losses): (Vec<f64>, Vec<f64>) = closes
        .windows(2)
        .map(|pair| {
            let delta = pair[1] - pair[0];
            (delta.max(0.0), (-delta).max(0.0))
        })
        .unzip();

    // Each window is summed fresh over its own slice so no residue drifts
    // into the zero checks in reading(); an all-zero window stays undefined.
    let p = period as f64;
    for t in period..closes.len() {
        let gain_sum: f64 = gains[t - period..t].iter().sum();
        let loss_sum: f64 = losses[t - period..t].iter().sum();
        out[t] = reading(gain_sum / p, loss_sum / p);
    }

    out
}

/// Undefined when the window saw no movement at all; pinned to exactly 100
/// when it saw only gains and exactly 0 when it saw only losses.
fn reading(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            None
        } else {
            Some(100.0)
        }
    } else if avg_gain == 0.0 {
        Some(0.0)
    } else {
        let rs = avg_gain / avg_loss;
        Some(100.0 - 100.0 / (1.0 + rs))
    }
}
