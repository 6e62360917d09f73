//! Trend references: simple moving averages over the trimmed closes.

/// Simple moving average. Output index `i` covers inputs `i + 1 - window ..= i`
/// and is `None` for the first `window - 1` positions. Each mean is summed
/// fresh over its own window so no drift accumulates into the strict
/// close-versus-reference comparisons downstream.
pub fn sma(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 || values.len() < window {
        return vec![None; values.len()];
    }
    let w = window as f64;
    let mut out: Vec<Option<f64>> = vec![None; window - 1];
    out.extend(
        values
            .windows(window)
            .map(|win| Some(win.iter().sum::<f64>() / w)),
    );
    out
}

/// Window actually used for the long trend reference, after trimming leaves
/// `len` rows. Prefers the configured long window, falls back to the short
/// window when the remainder cannot fill it, and gives up below that.
pub fn realized_long_window(len: usize, short_window: usize, long_window: usize) -> Option<usize> {
    if long_window > 0 && len >= long_window {
        Some(long_window)
    } else if short_window > 0 && len >= short_window {
        Some(short_window)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Simple moving average ------------------------------------------------

    #[test]
    fn test_sma_known_values() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let out = sma(&values, 3);
        assert_eq!(out, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
    }

    #[test]
    fn test_sma_window_equal_to_len() {
        let out = sma(&[2.0, 4.0, 6.0], 3);
        assert_eq!(out, vec![None, None, Some(4.0)]);
    }

    #[test]
    fn test_sma_window_larger_than_len() {
        let out = sma(&[1.0, 2.0], 5);
        assert_eq!(out, vec![None, None]);
    }

    #[test]
    fn test_sma_zero_window_is_all_undefined() {
        assert_eq!(sma(&[1.0, 2.0], 0), vec![None, None]);
    }

    #[test]
    fn test_sma_window_one_echoes_input() {
        let out = sma(&[7.0, 8.0, 9.0], 1);
        assert_eq!(out, vec![Some(7.0), Some(8.0), Some(9.0)]);
    }

    // -- Realized long window -------------------------------------------------

    #[test]
    fn test_realized_window_prefers_long() {
        assert_eq!(realized_long_window(150, 50, 100), Some(100));
        assert_eq!(realized_long_window(100, 50, 100), Some(100));
    }

    #[test]
    fn test_realized_window_falls_back_to_short() {
        assert_eq!(realized_long_window(99, 50, 100), Some(50));
        assert_eq!(realized_long_window(50, 50, 100), Some(50));
    }

    #[test]
    fn test_realized_window_gives_up_below_short() {
        assert_eq!(realized_long_window(49, 50, 100), None);
        assert_eq!(realized_long_window(0, 50, 100), None);
    }
}
