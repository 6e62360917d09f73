//! Strong-typed value wrappers shared across the pipeline.

use serde::{Deserialize, Serialize};

/// A USD-quoted price. Absolute prices cannot be negative, so negative
/// inputs clamp to zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct UsdPrice(f64);

impl UsdPrice {
    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 { 0.0 } else { val };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > f64::EPSILON
    }

    /// Formats with thousands separators and two decimals: "$104,321.55".
    pub fn format_usd(self) -> String {
        let cents = (self.0 * 100.0).round() as i64;
        let frac = cents % 100;
        format!("${}.{:02}", group_thousands(cents / 100), frac)
    }
}

impl std::fmt::Display for UsdPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_usd())
    }
}

fn group_thousands(mut n: i64) -> String {
    // n is non-negative here (prices clamp at zero)
    let mut parts = Vec::new();
    loop {
        if n < 1000 {
            parts.push(n.to_string());
            break;
        }
        parts.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    parts.reverse();
    parts.join(",")
}

/// A bounded oscillator reading. The formula cannot leave [0, 100] except
/// through float residue, so the constructor clamps.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct OscValue(f64);

impl OscValue {
    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 {
            0.0
        } else if val > 100.0 {
            100.0
        } else {
            val
        };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for OscValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
