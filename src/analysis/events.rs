//! Event counting and monthly aggregation over classified days.
//!
//! An "event" is a maximal run of consecutive `true` rows in a flag column.
//! The monthly rollup first concatenates each bucket's rows in chronological
//! order and then counts runs inside the concatenation, so a run that crosses
//! a bucket boundary is counted once per bucket it touches.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, Month};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::config::MonthlyGrouping;
use crate::domain::ClassifiedDay;

/// Number of maximal `true` runs. Collapsing consecutive duplicates leaves
/// one element per run, so counting the remaining `true`s counts the runs.
pub fn count_events(column: &[bool]) -> usize {
    column.iter().dedup().filter(|&&flag| flag).count()
}

/// Number of `true` rows.
pub fn count_days(column: &[bool]) -> usize {
    column.iter().filter(|&&flag| flag).count()
}

/// Whole-window tallies for the metrics block. Events and days for the two
/// threshold flags, day counts for the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagStats {
    pub oversold_events: usize,
    pub oversold_days: usize,
    pub overbought_events: usize,
    pub overbought_days: usize,
    pub extreme_oversold_days: usize,
    pub extreme_overbought_days: usize,
    pub buy_uptrend_days: usize,
    pub sell_downtrend_days: usize,
    pub buy_risky_days: usize,
    pub sell_uptrend_days: usize,
}

pub fn flag_stats(days: &[ClassifiedDay]) -> FlagStats {
    let oversold: Vec<bool> = days.iter().map(|day| day.flags.oversold).collect();
    let overbought: Vec<bool> = days.iter().map(|day| day.flags.overbought).collect();
    let tally = |pick: fn(&ClassifiedDay) -> bool| days.iter().filter(|day| pick(day)).count();
    FlagStats {
        oversold_events: count_events(&oversold),
        oversold_days: count_days(&oversold),
        overbought_events: count_events(&overbought),
        overbought_days: count_days(&overbought),
        extreme_oversold_days: tally(|day| day.flags.extreme_oversold),
        extreme_overbought_days: tally(|day| day.flags.extreme_overbought),
        buy_uptrend_days: tally(|day| day.flags.buy_uptrend),
        sell_downtrend_days: tally(|day| day.flags.sell_downtrend),
        buy_risky_days: tally(|day| day.flags.buy_risky),
        sell_uptrend_days: tally(|day| day.flags.sell_uptrend),
    }
}

/// Bucket key for the monthly rollup. `MonthOfYear` folds every year's March
/// into one bucket; `YearMonth` keeps calendar months distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MonthKey {
    MonthOfYear(u32),
    YearMonth { year: i32, month: u32 },
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthKey::MonthOfYear(month) => match Month::try_from(*month as u8) {
                Ok(named) => write!(f, "{}", named.name()),
                Err(_) => write!(f, "month {month}"),
            },
            MonthKey::YearMonth { year, month } => write!(f, "{year}-{month:02}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    pub key: MonthKey,
    pub oversold_events: usize,
    pub overbought_events: usize,
    pub buy_uptrend_days: usize,
    pub sell_downtrend_days: usize,
}

#[derive(Default)]
struct BucketColumns {
    oversold: Vec<bool>,
    overbought: Vec<bool>,
    buy_uptrend_days: usize,
    sell_downtrend_days: usize,
}

/// Per-bucket event counts plus composite day counts, sorted by key. Rows
/// land in their bucket in chronological order before runs are counted, so
/// under `MonthOfYear` a run ending one March and a run opening the next
/// year's March fuse into a single bucket event.
pub fn monthly_rollup(days: &[ClassifiedDay], grouping: MonthlyGrouping) -> Vec<MonthlyBucket> {
    let mut buckets: BTreeMap<MonthKey, BucketColumns> = BTreeMap::new();
    for day in days {
        let key = match grouping {
            MonthlyGrouping::MonthOfYear => MonthKey::MonthOfYear(day.date.month()),
            MonthlyGrouping::YearMonth => MonthKey::YearMonth {
                year: day.date.year(),
                month: day.date.month(),
            },
        };
        let bucket = buckets.entry(key).or_default();
        bucket.oversold.push(day.flags.oversold);
        bucket.overbought.push(day.flags.overbought);
        bucket.buy_uptrend_days += usize::from(day.flags.buy_uptrend);
        bucket.sell_downtrend_days += usize::from(day.flags.sell_downtrend);
    }
    buckets
        .into_iter()
        .map(|(key, columns)| MonthlyBucket {
            key,
            oversold_events: count_events(&columns.oversold),
            overbought_events: count_events(&columns.overbought),
            buy_uptrend_days: columns.buy_uptrend_days,
            sell_downtrend_days: columns.sell_downtrend_days,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OscValue, UsdPrice};
    use crate::domain::DayFlags;
    use chrono::NaiveDate;

    fn day(date: NaiveDate, oversold: bool, overbought: bool) -> ClassifiedDay {
        ClassifiedDay {
            date,
            close: UsdPrice::new(100.0),
            oscillator: OscValue::new(50.0),
            sma_short: UsdPrice::new(100.0),
            sma_long: UsdPrice::new(100.0),
            flags: DayFlags {
                oversold,
                overbought,
                ..DayFlags::default()
            },
        }
    }

    fn run_of_days(start: NaiveDate, oversold: &[bool]) -> Vec<ClassifiedDay> {
        oversold
            .iter()
            .enumerate()
            .map(|(i, &flag)| {
                let date = start + chrono::Days::new(i as u64);
                day(date, flag, false)
            })
            .collect()
    }

    // -- Run counting ---------------------------------------------------------

    #[test]
    fn test_events_count_maximal_runs() {
        assert_eq!(count_events(&[]), 0);
        assert_eq!(count_events(&[false, false]), 0);
        assert_eq!(count_events(&[true, true, true]), 1);
        assert_eq!(count_events(&[true, false, true, true, false, true]), 3);
    }

    #[test]
    fn test_events_never_exceed_days() {
        let column = [true, true, false, true, false, false, true, true, true];
        assert!(count_events(&column) <= count_days(&column));
        // Isolated days make the two counts meet.
        let isolated = [true, false, true, false, true];
        assert_eq!(count_events(&isolated), count_days(&isolated));
    }

    // -- Stats ----------------------------------------------------------------

    #[test]
    fn test_flag_stats_tallies_columns_independently() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let mut days = run_of_days(start, &[true, true, false, true]);
        days[2].flags.overbought = true;
        days[2].flags.sell_uptrend = true;
        let stats = flag_stats(&days);
        assert_eq!(stats.oversold_events, 2);
        assert_eq!(stats.oversold_days, 3);
        assert_eq!(stats.overbought_events, 1);
        assert_eq!(stats.overbought_days, 1);
        assert_eq!(stats.sell_uptrend_days, 1);
        assert_eq!(stats.buy_uptrend_days, 0);
    }

    #[test]
    fn test_flag_stats_on_empty_window() {
        assert_eq!(flag_stats(&[]), FlagStats::default());
    }

    // -- Monthly rollup -------------------------------------------------------

    #[test]
    fn test_run_across_month_boundary_counts_once_per_bucket() {
        // Jan 30 .. Feb 2, all oversold: one whole-window event, two buckets.
        let start = NaiveDate::from_ymd_opt(2025, 1, 30).unwrap();
        let days = run_of_days(start, &[true, true, true, true]);
        let column: Vec<bool> = days.iter().map(|d| d.flags.oversold).collect();
        assert_eq!(count_events(&column), 1);

        let monthly = monthly_rollup(&days, MonthlyGrouping::YearMonth);
        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly[0].key, MonthKey::YearMonth { year: 2025, month: 1 });
        assert_eq!(monthly[0].oversold_events, 1);
        assert_eq!(monthly[1].oversold_events, 1);

        let bucket_sum: usize = monthly.iter().map(|b| b.oversold_events).sum();
        assert!(bucket_sum >= count_events(&column));
    }

    #[test]
    fn test_month_of_year_fuses_same_month_across_years() {
        // A March 2024 run and a March 2025 run, separated by months of quiet.
        let mut days = run_of_days(
            NaiveDate::from_ymd_opt(2024, 3, 29).unwrap(),
            &[true, true, true],
        );
        days.extend(run_of_days(
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            &[false, false],
        ));
        days.extend(run_of_days(
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            &[true, true],
        ));

        let by_month = monthly_rollup(&days, MonthlyGrouping::MonthOfYear);
        let march = by_month
            .iter()
            .find(|b| b.key == MonthKey::MonthOfYear(3))
            .unwrap();
        assert_eq!(march.oversold_events, 1);

        let by_year_month = monthly_rollup(&days, MonthlyGrouping::YearMonth);
        let march_events: usize = by_year_month
            .iter()
            .filter(|b| matches!(b.key, MonthKey::YearMonth { month: 3, .. }))
            .map(|b| b.oversold_events)
            .sum();
        assert_eq!(march_events, 2);
    }

    #[test]
    fn test_buckets_come_out_sorted() {
        let mut days = run_of_days(
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            &[true, false],
        );
        days.extend(run_of_days(
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            &[true],
        ));
        let monthly = monthly_rollup(&days, MonthlyGrouping::MonthOfYear);
        let keys: Vec<MonthKey> = monthly.iter().map(|b| b.key).collect();
        assert_eq!(keys, vec![MonthKey::MonthOfYear(2), MonthKey::MonthOfYear(5)]);
    }

    #[test]
    fn test_rollup_sums_composite_days_per_bucket() {
        let start = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let mut days = run_of_days(start, &[true, true, false, true]);
        for (i, day) in days.iter_mut().enumerate() {
            day.flags.buy_uptrend = day.flags.oversold;
            day.flags.sell_downtrend = i == 2;
        }
        let monthly = monthly_rollup(&days, MonthlyGrouping::MonthOfYear);
        assert_eq!(monthly.len(), 1);
        assert_eq!(monthly[0].buy_uptrend_days, 3);
        assert_eq!(monthly[0].sell_downtrend_days, 1);
        // Day counts sum plainly; only the event columns are run-based.
        assert_eq!(monthly[0].oversold_events, 2);
    }

    #[test]
    fn test_month_key_display() {
        assert_eq!(MonthKey::MonthOfYear(3).to_string(), "March");
        assert_eq!(
            MonthKey::YearMonth { year: 2025, month: 3 }.to_string(),
            "2025-03"
        );
    }
}
