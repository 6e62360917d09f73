//! Terminal rendering of a momentum report: metrics block plus five tables.

use std::fmt::Write as _;

use tabled::{Table, Tabled, settings::Style};

use crate::analysis::{HistoryStatus, MomentumReport, MonthlyBucket};
use crate::config::{AnalysisConfig, SIGNALS};
use crate::domain::{ClassifiedDay, InteractionRecord};
use crate::utils::format_date;

#[derive(Tabled)]
struct MonthlyRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Oversold Events")]
    oversold_events: usize,
    #[tabled(rename = "Overbought Events")]
    overbought_events: usize,
    #[tabled(rename = "Buy Uptrend Days")]
    buy_uptrend_days: usize,
    #[tabled(rename = "Sell Downtrend Days")]
    sell_downtrend_days: usize,
}

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "RSI")]
    rsi: String,
    #[tabled(rename = "Price")]
    price: String,
}

#[derive(Tabled)]
struct ExtremeRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "RSI")]
    rsi: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Type")]
    kind: String,
}

#[derive(Tabled)]
struct InteractionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "RSI")]
    rsi: String,
    #[tabled(rename = "Position")]
    position: String,
}

fn render_table<R: Tabled>(rows: Vec<R>) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn day_row(day: &ClassifiedDay) -> DayRow {
    DayRow {
        date: format_date(day.date),
        rsi: day.oscillator.to_string(),
        price: day.close.format_usd(),
    }
}

fn metrics_block(ticker: &str, config: &AnalysisConfig, report: &MomentumReport) -> String {
    let mut out = String::new();
    if let Some(live) = &report.live {
        let _ = writeln!(out, "Live price ({ticker}): {}", live.live_price.format_usd());
        let _ = writeln!(
            out,
            "Latest RSI({}): {}",
            config.oscillator.period, live.latest_oscillator
        );
        let _ = writeln!(out, "Signal: {}", live.signal);
        let _ = writeln!(out, "Position: {}", live.position);
    }
    let stats = &report.stats;
    let thresholds = &SIGNALS.thresholds;
    let _ = writeln!(
        out,
        "Oversold events (RSI < {}): {} ({} days)",
        thresholds.oversold, stats.oversold_events, stats.oversold_days
    );
    let _ = writeln!(
        out,
        "Overbought events (RSI > {}): {} ({} days)",
        thresholds.overbought, stats.overbought_events, stats.overbought_days
    );
    let _ = writeln!(out, "Buy uptrend days: {}", stats.buy_uptrend_days);
    let _ = writeln!(out, "Sell downtrend days: {}", stats.sell_downtrend_days);
    let _ = writeln!(out, "Buy risky days: {}", stats.buy_risky_days);
    let _ = writeln!(out, "Sell uptrend days: {}", stats.sell_uptrend_days);
    if let HistoryStatus::Ready {
        realized_long_window,
        ..
    } = report.status
    {
        if realized_long_window == config.trend.long_window {
            let _ = writeln!(out, "SMA-long window: {realized_long_window} days");
        } else {
            let _ = writeln!(
                out,
                "SMA-long window: {realized_long_window} days (fallback from {})",
                config.trend.long_window
            );
        }
    }
    out
}

fn monthly_section(monthly: &[MonthlyBucket]) -> String {
    let rows: Vec<MonthlyRow> = monthly
        .iter()
        .map(|bucket| MonthlyRow {
            month: bucket.key.to_string(),
            oversold_events: bucket.oversold_events,
            overbought_events: bucket.overbought_events,
            buy_uptrend_days: bucket.buy_uptrend_days,
            sell_downtrend_days: bucket.sell_downtrend_days,
        })
        .collect();
    format!("Monthly summary\n{}", render_table(rows))
}

fn oversold_section(days: &[ClassifiedDay]) -> String {
    let rows: Vec<DayRow> = days
        .iter()
        .filter(|day| day.flags.oversold)
        .map(day_row)
        .collect();
    let heading = format!("Oversold days (RSI < {})", SIGNALS.thresholds.oversold);
    if rows.is_empty() {
        format!(
            "{heading}\nNo oversold days (RSI < {}) in the window.",
            SIGNALS.thresholds.oversold
        )
    } else {
        format!("{heading}\n{}", render_table(rows))
    }
}

fn overbought_section(days: &[ClassifiedDay]) -> String {
    let rows: Vec<DayRow> = days
        .iter()
        .filter(|day| day.flags.overbought)
        .map(day_row)
        .collect();
    let heading = format!("Overbought days (RSI > {})", SIGNALS.thresholds.overbought);
    if rows.is_empty() {
        format!(
            "{heading}\nNo overbought days (RSI > {}) in the window.",
            SIGNALS.thresholds.overbought
        )
    } else {
        format!("{heading}\n{}", render_table(rows))
    }
}

fn extreme_section(report: &MomentumReport) -> String {
    let thresholds = &SIGNALS.thresholds;
    let rows: Vec<ExtremeRow> = report
        .days
        .iter()
        .filter(|day| day.flags.extreme_oversold || day.flags.extreme_overbought)
        .map(|day| ExtremeRow {
            date: format_date(day.date),
            rsi: day.oscillator.to_string(),
            price: day.close.format_usd(),
            // The label follows the flag, so it stays consistent with the
            // classification whichever rounding policy produced it.
            kind: if day.flags.extreme_oversold {
                "Extreme Oversold".to_string()
            } else {
                "Extreme Overbought".to_string()
            },
        })
        .collect();
    let heading = format!(
        "Extreme days (RSI < {} or RSI > {})",
        thresholds.extreme_oversold, thresholds.extreme_overbought
    );
    if rows.is_empty() {
        return format!("{heading}\nNo extreme days in the window.");
    }
    let summary = format!(
        "Extreme days: {} (RSI < {}: {}, RSI > {}: {})",
        rows.len(),
        thresholds.extreme_oversold,
        report.stats.extreme_oversold_days,
        thresholds.extreme_overbought,
        report.stats.extreme_overbought_days
    );
    format!("{heading}\n{}\n{summary}", render_table(rows))
}

fn interactions_section(ticker: &str, interactions: &[InteractionRecord]) -> String {
    let heading = format!("Interactions with the long trend for {ticker}");
    if interactions.is_empty() {
        return format!("{heading}\nNo interactions in the window.");
    }
    let count_line = if interactions.len() == 1 {
        "Found 1 interaction in the window.".to_string()
    } else {
        format!("Found {} interactions in the window.", interactions.len())
    };
    let rows: Vec<InteractionRow> = interactions
        .iter()
        .map(|record| InteractionRow {
            date: format_date(record.date),
            kind: record.category.to_string(),
            price: record.price.format_usd(),
            rsi: record.oscillator.to_string(),
            position: record.position.to_string(),
        })
        .collect();
    format!("{heading}\n{count_line}\n{}", render_table(rows))
}

/// The whole report as one printable string. An insufficient-history run
/// renders a single notice instead of tables.
pub fn render_report(ticker: &str, config: &AnalysisConfig, report: &MomentumReport) -> String {
    match report.status {
        HistoryStatus::Insufficient {
            fetched,
            usable_after_oscillator,
            short_window,
        } => {
            format!(
                "Not enough history for {ticker}: fetched {fetched} closes, \
                 {usable_after_oscillator} with an RSI reading; the short SMA window \
                 needs {short_window}. Try a longer lookback.\n"
            )
        }
        HistoryStatus::Ready { .. } => {
            let sections = [
                metrics_block(ticker, config, report),
                monthly_section(&report.monthly),
                oversold_section(&report.days),
                overbought_section(&report.days),
                extreme_section(report),
                interactions_section(ticker, &report.interactions),
            ];
            let mut out = sections.join("\n");
            out.push('\n');
            out
        }
    }
}
