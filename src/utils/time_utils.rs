use chrono::{DateTime, NaiveDate, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_DATE_FORMAT: &str = "%Y-%m-%d";
}

// Time helper functions

/// Epoch milliseconds to a UTC calendar date.
/// Truncation to the date happens in UTC, so runs from any machine timezone
/// see the same series. `None` for timestamps chrono cannot represent.
pub fn epoch_ms_to_utc_date(epoch_ms: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(epoch_ms).map(|dt| dt.date_naive())
}

pub fn format_date(date: NaiveDate) -> String {
    format!("{}", date.format(TimeUtils::STANDARD_DATE_FORMAT))
}

pub fn now_epoch_secs() -> i64 {
    Utc::now().timestamp()
}
