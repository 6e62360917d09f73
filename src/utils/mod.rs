mod time_utils;

pub use time_utils::{TimeUtils, epoch_ms_to_utc_date, format_date, now_epoch_secs};
