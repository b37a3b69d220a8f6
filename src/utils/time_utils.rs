use chrono::{DateTime, Datelike, TimeZone};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_5_MIN: i64 = Self::MS_IN_S * 60 * 5;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
    /// Year-less key used by fixed (Gregorian) calendar events
    pub const FIXED_DATE_FORMAT: &str = "%m-%d";

    /// The two calendar keys for a day: `("MM-DD", "YYYY-MM-DD")`.
    pub fn date_keys<D: Datelike>(date: &D) -> (String, String) {
        let fixed = format!("{:02}-{:02}", date.month(), date.day());
        let full = format!("{:04}-{}", date.year(), fixed);
        (fixed, full)
    }
}

/// Milliseconds from `now` until the next local midnight of `now`'s timezone.
/// Falls back to a full day when that midnight does not exist locally.
pub fn ms_until_next_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> u64 {
    let next_midnight = now
        .date_naive()
        .succ_opt()
        .and_then(|tomorrow| tomorrow.and_hms_opt(0, 0, 0))
        .and_then(|naive| now.timezone().from_local_datetime(&naive).earliest());

    match next_midnight {
        Some(midnight) => midnight
            .signed_duration_since(now)
            .num_milliseconds()
            .max(0) as u64,
        None => TimeUtils::MS_IN_D as u64,
    }
}
