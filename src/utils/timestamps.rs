use chrono::DateTime;

const MS_PER_SECOND: i64 = 1000;

/// Units used for coarse relative ages, largest first (length in seconds)
const TIME_UNITS: [(i64, &str, &str); 6] = [
    (31_536_000, "year", "years"),
    (2_592_000, "month", "months"),
    (604_800, "week", "weeks"),
    (86_400, "day", "days"),
    (3_600, "hour", "hours"),
    (60, "minute", "minutes"),
];

/// Format a millisecond timestamp as a coarse age relative to `now_ms`:
/// - "" when the timestamp is unknown (0)
/// - "just now" under a minute (and for timestamps in the future)
/// - "1 hour ago", "3 days ago", "2 years ago" otherwise
pub fn format_time_ago(timestamp_ms: i64, now_ms: i64) -> String {
    if timestamp_ms == 0 {
        return String::new();
    }

    let elapsed = now_ms.saturating_sub(timestamp_ms) / MS_PER_SECOND;
    if elapsed < 60 {
        return "just now".to_string();
    }

    for (divisor, singular, plural) in TIME_UNITS {
        let value = elapsed / divisor;
        if value == 1 {
            return format!("1 {} ago", singular);
        }
        if value > 1 {
            return format!("{} {} ago", value, plural);
        }
    }

    "just now".to_string()
}

/// Absolute UTC rendering of a millisecond timestamp, "unknown" for 0 or out of range
pub fn format_datetime(timestamp_ms: i64) -> String {
    if timestamp_ms == 0 {
        return "unknown".to_string();
    }
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
