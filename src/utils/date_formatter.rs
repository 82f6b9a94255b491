use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmartDateFormat {
    DayMonth,   // 12 Jan
    HourMin,    // 10:30
    HourMinSec, // 10:30:15
}

/// Picks a label format from the time span covered by a series, in milliseconds.
pub fn determine_date_format(span_ms: i64) -> SmartDateFormat {
    const MINUTE: i64 = 60 * 1000;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;

    let span = span_ms.abs();
    if span > DAY * 3 / 2 {
        SmartDateFormat::DayMonth
    } else if span > MINUTE * 5 {
        SmartDateFormat::HourMin
    } else {
        SmartDateFormat::HourMinSec
    }
}

/// Formats an epoch-millisecond timestamp in UTC.
pub fn format_timestamp(timestamp_ms: i64, format: SmartDateFormat) -> String {
    let Some(dt) = DateTime::<Utc>::from_timestamp_millis(timestamp_ms) else {
        return timestamp_ms.to_string();
    };

    match format {
        SmartDateFormat::DayMonth => dt.format("%d %b").to_string(),
        SmartDateFormat::HourMin => dt.format("%H:%M").to_string(),
        SmartDateFormat::HourMinSec => dt.format("%H:%M:%S").to_string(),
    }
}

/// 24h `HH:MM`, as shown in tooltips and X-axis labels.
pub fn format_tooltip_time(timestamp_ms: i64) -> String {
    format_timestamp(timestamp_ms, SmartDateFormat::HourMin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltip_time_is_zero_padded() {
        // 1970-01-01 03:07:09 UTC
        assert_eq!(format_tooltip_time(11_229_000), "03:07");
    }

    #[test]
    fn test_format_by_span() {
        assert_eq!(determine_date_format(60_000), SmartDateFormat::HourMinSec);
        assert_eq!(determine_date_format(3_600_000), SmartDateFormat::HourMin);
        assert_eq!(determine_date_format(3 * 86_400_000), SmartDateFormat::DayMonth);
    }
}
