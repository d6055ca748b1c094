//! Display helpers for flight timestamps. All output is in UTC.

use chrono::{DateTime, Utc};

/// Shown in place of a time or duration that is missing or invalid.
pub const PLACEHOLDER: &str = "—";

fn parse(iso: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(iso)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// `HH:MM`, 24 hour clock.
pub fn fmt_time(iso: Option<&str>) -> String {
    iso.and_then(parse)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// `DD/MM/YYYY`.
pub fn fmt_date(iso: Option<&str>) -> String {
    iso.and_then(parse)
        .map(|dt| dt.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// `"4h 15m"`. Non-positive spans render as the placeholder.
pub fn fmt_duration(from: Option<&str>, to: Option<&str>) -> String {
    let (Some(from), Some(to)) = (from.and_then(parse), to.and_then(parse)) else {
        return PLACEHOLDER.to_string();
    };
    let span = to - from;
    if span.num_milliseconds() <= 0 {
        return PLACEHOLDER.to_string();
    }
    let total_min = span.num_minutes();
    format!("{}h {:02}m", total_min / 60, total_min % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEP: &str = "2025-06-04T16:40:00Z";
    const ARR: &str = "2025-06-04T20:55:00Z";

    #[test]
    fn test_fmt_time_is_24h_utc() {
        assert_eq!(fmt_time(Some(DEP)), "16:40");
        assert_eq!(fmt_time(Some(ARR)), "20:55");
        assert_eq!(fmt_time(Some("2025-06-04T23:10:00+02:00")), "21:10");
    }

    #[test]
    fn test_fmt_date() {
        assert_eq!(fmt_date(Some(DEP)), "04/06/2025");
    }

    #[test]
    fn test_fmt_duration() {
        assert_eq!(fmt_duration(Some(DEP), Some(ARR)), "4h 15m");
        assert_eq!(fmt_duration(Some(DEP), Some("2025-06-04T16:45:30Z")), "0h 05m");
        assert_eq!(fmt_duration(Some(ARR), Some(DEP)), PLACEHOLDER);
        assert_eq!(fmt_duration(Some(DEP), Some(DEP)), PLACEHOLDER);
    }

    #[test]
    fn test_missing_or_invalid_input() {
        assert_eq!(fmt_time(None), PLACEHOLDER);
        assert_eq!(fmt_date(Some("not a date")), PLACEHOLDER);
        assert_eq!(fmt_duration(None, Some(ARR)), PLACEHOLDER);
    }
}
