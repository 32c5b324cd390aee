//! Utility functions for formatting and display

use chrono::{DateTime, Utc};

/// Format the time since the last session into human-readable text.
///
/// Examples:
/// - None -> "Never played"
/// - today -> "Today"
/// - 1 day ago -> "Yesterday"
/// - 12 days ago -> "12 days ago"
/// - > 60 days -> "2 months ago"
pub fn format_session_recency(last_session: Option<DateTime<Utc>>) -> String {
    let Some(last) = last_session else {
        return "Never played".to_string();
    };

    let diff = Utc::now().signed_duration_since(last);
    let days = diff.num_days();

    if days <= 0 {
        "Today".to_string()
    } else if days == 1 {
        "Yesterday".to_string()
    } else if days < 60 {
        format!("{} days ago", days)
    } else {
        format!("{} months ago", days / 30)
    }
}

/// Get CSS color class based on session recency.
///
/// - < 7 days: "success" (green) - recently played
/// - 7-30 days: "warning" (amber) - getting stale
/// - > 30 days or never: "neutral" (gray) - dormant
pub fn get_session_recency_color(last_session: Option<DateTime<Utc>>) -> &'static str {
    let Some(last) = last_session else {
        return "neutral";
    };

    let days = Utc::now().signed_duration_since(last).num_days();

    if days < 7 {
        "success"
    } else if days <= 30 {
        "warning"
    } else {
        "neutral"
    }
}

/// Format an average party level with one decimal, trimming ".0".
///
/// Examples: 3.0 -> "3", 3.25 -> "3.3"
pub fn format_average_level(level: f32) -> String {
    let rounded = (level * 10.0).round() / 10.0;
    if (rounded - rounded.trunc()).abs() < f32::EPSILON {
        format!("{}", rounded as i32)
    } else {
        format!("{:.1}", rounded)
    }
}

/// Format a date for card footers, e.g. "2026-03-14".
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_session_recency_none() {
        assert_eq!(format_session_recency(None), "Never played");
    }

    #[test]
    fn test_format_session_recency_buckets() {
        let now = Utc::now();
        assert_eq!(format_session_recency(Some(now)), "Today");
        assert_eq!(format_session_recency(Some(now - Duration::days(1))), "Yesterday");
        assert_eq!(format_session_recency(Some(now - Duration::days(12))), "12 days ago");
        assert_eq!(format_session_recency(Some(now - Duration::days(90))), "3 months ago");
    }

    #[test]
    fn test_recency_color_thresholds() {
        let now = Utc::now();
        assert_eq!(get_session_recency_color(None), "neutral");
        assert_eq!(get_session_recency_color(Some(now - Duration::days(2))), "success");
        assert_eq!(get_session_recency_color(Some(now - Duration::days(14))), "warning");
        assert_eq!(get_session_recency_color(Some(now - Duration::days(45))), "neutral");
    }

    #[test]
    fn test_format_average_level() {
        assert_eq!(format_average_level(3.0), "3");
        assert_eq!(format_average_level(3.25), "3.3");
        assert_eq!(format_average_level(0.0), "0");
    }
}
