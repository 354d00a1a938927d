//! Shared formatting helpers
//!
//! Durations, priority markers and truncation used by both the command line
//! output and the TUI tables.

use chrono::Duration;

use crate::models::Priority;

/// Render an elapsed duration in its coarsest whole unit, with wording
/// ("1 second", "5 minutes", "3 days").
pub fn format_age(duration: Duration) -> String {
    let seconds = duration.num_seconds();
    let (value, unit) = if seconds < 60 {
        (seconds.max(1), "second")
    } else if seconds < 60 * 60 {
        (duration.num_minutes(), "minute")
    } else if seconds < 24 * 60 * 60 {
        (duration.num_hours(), "hour")
    } else {
        (duration.num_days(), "day")
    };

    if value == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", value, unit)
    }
}

/// Compact form of [`format_age`] for table cells ("42s", "3m", "5h", "2d")
pub fn short_age(duration: Duration) -> String {
    let seconds = duration.num_seconds().max(0);
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 60 * 60 {
        format!("{}m", duration.num_minutes())
    } else if seconds < 24 * 60 * 60 {
        format!("{}h", duration.num_hours())
    } else {
        format!("{}d", duration.num_days())
    }
}

/// Short bracketed marker for a priority
pub fn priority_marker(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "[L]",
        Priority::Medium => "[M]",
        Priority::High => "[H]",
    }
}

/// Truncate to `max` characters, ending with "..." when shortened
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let mut out: String = text.chars().take(max - 3).collect();
    out.push_str("...");
    out
}

/// Display placeholder for an empty string
pub fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}
