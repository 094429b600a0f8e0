//! Utility functions

use chrono::Duration;
use rust_decimal::Decimal;

pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Trims an optional free-text field, collapsing blank input to `None`.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn format_money(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// Elapsed time as `MM:SS`, or `H:MM:SS` past the hour. Negative spans clamp to zero.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.num_seconds().max(0);
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}
