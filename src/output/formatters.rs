//! Reusable formatting utilities for CLI output

use chrono::{DateTime, Duration, Utc};

/// Format an applied date for tables.
///
/// # Example output
/// `Jan 14, 2025`
pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(dt) => dt.format("%b %d, %Y").to_string(),
        None => "N/A".to_string(),
    }
}

/// Format time left until `expires_at` as of `now`.
///
/// # Example output
/// - `expires in 1h 5m`
/// - `expires in 12m`
/// - `expired`
pub fn format_expiry(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let remaining: Duration = expires_at.signed_duration_since(now);
    if remaining <= Duration::zero() {
        return "expired".to_string();
    }

    let hours = remaining.num_hours();
    let mins = remaining.num_minutes() % 60;
    if hours > 0 {
        format!("expires in {}h {}m", hours, mins)
    } else {
        format!("expires in {}m", mins)
    }
}
