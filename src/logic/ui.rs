//! Display helpers
//!
//! Pure formatting and timing functions used by the renderer.

use chrono::DateTime;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 3500;

/// Whether a toast shown `elapsed_ms` ago should be dismissed
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Star bar for a 1-5 rating, e.g. `★★★☆☆`
pub fn rating_stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Format a comment date as `Oct 25, 2018`, or return it untouched if it is not RFC3339
pub fn format_comment_date(date: &str) -> String {
    match DateTime::parse_from_rfc3339(date) {
        Ok(parsed) => parsed.format("%b %d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Trailing byline under a comment
pub fn comment_byline(author: &str, date: &str) -> String {
    format!("-- {}, {}", author, format_comment_date(date))
}
