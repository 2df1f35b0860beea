//! Pure presentation helpers for user records.
//!
//! These are functions of state only, so rendering the same state twice
//! always produces the same strings. Keeping them here lets the viewer's
//! widgets stay free of formatting logic and makes the rules testable
//! without a UI.

use chrono::{DateTime, Utc};

use crate::user::User;

/// Avatar glyph for a user: the first character of the username, upper-cased.
pub fn avatar_glyph(user: &User) -> char {
    user.username
        .chars()
        .next()
        .map(|c| c.to_uppercase().next().unwrap_or(c))
        .unwrap_or('U')
}

/// Status label driven by the `active` flag.
pub fn status_label(user: &User) -> &'static str {
    if user.active { "Active" } else { "Inactive" }
}

/// Account-creation date, formatted for the detail panel.
pub fn created_label(user: &User) -> String {
    format_date(user.created_at)
}

/// Last-login label: a formatted date-time, or the literal `Never` when the
/// user has no recorded login.
pub fn last_login_label(user: &User) -> String {
    match user.last_login {
        Some(at) => format_date_time(at),
        None => "Never".to_string(),
    }
}

fn format_date(at: DateTime<Utc>) -> String {
    at.format("%b %d, %Y").to_string()
}

fn format_date_time(at: DateTime<Utc>) -> String {
    at.format("%b %d, %Y %H:%M").to_string()
}
