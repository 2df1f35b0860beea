//! User records as served by the analytics backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque unique identifier for a user.
///
/// The backend assigns these from an identity column; the viewer only ever
/// compares them and echoes them back into request paths.
pub type UserId = i64;

/// A registered user as reported by `GET /api/analytics/users`.
///
/// The viewer holds a transient cached copy of these records; the backend
/// owns them. Field names on the wire are camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier, stable per user.
    pub id: UserId,
    /// Display name, non-empty.
    pub username: String,
    /// Contact address shown alongside the username.
    pub email: String,
    /// Timestamp of account creation, always present.
    pub created_at: DateTime<Utc>,
    /// Timestamp of most recent login; absent means the user never logged in.
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
    /// Whether the account is active.
    pub active: bool,
}
