//! Interaction statistics as served by the analytics backend.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The kinds of interaction the backend tracks between users.
///
/// Wire strings are SCREAMING_SNAKE, matching the backend's enum names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InteractionType {
    ProfileView,
    Like,
    Unlike,
    Message,
    Match,
}

impl InteractionType {
    /// All tracked interaction kinds, in display order.
    pub const ALL: [InteractionType; 5] = [
        InteractionType::ProfileView,
        InteractionType::Like,
        InteractionType::Unlike,
        InteractionType::Message,
        InteractionType::Match,
    ];

    /// Human-readable label for the stats panels.
    pub fn label(self) -> &'static str {
        match self {
            InteractionType::ProfileView => "Profile views",
            InteractionType::Like => "Likes",
            InteractionType::Unlike => "Unlikes",
            InteractionType::Message => "Messages",
            InteractionType::Match => "Matches",
        }
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-type interaction counts for a single user, from
/// `GET /api/analytics/stats/users/{id}/interactions`.
///
/// The backend serializes this as a flat JSON object keyed by the wire name
/// of each [`InteractionType`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InteractionCounts(pub BTreeMap<InteractionType, u64>);

impl InteractionCounts {
    /// Count for one interaction kind, zero when the backend omitted it.
    pub fn get(&self, ty: InteractionType) -> u64 {
        self.0.get(&ty).copied().unwrap_or(0)
    }

    /// Total interactions across all kinds.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }
}

/// Aggregate user statistics from `GET /api/analytics/stats/users`.
///
/// `interaction_stats` covers the trailing 30 days; the window is computed
/// server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_users: u64,
    #[serde(default)]
    pub active_users: u64,
    #[serde(default)]
    pub interaction_stats: InteractionCounts,
}
