use matcha_model::{InteractionCounts, User, UserId, UserStats};

use crate::state::Screen;

/// Mount epoch for in-flight requests.
///
/// Every screen entry bumps the epoch; completions carry the epoch they were
/// issued under so the update loop can discard results whose requesting
/// screen has already been torn down.
pub type Epoch = u64;

#[derive(Debug, Clone)]
pub enum Message {
    /// Switch to another screen, tearing down the current one.
    Navigate(Screen),
    /// Re-fetch the user list without leaving the Users screen.
    RefreshUsers,
    /// A user card was clicked.
    UserSelected(User),

    // Async completions
    UsersLoaded(Epoch, Result<Vec<User>, String>),
    StatsLoaded(Epoch, Result<UserStats, String>),
    InteractionsLoaded(Epoch, UserId, Result<InteractionCounts, String>),
    HealthChecked(Result<String, String>),
}

impl Message {
    /// Short name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Message::Navigate(_) => "Navigate",
            Message::RefreshUsers => "RefreshUsers",
            Message::UserSelected(_) => "UserSelected",
            Message::UsersLoaded(..) => "UsersLoaded",
            Message::StatsLoaded(..) => "StatsLoaded",
            Message::InteractionsLoaded(..) => "InteractionsLoaded",
            Message::HealthChecked(_) => "HealthChecked",
        }
    }
}
