use iced::Task;
use matcha_model::{InteractionCounts, User, UserStats};

use crate::api_client::ApiClient;
use crate::config::Config;
use crate::message::{Epoch, Message};

/// Top-level screens reachable from the header bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Users,
}

/// Application state.
///
/// `users` and `selected_user` are the user-list screen's view model: the
/// list is replaced wholesale on each successful load and both are discarded
/// when the screen is left. Neither is persisted.
#[derive(Debug, Clone)]
pub struct State {
    pub api: ApiClient,
    pub screen: Screen,
    /// Bumped on every screen entry; see [`Epoch`].
    pub epoch: Epoch,

    // Users screen
    pub users: Vec<User>,
    pub selected_user: Option<User>,
    /// Interaction counts for the selected user, once their fetch lands.
    pub selected_interactions: Option<InteractionCounts>,

    // Home screen
    pub stats: Option<UserStats>,
}

impl State {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            screen: Screen::default(),
            epoch: 0,
            users: Vec::new(),
            selected_user: None,
            selected_interactions: None,
            stats: None,
        }
    }

    /// Initial state plus boot tasks: one reachability probe and the Home
    /// screen's stats fetch.
    pub fn boot(config: &Config) -> (Self, Task<Message>) {
        let state = Self::new(ApiClient::new(config.server_url.clone()));

        let health_api = state.api.clone();
        let health = Task::perform(
            async move { health_api.health_check().await.map_err(|e| e.to_string()) },
            Message::HealthChecked,
        );

        let epoch = state.epoch;
        let stats_api = state.api.clone();
        let stats = Task::perform(
            async move { stats_api.fetch_user_stats().await.map_err(|e| e.to_string()) },
            move |result| Message::StatsLoaded(epoch, result),
        );

        (state, Task::batch([health, stats]))
    }

    /// Fetch the user list under the current epoch.
    pub fn load_users(&self) -> Task<Message> {
        let api = self.api.clone();
        let epoch = self.epoch;
        Task::perform(
            async move { api.fetch_users().await.map_err(|e| e.to_string()) },
            move |result| Message::UsersLoaded(epoch, result),
        )
    }

    /// Fetch aggregate stats under the current epoch.
    pub fn load_stats(&self) -> Task<Message> {
        let api = self.api.clone();
        let epoch = self.epoch;
        Task::perform(
            async move { api.fetch_user_stats().await.map_err(|e| e.to_string()) },
            move |result| Message::StatsLoaded(epoch, result),
        )
    }
}
