use iced::Task;

use crate::message::Message;
use crate::state::{Screen, State};

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    log::trace!("update::{}", message.name());

    match message {
        Message::Navigate(screen) => {
            // Entering a screen is a fresh mount: the previous screen's
            // transient view model is discarded and in-flight completions
            // from it are invalidated by the epoch bump.
            state.epoch += 1;
            state.users.clear();
            state.selected_user = None;
            state.selected_interactions = None;
            state.screen = screen;

            match screen {
                // Prior stats stay visible while the refresh is in flight.
                Screen::Home => state.load_stats(),
                Screen::Users => state.load_users(),
            }
        }

        Message::RefreshUsers => {
            if state.screen != Screen::Users {
                return Task::none();
            }
            // Same epoch: the screen was not torn down, the list is simply
            // re-fetched and replaced on success.
            state.load_users()
        }

        Message::UserSelected(user) => {
            let user_id = user.id;
            state.selected_user = Some(user);
            state.selected_interactions = None;

            let api = state.api.clone();
            let epoch = state.epoch;
            Task::perform(
                async move {
                    api.fetch_user_interactions(user_id)
                        .await
                        .map_err(|e| e.to_string())
                },
                move |result| Message::InteractionsLoaded(epoch, user_id, result),
            )
        }

        Message::UsersLoaded(epoch, result) => {
            if epoch != state.epoch {
                log::debug!("Discarding stale user list (epoch {epoch})");
                return Task::none();
            }
            match result {
                Ok(users) => {
                    log::info!("Loaded {} users", users.len());

                    // Rebind the selection to the fresh record with the same
                    // id, or clear it when that user is gone.
                    if let Some(selected) = state.selected_user.take() {
                        state.selected_user =
                            users.iter().find(|u| u.id == selected.id).cloned();
                        if state.selected_user.is_none() {
                            log::debug!(
                                "Selected user {} disappeared on reload",
                                selected.id
                            );
                            state.selected_interactions = None;
                        }
                    }

                    state.users = users;
                }
                Err(err) => {
                    // Load failure is logged and swallowed; the list keeps
                    // whatever it last held.
                    log::error!("Error fetching users: {err}");
                }
            }
            Task::none()
        }

        Message::StatsLoaded(epoch, result) => {
            if epoch != state.epoch {
                log::debug!("Discarding stale user stats (epoch {epoch})");
                return Task::none();
            }
            match result {
                Ok(stats) => state.stats = Some(stats),
                Err(err) => log::error!("Error fetching user stats: {err}"),
            }
            Task::none()
        }

        Message::InteractionsLoaded(epoch, user_id, result) => {
            if epoch != state.epoch {
                log::debug!("Discarding stale interaction counts (epoch {epoch})");
                return Task::none();
            }
            // A later click may have superseded this fetch.
            let still_selected = state
                .selected_user
                .as_ref()
                .is_some_and(|u| u.id == user_id);
            if !still_selected {
                log::debug!("Discarding interaction counts for unselected user {user_id}");
                return Task::none();
            }
            match result {
                Ok(counts) => state.selected_interactions = Some(counts),
                Err(err) => {
                    log::error!("Error fetching interactions for user {user_id}: {err}");
                }
            }
            Task::none()
        }

        Message::HealthChecked(result) => {
            match result {
                Ok(body) => log::info!("Backend reachable: {body}"),
                Err(err) => log::warn!("Backend health check failed: {err}"),
            }
            Task::none()
        }
    }
}
