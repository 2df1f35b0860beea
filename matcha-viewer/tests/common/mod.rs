//! Shared fixtures for the viewer's state-machine tests.
#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use matcha_model::{User, UserId};
use matcha_viewer::api_client::ApiClient;
use matcha_viewer::state::State;

pub fn make_user(id: UserId, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        email: format!("{username}@x.com"),
        created_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
        last_login: None,
        active: true,
    }
}

pub fn make_state() -> State {
    State::new(ApiClient::new("http://localhost:5002".to_string()))
}
