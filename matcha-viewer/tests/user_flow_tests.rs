//! User list view-model tests
//!
//! These drive the update loop with messages and assert on state: initial
//! emptiness, wholesale replacement on load, swallowed load failures,
//! single-selection semantics, and epoch-based discarding of late
//! completions.

mod common;

use common::{make_state, make_user};
use matcha_model::InteractionCounts;
use matcha_viewer::message::Message;
use matcha_viewer::state::Screen;
use matcha_viewer::update::update;

#[tokio::test]
async fn initial_state_is_empty_with_no_selection() {
    let mut state = make_state();
    assert!(state.users.is_empty());
    assert!(state.selected_user.is_none());

    // Entering the Users screen kicks off the fetch but the list stays
    // empty until the response lands.
    let _ = update(&mut state, Message::Navigate(Screen::Users));
    assert_eq!(state.screen, Screen::Users);
    assert!(state.users.is_empty());
    assert!(state.selected_user.is_none());
}

#[tokio::test]
async fn successful_load_replaces_users_in_order() {
    let mut state = make_state();
    let _ = update(&mut state, Message::Navigate(Screen::Users));

    let users = vec![make_user(1, "alice"), make_user(2, "bob"), make_user(3, "carol")];
    let epoch = state.epoch;
    let _ = update(
        &mut state,
        Message::UsersLoaded(epoch, Ok(users.clone())),
    );

    assert_eq!(state.users, users);
    assert!(state.selected_user.is_none());
}

#[tokio::test]
async fn failed_load_leaves_users_untouched() {
    let mut state = make_state();
    let _ = update(&mut state, Message::Navigate(Screen::Users));

    let users = vec![make_user(1, "alice")];
    let epoch = state.epoch;
    let _ = update(
        &mut state,
        Message::UsersLoaded(epoch, Ok(users.clone())),
    );

    let epoch = state.epoch;
    let _ = update(
        &mut state,
        Message::UsersLoaded(epoch, Err("HTTP 500".to_string())),
    );
    assert_eq!(state.users, users);
}

#[tokio::test]
async fn failed_first_load_keeps_list_empty() {
    let mut state = make_state();
    let _ = update(&mut state, Message::Navigate(Screen::Users));

    let epoch = state.epoch;
    let _ = update(
        &mut state,
        Message::UsersLoaded(epoch, Err("connection refused".to_string())),
    );
    assert!(state.users.is_empty());
}

#[tokio::test]
async fn selection_is_replaced_never_accumulated() {
    let mut state = make_state();
    let _ = update(&mut state, Message::Navigate(Screen::Users));

    let a = make_user(1, "alice");
    let b = make_user(2, "bob");
    let epoch = state.epoch;
    let _ = update(
        &mut state,
        Message::UsersLoaded(epoch, Ok(vec![a.clone(), b.clone()])),
    );

    let _ = update(&mut state, Message::UserSelected(b.clone()));
    assert_eq!(state.selected_user.as_ref(), Some(&b));

    let _ = update(&mut state, Message::UserSelected(a.clone()));
    assert_eq!(state.selected_user.as_ref(), Some(&a));
}

#[tokio::test]
async fn stale_completion_after_navigation_is_discarded() {
    let mut state = make_state();
    let _ = update(&mut state, Message::Navigate(Screen::Users));
    let stale_epoch = state.epoch;

    // Navigating away tears the screen down; the old fetch is still in
    // flight.
    let _ = update(&mut state, Message::Navigate(Screen::Home));

    let _ = update(
        &mut state,
        Message::UsersLoaded(stale_epoch, Ok(vec![make_user(1, "alice")])),
    );
    assert!(state.users.is_empty());
}

#[tokio::test]
async fn navigation_discards_the_view_model() {
    let mut state = make_state();
    let _ = update(&mut state, Message::Navigate(Screen::Users));

    let a = make_user(1, "alice");
    let epoch = state.epoch;
    let _ = update(
        &mut state,
        Message::UsersLoaded(epoch, Ok(vec![a.clone()])),
    );
    let _ = update(&mut state, Message::UserSelected(a));
    assert!(state.selected_user.is_some());

    let _ = update(&mut state, Message::Navigate(Screen::Home));
    assert!(state.users.is_empty());
    assert!(state.selected_user.is_none());
    assert!(state.selected_interactions.is_none());
}

#[tokio::test]
async fn reload_rebinds_selection_to_fresh_record() {
    let mut state = make_state();
    let _ = update(&mut state, Message::Navigate(Screen::Users));

    let a = make_user(1, "alice");
    let epoch = state.epoch;
    let _ = update(
        &mut state,
        Message::UsersLoaded(epoch, Ok(vec![a.clone()])),
    );
    let _ = update(&mut state, Message::UserSelected(a.clone()));

    // The refreshed list carries an updated record for the same user.
    let mut fresh = make_user(1, "alice");
    fresh.active = false;
    let _ = update(&mut state, Message::RefreshUsers);
    let epoch = state.epoch;
    let _ = update(
        &mut state,
        Message::UsersLoaded(epoch, Ok(vec![fresh.clone()])),
    );

    assert_eq!(state.selected_user.as_ref(), Some(&fresh));
}

#[tokio::test]
async fn reload_clears_selection_when_user_disappears() {
    let mut state = make_state();
    let _ = update(&mut state, Message::Navigate(Screen::Users));

    let a = make_user(1, "alice");
    let epoch = state.epoch;
    let _ = update(
        &mut state,
        Message::UsersLoaded(epoch, Ok(vec![a.clone()])),
    );
    let _ = update(&mut state, Message::UserSelected(a));

    let epoch = state.epoch;
    let _ = update(
        &mut state,
        Message::UsersLoaded(epoch, Ok(vec![make_user(2, "bob")])),
    );
    assert!(state.selected_user.is_none());
    assert!(state.selected_interactions.is_none());
}

#[tokio::test]
async fn refresh_is_ignored_off_the_users_screen() {
    let mut state = make_state();
    assert_eq!(state.screen, Screen::Home);

    // The Home screen has no user list; refresh issues no fetch and
    // leaves state alone.
    let _ = update(&mut state, Message::RefreshUsers);
    assert_eq!(state.screen, Screen::Home);
    assert!(state.users.is_empty());
}

#[tokio::test]
async fn interaction_counts_apply_to_the_current_selection_only() {
    let mut state = make_state();
    let _ = update(&mut state, Message::Navigate(Screen::Users));

    let a = make_user(1, "alice");
    let b = make_user(2, "bob");
    let epoch = state.epoch;
    let _ = update(
        &mut state,
        Message::UsersLoaded(epoch, Ok(vec![a.clone(), b.clone()])),
    );

    let _ = update(&mut state, Message::UserSelected(a.clone()));
    let _ = update(&mut state, Message::UserSelected(b.clone()));

    // The counts for the superseded selection arrive late.
    let epoch = state.epoch;
    let _ = update(
        &mut state,
        Message::InteractionsLoaded(epoch, a.id, Ok(InteractionCounts::default())),
    );
    assert!(state.selected_interactions.is_none());

    let counts = InteractionCounts::default();
    let epoch = state.epoch;
    let _ = update(
        &mut state,
        Message::InteractionsLoaded(epoch, b.id, Ok(counts.clone())),
    );
    assert_eq!(state.selected_interactions.as_ref(), Some(&counts));
}

#[tokio::test]
async fn failed_interaction_fetch_leaves_panel_without_counts() {
    let mut state = make_state();
    let _ = update(&mut state, Message::Navigate(Screen::Users));

    let a = make_user(1, "alice");
    let epoch = state.epoch;
    let _ = update(
        &mut state,
        Message::UsersLoaded(epoch, Ok(vec![a.clone()])),
    );
    let _ = update(&mut state, Message::UserSelected(a.clone()));

    let epoch = state.epoch;
    let _ = update(
        &mut state,
        Message::InteractionsLoaded(epoch, a.id, Err("HTTP 500".to_string())),
    );
    assert_eq!(state.selected_user.as_ref(), Some(&a));
    assert!(state.selected_interactions.is_none());
}
