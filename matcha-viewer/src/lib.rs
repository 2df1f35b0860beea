//! Matcha Analytics viewer library
//!
//! This crate contains the desktop viewer's library surfaces used by the
//! executable in `src/main.rs`. Modules here are application glue: state,
//! the update loop, views, and the HTTP client for the analytics backend.
//!
//! The library is exposed mainly to enable testing; most consumers should
//! use the `matcha-viewer` binary.

pub mod api_client;
pub mod app;
pub mod config;
pub mod message;
pub mod state;
pub mod update;
pub mod view;
pub mod views;
