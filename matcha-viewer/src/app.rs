//! Application assembly for the iced runtime.

use iced::{Settings, Theme};

use crate::config::Config;
use crate::state::State;
use crate::{update, view};

/// Run the viewer with the provided configuration.
pub fn run(config: Config) -> iced::Result {
    iced::application("Matcha Analytics", update::update, view::view)
        .settings(default_settings())
        .theme(app_theme)
        .window(iced::window::Settings {
            size: iced::Size::new(1100.0, 720.0),
            resizable: true,
            ..Default::default()
        })
        .run_with(move || State::boot(&config))
}

fn default_settings() -> Settings {
    Settings {
        id: Some("matcha-viewer".to_string()),
        antialiasing: true,
        ..Default::default()
    }
}

fn app_theme(_: &State) -> Theme {
    Theme::TokyoNight
}
