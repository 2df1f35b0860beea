//! Root-level view composition

use iced::widget::column;
use iced::{Element, Length};

use crate::message::Message;
use crate::state::{Screen, State};
use crate::views::header::view_header;
use crate::views::home::view_home;
use crate::views::users::view_users;

pub fn view(state: &State) -> Element<'_, Message> {
    let content = match state.screen {
        Screen::Home => view_home(state),
        Screen::Users => view_users(state),
    };

    column![view_header(state), content]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
