//! Navigation bar: brand on the left, screen links on the right.

use iced::widget::{button, container, row, text, Space};
use iced::{Element, Length, Theme};

use crate::message::Message;
use crate::state::{Screen, State};

const HEIGHT: f32 = 56.0;

pub fn view_header(state: &State) -> Element<'_, Message> {
    let brand = text("Matcha Analytics").size(20).style(|theme: &Theme| {
        text::Style {
            color: Some(theme.extended_palette().primary.base.color),
        }
    });

    let links = row![
        nav_button("Home", Screen::Home, state.screen),
        nav_button("Users", Screen::Users, state.screen),
    ]
    .spacing(8);

    container(
        row![brand, Space::with_width(Length::Fill), links]
            .align_y(iced::Alignment::Center)
            .padding([0, 20]),
    )
    .width(Length::Fill)
    .height(Length::Fixed(HEIGHT))
    .align_y(iced::alignment::Vertical::Center)
    .style(|theme: &Theme| container::Style {
        background: Some(theme.extended_palette().background.weak.color.into()),
        ..Default::default()
    })
    .into()
}

fn nav_button(label: &str, target: Screen, current: Screen) -> Element<'_, Message> {
    let is_current = target == current;
    button(text(label).size(16))
        .on_press(Message::Navigate(target))
        .padding([8, 16])
        .style(move |theme: &Theme, status| {
            let palette = theme.extended_palette();
            let background = if is_current {
                Some(palette.primary.weak.color.into())
            } else {
                match status {
                    button::Status::Hovered => {
                        Some(palette.background.strong.color.into())
                    }
                    _ => None,
                }
            };
            button::Style {
                background,
                text_color: if is_current {
                    palette.primary.weak.text
                } else {
                    palette.background.base.text
                },
                border: iced::Border {
                    radius: 6.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}
