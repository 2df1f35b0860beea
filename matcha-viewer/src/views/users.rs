//! Users screen: the card list and the detail panel for the selection.

use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Element, Length, Theme};
use matcha_model::{present, InteractionType, User};

use crate::message::Message;
use crate::state::State;

pub fn view_users(state: &State) -> Element<'_, Message> {
    let list = view_user_list(state);

    let mut content = row![list].spacing(24).padding(24);
    if let Some(selected) = &state.selected_user {
        content = content.push(view_user_details(state, selected));
    }

    container(content).width(Length::Fill).height(Length::Fill).into()
}

fn view_user_list(state: &State) -> Element<'_, Message> {
    let title_row = row![
        text("Users List").size(22),
        Space::with_width(Length::Fill),
        button(text("Refresh").size(14))
            .on_press(Message::RefreshUsers)
            .padding([6, 12]),
    ]
    .align_y(iced::Alignment::Center);

    let mut cards = column![].spacing(12);

    if state.users.is_empty() {
        cards = cards.push(
            text("No users found")
                .size(16)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                }),
        );
    } else {
        for user in &state.users {
            let is_selected = state
                .selected_user
                .as_ref()
                .is_some_and(|s| s.id == user.id);
            cards = cards.push(user_card(user, is_selected));
        }
    }

    column![title_row, Space::with_height(16), scrollable(cards)]
        .width(Length::FillPortion(3))
        .height(Length::Fill)
        .into()
}

fn user_card(user: &User, is_selected: bool) -> Element<'_, Message> {
    let card = row![
        avatar(user, 40.0, 18),
        column![
            text(&user.username).size(16),
            text(&user.email).size(13).style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.strong.text),
            }),
        ]
        .spacing(2),
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center);

    button(container(card).padding(12).width(Length::Fill))
        .on_press(Message::UserSelected(user.clone()))
        .style(move |theme: &Theme, status| {
            let palette = theme.extended_palette();
            let background = if is_selected {
                palette.primary.weak.color
            } else {
                match status {
                    button::Status::Hovered => palette.background.strong.color,
                    _ => palette.background.weak.color,
                }
            };
            button::Style {
                background: Some(background.into()),
                text_color: palette.background.base.text,
                border: iced::Border {
                    radius: 8.0.into(),
                    width: if is_selected { 2.0 } else { 0.0 },
                    color: palette.primary.strong.color,
                },
                ..Default::default()
            }
        })
        .into()
}

fn view_user_details<'a>(state: &'a State, user: &'a User) -> Element<'a, Message> {
    let header = row![
        avatar(user, 64.0, 28),
        text(&user.username).size(22),
    ]
    .spacing(16)
    .align_y(iced::Alignment::Center);

    let mut details = column![
        text("User Details").size(22),
        Space::with_height(16),
        header,
        Space::with_height(16),
        detail_line("Email", user.email.clone()),
        detail_line("ID", user.id.to_string()),
        detail_line("Created At", present::created_label(user)),
        detail_line("Last Login", present::last_login_label(user)),
        status_line(user),
    ]
    .spacing(6);

    if let Some(counts) = &state.selected_interactions {
        details = details.push(Space::with_height(16));
        details = details.push(text("Interactions").size(16));
        for ty in InteractionType::ALL {
            details = details.push(detail_line(ty.label(), counts.get(ty).to_string()));
        }
    }

    container(details)
        .padding(20)
        .width(Length::FillPortion(2))
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: iced::Border {
                radius: 10.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn detail_line(label: &'static str, value: String) -> Element<'static, Message> {
    row![
        text(format!("{label}:")).size(14),
        Space::with_width(8),
        text(value).size(14),
    ]
    .into()
}

fn status_line(user: &User) -> Element<'static, Message> {
    let active = user.active;
    row![
        text("Status:").size(14),
        Space::with_width(8),
        text(present::status_label(user))
            .size(14)
            .style(move |theme: &Theme| {
                let palette = theme.extended_palette();
                text::Style {
                    color: Some(if active {
                        palette.success.base.color
                    } else {
                        palette.danger.base.color
                    }),
                }
            }),
    ]
    .into()
}

/// Circular avatar with the user's upper-cased initial.
fn avatar(user: &User, diameter: f32, glyph_size: u16) -> Element<'_, Message> {
    container(text(present::avatar_glyph(user).to_string()).size(glyph_size))
        .width(Length::Fixed(diameter))
        .height(Length::Fixed(diameter))
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .style(move |theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.primary.base.color.into()),
                text_color: Some(palette.primary.base.text),
                border: iced::Border {
                    radius: (diameter / 2.0).into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .into()
}
