//! Home screen: welcome banner plus the aggregate stats dashboard.

use iced::widget::{column, container, row, text, Space};
use iced::{Element, Length, Theme};
use matcha_model::{InteractionType, UserStats};

use crate::message::Message;
use crate::state::State;

pub fn view_home(state: &State) -> Element<'_, Message> {
    let mut content = column![
        text("Welcome to Matcha-Analytics").size(28),
        Space::with_height(20),
    ]
    .padding(30)
    .width(Length::Fill);

    match &state.stats {
        Some(stats) => content = content.push(stats_card(stats)),
        None => {
            content = content.push(
                text("No stats yet")
                    .size(16)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().background.strong.text),
                    }),
            );
        }
    }

    container(content).width(Length::Fill).height(Length::Fill).into()
}

fn stats_card(stats: &UserStats) -> Element<'_, Message> {
    let mut card = column![
        text("User Stats").size(20),
        Space::with_height(12),
        stat_row("Total users", stats.total_users.to_string()),
    ]
    .spacing(6);

    card = card.push(Space::with_height(12));
    card = card.push(text("Interactions (last 30 days)").size(16));

    for ty in InteractionType::ALL {
        card = card.push(stat_row(
            ty.label(),
            stats.interaction_stats.get(ty).to_string(),
        ));
    }

    container(card)
        .padding(20)
        .max_width(420)
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

fn stat_row(label: &'static str, value: String) -> Element<'static, Message> {
    row![
        text(label).size(14),
        Space::with_width(Length::Fill),
        text(value).size(14),
    ]
    .width(Length::Fill)
    .into()
}
