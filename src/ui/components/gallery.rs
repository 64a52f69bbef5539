//! Gallery film strips and the breeds marquee

use iced::time::Instant;
use iced::widget::{Space, column, container, text};
use iced::{Element, Fill};

use crate::app::{Message, StripState};
use crate::features::carousel::Marquee;
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::widgets::media_track;

pub const STRIP_HEIGHT: f32 = 200.0;
pub const STRIP_TITLE_HEIGHT: f32 = 36.0;
pub const MARQUEE_HEIGHT: f32 = 160.0;

/// Display title for a strip directory name, e.g. `puppy_play` -> `Puppy Play`
pub fn strip_title(name: &str) -> String {
    name.split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_view(state: &StripState, now: Instant) -> Element<'_, Message> {
    let strip = &state.strip;

    column![
        container(
            text(strip_title(strip.name()))
                .size(16)
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                })
        )
        .height(STRIP_TITLE_HEIGHT),
        container(media_track::view(
            strip.items(),
            strip.item_width(),
            strip.track_width(),
            state.offset_at(now),
            STRIP_HEIGHT,
        ))
        .width(Fill)
        .style(theme::strip_viewport),
    ]
    .into()
}

/// All film strips, one per gallery group
pub fn view(strips: &[StripState], now: Instant, loaded: bool) -> Element<'_, Message> {
    if strips.is_empty() {
        let placeholder = if loaded {
            "Photos coming soon."
        } else {
            "Loading photos..."
        };
        return text(placeholder)
            .size(14)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            })
            .into();
    }

    column(strips.iter().map(|state| strip_view(state, now)))
        .spacing(24)
        .into()
}

/// Continuously scrolling breeds track
pub fn view_marquee(marquee: Option<&Marquee>, offset: f32) -> Element<'_, Message> {
    match marquee {
        Some(marquee) => container(media_track::view(
            marquee.items(),
            marquee.item_width(),
            marquee.track_width(),
            offset,
            MARQUEE_HEIGHT,
        ))
        .width(Fill)
        .style(theme::strip_viewport)
        .into(),
        None => Space::new().height(MARQUEE_HEIGHT).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_titles_are_capitalised_words() {
        assert_eq!(strip_title("puppy_play"), "Puppy Play");
        assert_eq!(strip_title("grooming"), "Grooming");
        assert_eq!(strip_title("01-agility day"), "01 Agility Day");
    }
}
