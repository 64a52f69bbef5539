//! Hero carousel component
//!
//! Draws the current hero item, panning in from the right over the previous
//! one while the slide animation runs.

use iced::widget::{Space, button, canvas, column, container, row, text};
use iced::{
    Alignment, Background, Color, Element, Fill, Padding, Point, Rectangle, Renderer, Theme,
    mouse,
};

use crate::app::Message;
use crate::features::carousel::{HeroRotator, MediaItem};
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::ui::widgets::media_track;

pub const HERO_HEIGHT: f32 = 480.0;
const INDICATOR_SIZE: f32 = 8.0;
const INDICATOR_SPACING: f32 = 8.0;

struct HeroDrawer<'a> {
    current: &'a MediaItem,
    last: &'a MediaItem,
    progress: f32,
}

impl<'a, Message> canvas::Program<Message> for HeroDrawer<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let slide = |offset_x: f32| Rectangle::new(Point::new(offset_x, 0.0), bounds.size());

        if self.progress >= 1.0 {
            media_track::draw_tile(&mut frame, self.current, slide(0.0), theme);
        } else {
            let width = bounds.width;
            // Ease out cubic
            let eased = 1.0 - (1.0 - self.progress).powi(3);

            media_track::draw_tile(&mut frame, self.last, slide(-width * eased), theme);
            media_track::draw_tile(
                &mut frame,
                self.current,
                slide(width * (1.0 - eased)),
                theme,
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Build the hero carousel
pub fn view<'a>(
    hero: Option<&'a HeroRotator>,
    last_index: usize,
    animation: &'a iced::animation::Animation<bool>,
    business_name: &'a str,
    playing: bool,
    now: iced::time::Instant,
) -> Element<'a, Message> {
    let Some(hero) = hero else {
        return view_placeholder(business_name);
    };

    let progress = animation.interpolate(0.0_f32, 1.0_f32, now);

    let last = hero.items().get(last_index).unwrap_or(hero.current());
    let slides: Element<'_, Message> = canvas(HeroDrawer {
        current: hero.current(),
        last,
        progress,
    })
    .width(Fill)
    .height(HERO_HEIGHT)
    .into();

    let current_index = hero.index();
    let indicators: Element<'_, Message> = row((0..hero.len())
        .map(|i| {
            let is_active = i == current_index;
            container(Space::new().width(INDICATOR_SIZE).height(INDICATOR_SIZE))
                .style(move |_theme| container::Style {
                    background: Some(
                        if is_active {
                            Color::WHITE
                        } else {
                            Color::from_rgba(1.0, 1.0, 1.0, 0.4)
                        }
                        .into(),
                    ),
                    border: iced::Border {
                        radius: (INDICATOR_SIZE / 2.0).into(),
                        ..Default::default()
                    },
                    ..Default::default()
                })
                .into()
        })
        .collect::<Vec<_>>())
    .spacing(INDICATOR_SPACING)
    .align_y(Alignment::Center)
    .into();

    let badge: Element<'_, Message> = if playing {
        text("▶ Playing").size(12).color(Color::WHITE).into()
    } else {
        Space::new().width(0).into()
    };

    let bottom_row = row![
        caption(business_name),
        Space::new().width(Fill),
        badge,
        Space::new().width(16),
        indicators,
    ]
    .align_y(Alignment::End)
        .padding(Padding::new(0.0).left(32.0).right(32.0));

    let gradient_overlay = container(
        column![Space::new().height(Fill), bottom_row].padding(Padding::new(24.0).bottom(32.0)),
    )
    .width(Fill)
    .height(Fill)
    .style(|_theme| container::Style {
        background: Some(Background::Gradient(iced::Gradient::Linear(
            iced::gradient::Linear::new(iced::Radians(std::f32::consts::PI))
                .add_stop(0.0, Color::TRANSPARENT)
                .add_stop(0.45, Color::TRANSPARENT)
                .add_stop(1.0, theme::banner_gradient_bottom()),
        ))),
        ..Default::default()
    });

    container(iced::widget::stack![slides, gradient_overlay].width(Fill).height(HERO_HEIGHT))
        .width(Fill)
        .height(HERO_HEIGHT)
        .style(theme::hero_banner)
        .into()
}

/// Headline and call to action over the slides
fn caption(business_name: &str) -> Element<'_, Message> {
    let book_button = button(
        text("Book a Session")
            .size(15)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
    )
    .padding(Padding::new(10.0).left(24.0).right(24.0))
    .style(theme::primary_button)
    .on_press(Message::OpenBooking(None));

    column![
        text(format!("Welcome to {}", business_name))
            .size(36)
            .color(Color::WHITE)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
        text("A home away from home for your best friend")
            .size(16)
            .color(Color::from_rgba(1.0, 1.0, 1.0, 0.85)),
        Space::new().height(12),
        book_button,
    ]
    .spacing(6)
    .into()
}

/// Hero without media: caption over a flat background
fn view_placeholder(business_name: &str) -> Element<'_, Message> {
    container(
        column![Space::new().height(Fill), caption(business_name)]
            .padding(Padding::new(32.0)),
    )
    .width(Fill)
    .height(HERO_HEIGHT)
    .style(|theme| container::Style {
        background: Some(Background::Color(theme::placeholder_bg(theme))),
        border: iced::Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}
