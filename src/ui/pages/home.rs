//! Home page - the single scrolling showcase
//!
//! Every section has a fixed height so that navigation can compute scroll
//! targets without measuring the layout.

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Color, Element, Fill, Padding};

use crate::app::{Message, Section, ShowcaseState};
use crate::features::Settings;
use crate::ui::components::header::HEADER_HEIGHT;
use crate::ui::components::{floating_contact, gallery, hero_carousel, services};
use crate::ui::theme::{self, BOLD_WEIGHT};

pub const SCROLL_ID: &str = "home_scroll";

const SECTION_GAP: f32 = 48.0;
const SECTION_TITLE_HEIGHT: f32 = 56.0;
const SERVICES_BODY_HEIGHT: f32 = services::CARD_HEIGHT * 2.0 + 16.0;
const STRIP_SPACING: f32 = 24.0;
const EMPTY_GALLERY_HEIGHT: f32 = 40.0;
const CONTACT_HEIGHT: f32 = 240.0;

fn gallery_body_height(strip_count: usize) -> f32 {
    if strip_count == 0 {
        return EMPTY_GALLERY_HEIGHT;
    }
    let n = strip_count as f32;
    n * (gallery::STRIP_TITLE_HEIGHT + gallery::STRIP_HEIGHT) + (n - 1.0) * STRIP_SPACING
}

/// Heights of each section in page order, gaps included
fn section_heights(strip_count: usize) -> [(Section, f32); 5] {
    [
        (
            Section::Home,
            HEADER_HEIGHT + hero_carousel::HERO_HEIGHT + SECTION_GAP,
        ),
        (
            Section::Services,
            SECTION_TITLE_HEIGHT + SERVICES_BODY_HEIGHT + SECTION_GAP,
        ),
        (
            Section::Gallery,
            SECTION_TITLE_HEIGHT + gallery_body_height(strip_count) + SECTION_GAP,
        ),
        (
            Section::Breeds,
            SECTION_TITLE_HEIGHT + gallery::MARQUEE_HEIGHT + SECTION_GAP,
        ),
        (Section::Contact, CONTACT_HEIGHT),
    ]
}

/// Scroll offset that brings each section's title just under the header
pub fn section_offsets(strip_count: usize) -> [(Section, f32); 5] {
    let heights = section_heights(strip_count);
    let mut offsets = [(Section::Home, 0.0); 5];
    let mut start = 0.0;

    for (i, (section, height)) in heights.into_iter().enumerate() {
        let target = if i == 0 { 0.0 } else { start - HEADER_HEIGHT };
        offsets[i] = (section, target);
        start += height;
    }
    offsets
}

fn section<'a>(
    title: &'a str,
    body: Element<'a, Message>,
    height: f32,
) -> Element<'a, Message> {
    container(column![
        container(text(title).size(26).font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        }))
        .height(SECTION_TITLE_HEIGHT),
        body,
    ])
    .width(Fill)
    .height(height)
    .into()
}

fn contact_section(settings: &Settings) -> Element<'_, Message> {
    let booking = &settings.booking;

    let whatsapp_btn = button(text("Message us on WhatsApp").size(14).color(Color::WHITE))
        .padding([10, 20])
        .style(theme::whatsapp_button)
        .on_press(Message::OpenLink(floating_contact::whatsapp_url(
            &booking.whatsapp_number,
        )));

    let book_btn = button(text("Book a Session").size(14))
        .padding([10, 20])
        .style(theme::primary_button)
        .on_press(Message::OpenBooking(None));

    container(
        column![
            text(booking.business_name.as_str()).size(22).font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
            text(format!("Call us on {}", booking.phone_display))
                .size(14)
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
            Space::new().height(8),
            row![whatsapp_btn, book_btn].spacing(12),
            Space::new().height(Fill),
            text(format!("© {}", booking.business_name))
                .size(12)
                .style(|theme| text::Style {
                    color: Some(theme::text_muted(theme)),
                }),
        ]
        .spacing(8)
        .align_x(Alignment::Center)
        .padding(Padding::new(32.0)),
    )
    .width(Fill)
    .height(CONTACT_HEIGHT)
    .center_x(Fill)
    .style(theme::card)
    .into()
}

/// Build the scrolling page
pub fn view<'a>(
    settings: &'a Settings,
    showcase: &'a ShowcaseState,
    compact: bool,
    catalog_ready: bool,
) -> Element<'a, Message> {
    let heights = section_heights(showcase.strips.len());
    let height_of = |section: Section| {
        heights
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, h)| *h)
            .unwrap_or(0.0)
    };

    let home = container(column![
        Space::new().height(HEADER_HEIGHT),
        hero_carousel::view(
            showcase.hero.as_ref(),
            showcase.last_hero,
            &showcase.hero_animation,
            &settings.booking.business_name,
            showcase.hero_clip_playing(),
            showcase.now,
        ),
    ])
    .height(height_of(Section::Home));

    let content = column![
        home,
        section(
            "Our Services",
            container(services::view(&settings.booking.services, compact))
                .height(SERVICES_BODY_HEIGHT)
                .into(),
            height_of(Section::Services),
        ),
        section(
            "Gallery",
            gallery::view(&showcase.strips, showcase.now, catalog_ready),
            height_of(Section::Gallery),
        ),
        section(
            "Breeds We Love",
            gallery::view_marquee(showcase.marquee.as_ref(), showcase.marquee_offset()),
            height_of(Section::Breeds),
        ),
        contact_section(settings),
    ]
    .padding(Padding::new(24.0).top(0.0));

    scrollable(content)
        .width(Fill)
        .height(Fill)
        .id(iced::widget::Id::new(SCROLL_ID))
        .on_scroll(|viewport| Message::PageScrolled(viewport.absolute_offset().y))
        .style(theme::page_scrollable)
        .into()
}
