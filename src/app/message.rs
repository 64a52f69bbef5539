//! Application messages

use std::sync::Arc;

use iced::keyboard::{Key, Modifiers};

use crate::features::Action;
use crate::features::booking::{BookingTab, FormField};
use crate::features::catalog::MediaCatalog;

/// Page sections reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Services,
    Gallery,
    Breeds,
    Contact,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[
            Section::Home,
            Section::Services,
            Section::Gallery,
            Section::Breeds,
            Section::Contact,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Services => "Services",
            Section::Gallery => "Gallery",
            Section::Breeds => "Breeds",
            Section::Contact => "Contact",
        }
    }
}

/// Application messages
#[derive(Clone)]
pub enum Message {
    // ============ Media ============
    /// Media catalog scanned
    CatalogLoaded(Arc<MediaCatalog>),
    /// Media catalog scan failed
    CatalogFailed(String),
    /// Hero carousel advance
    HeroTick,
    /// Film strip advance, keyed by strip name
    FilmStripTick(String),
    /// Animation frame
    AnimationTick,

    // ============ Booking ============
    /// Open the booking dialog, optionally pre-selecting a service
    OpenBooking(Option<String>),
    /// Close the booking dialog
    CloseBooking,
    /// Booking tab clicked
    SelectTab(BookingTab),
    /// Service chip clicked
    SelectChip(String),
    /// Booking form input changed
    FieldChanged(FormField, String),
    /// Send button pressed
    SendBooking,
    /// Dismiss the blocking notice dialog
    DismissNotice,
    /// Open an outbound link in the browser
    OpenLink(String),
    /// Browser launched for an outbound link
    LinkOpened,
    /// Browser launch failed
    LinkFailed(String),

    // ============ Navigation ============
    /// Navigation link clicked
    ScrollToSection(Section),
    /// Page scrolled (y offset in pixels)
    PageScrolled(f32),
    /// Hamburger button clicked
    ToggleNavMenu,
    /// Floating contact button clicked
    ToggleContact,

    // ============ Toast ============
    ShowToast(String),
    ShowErrorToast(String),
    /// Hide the toast with this generation, if it is still the one shown
    HideToast(u64),

    // ============ Keyboard ============
    KeyPressed(Key, Modifiers),
    ExecuteAction(Action),

    // ============ Window ============
    WindowResized(iced::Size),
    RequestClose,
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            // High-frequency messages - keep minimal (no data)
            Self::AnimationTick => simple!("AnimationTick"),
            Self::HeroTick => simple!("HeroTick"),
            Self::FilmStripTick(name) => simple!("FilmStripTick", "{}", name),
            Self::PageScrolled(y) => simple!("PageScrolled", "{:.0}", y),

            Self::CatalogLoaded(c) => simple!(
                "CatalogLoaded",
                "hero={}, strips={}, breeds={}",
                c.hero.len(),
                c.strips.len(),
                c.breeds.len()
            ),
            Self::CatalogFailed(e) => simple!("CatalogFailed", "{}", e),

            Self::OpenBooking(service) => simple!("OpenBooking", "{:?}", service),
            Self::CloseBooking => simple!("CloseBooking"),
            Self::SelectTab(tab) => simple!("SelectTab", "{}", tab.id()),
            Self::SelectChip(value) => simple!("SelectChip", "{}", value),
            // Form values may carry personal details
            Self::FieldChanged(field, _) => simple!("FieldChanged", "{:?}", field),
            Self::SendBooking => simple!("SendBooking"),
            Self::DismissNotice => simple!("DismissNotice"),
            Self::OpenLink(_) => simple!("OpenLink"),
            Self::LinkOpened => simple!("LinkOpened"),
            Self::LinkFailed(e) => simple!("LinkFailed", "{}", e),

            Self::ScrollToSection(s) => simple!("ScrollToSection", "{:?}", s),
            Self::ToggleNavMenu => simple!("ToggleNavMenu"),
            Self::ToggleContact => simple!("ToggleContact"),

            Self::ShowToast(msg) => simple!("ShowToast", "{}", msg),
            Self::ShowErrorToast(msg) => simple!("ShowErrorToast", "{}", msg),
            Self::HideToast(generation) => simple!("HideToast", "{}", generation),

            Self::KeyPressed(key, modifiers) => {
                simple!("KeyPressed", "{:?}, {:?}", key, modifiers)
            }
            Self::ExecuteAction(action) => simple!("ExecuteAction", "{:?}", action),

            Self::WindowResized(size) => {
                simple!("WindowResized", "{}x{}", size.width, size.height)
            }
            Self::RequestClose => simple!("RequestClose"),
        }
    }
}
