//! Rotating media carousels
//!
//! - `hero`: one active item at a time, advanced on a fixed period
//! - `film_strip`: a translated track of items, advanced on a fixed period
//! - `marquee`: a continuously scrolling track
//!
//! Rotators own their index and are only mutated by their own tick, so they
//! can be driven by a subscription or called directly from tests.

pub mod film_strip;
pub mod hero;
pub mod marquee;
pub mod media;

pub use film_strip::FilmStrip;
pub use hero::HeroRotator;
pub use marquee::Marquee;
pub use media::{MediaItem, MediaKind, Playback, PlaybackError};

/// Errors raised while building a rotator group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// The group has no items
    Empty,
}

impl std::fmt::Display for CarouselError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CarouselError::Empty => write!(f, "carousel group has no media items"),
        }
    }
}

impl std::error::Error for CarouselError {}
