// src/app/state.rs
//! Application state definitions

use std::path::PathBuf;

use iced::animation::Animation;
use iced::time::Instant;

use crate::app::Section;
use crate::features::Settings;
use crate::features::booking::{BookingModal, BusinessContact};
use crate::features::carousel::{
    FilmStrip, HeroRotator, Marquee, MediaItem, Playback, PlaybackError,
};
use crate::ui::animation::FadeAnimation;
use crate::ui::widgets::Toast;

/// Scroll offset past which the header is drawn raised
pub const HEADER_RAISE_THRESHOLD: f32 = 50.0;

/// Window width below which the navigation collapses behind a menu button
pub const COMPACT_BREAKPOINT: f32 = 768.0;

/// Main application state
pub struct App {
    /// Configuration and window facts
    pub core: CoreState,
    /// Carousels built from the media catalog
    pub showcase: ShowcaseState,
    /// UI state (Dialogs, Navigation, Animations)
    pub ui: UiState,
}

impl App {
    /// Build the initial state without opening any window
    pub fn with_settings(settings: Settings) -> Self {
        let ui = UiState::new(&settings);
        let showcase = ShowcaseState::new(settings.carousel.autoplay_videos);
        let core = CoreState::new(settings);
        Self { core, showcase, ui }
    }
}

/// Configuration & window facts
pub struct CoreState {
    pub settings: Settings,
    /// Whether the media scan has completed
    pub catalog_ready: bool,
    pub window_size: iced::Size,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            catalog_ready: false,
            window_size: iced::Size::new(1280.0, 860.0),
        }
    }
}

/// Desktop playback policy for hero videos
///
/// With autoplay disabled every request is refused, mirroring a browser
/// that blocks unmuted autoplay.
#[derive(Debug, Default)]
pub struct VideoPlayback {
    autoplay: bool,
    playing: Option<PathBuf>,
}

impl VideoPlayback {
    pub fn new(autoplay: bool) -> Self {
        Self {
            autoplay,
            playing: None,
        }
    }

    /// Clip most recently started
    pub fn playing(&self) -> Option<&PathBuf> {
        self.playing.as_ref()
    }
}

impl Playback for VideoPlayback {
    fn play(&mut self, item: &MediaItem) -> Result<(), PlaybackError> {
        if !self.autoplay {
            return Err(PlaybackError::AutoplayBlocked);
        }
        self.playing = Some(item.path.clone());
        Ok(())
    }
}

/// A film strip plus its slide animation
pub struct StripState {
    pub strip: FilmStrip,
    /// Offset the track is sliding away from
    pub from_offset: f32,
    pub animation: Animation<bool>,
}

impl StripState {
    pub fn new(strip: FilmStrip) -> Self {
        Self {
            from_offset: strip.offset(),
            strip,
            animation: Animation::new(false),
        }
    }

    /// Offset to draw at `now`
    pub fn offset_at(&self, now: Instant) -> f32 {
        self.animation
            .interpolate(self.from_offset, self.strip.offset(), now)
    }
}

/// Carousels
pub struct ShowcaseState {
    pub hero: Option<HeroRotator>,
    /// Hero index before the last advance (fading out)
    pub last_hero: usize,
    pub hero_animation: Animation<bool>,
    pub strips: Vec<StripState>,
    pub marquee: Option<Marquee>,
    pub marquee_started: Instant,
    /// Time of the latest animation frame
    pub now: Instant,
    pub playback: VideoPlayback,
}

impl ShowcaseState {
    pub fn new(autoplay: bool) -> Self {
        let now = Instant::now();
        Self {
            hero: None,
            last_hero: 0,
            hero_animation: Animation::new(false),
            strips: Vec::new(),
            marquee: None,
            marquee_started: now,
            now,
            playback: VideoPlayback::new(autoplay),
        }
    }

    pub fn strip_mut(&mut self, name: &str) -> Option<&mut StripState> {
        self.strips.iter_mut().find(|s| s.strip.name() == name)
    }

    /// Current marquee track translation
    pub fn marquee_offset(&self) -> f32 {
        self.marquee
            .as_ref()
            .map(|m| m.offset_at(self.now.saturating_duration_since(self.marquee_started)))
            .unwrap_or(0.0)
    }

    /// Whether the clip last started is the hero item on screen
    pub fn hero_clip_playing(&self) -> bool {
        self.hero.as_ref().is_some_and(|hero| {
            let current = hero.current();
            current.is_video() && self.playback.playing() == Some(&current.path)
        })
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.hero_animation.is_animating(now)
            || self.strips.iter().any(|s| s.animation.is_animating(now))
    }
}

/// UI View State
pub struct UiState {
    pub booking: BookingModal,
    pub booking_animation: FadeAnimation,

    /// Blocking notice shown over the booking dialog
    pub notice: Option<String>,
    pub notice_animation: FadeAnimation,

    pub toast: Option<Toast>,
    pub toast_visible: bool,
    /// Bumped for every toast shown
    pub toast_generation: u64,

    // Navigation
    pub nav_menu_open: bool,
    pub compact: bool,
    pub scroll_y: f32,
    pub active_section: Section,

    pub contact_open: bool,
}

impl UiState {
    pub fn new(settings: &Settings) -> Self {
        let business = BusinessContact {
            name: settings.booking.business_name.clone(),
            whatsapp_number: settings.booking.whatsapp_number.clone(),
        };

        Self {
            booking: BookingModal::new(business, settings.booking.services.clone()),
            booking_animation: FadeAnimation::new(),
            notice: None,
            notice_animation: FadeAnimation::new(),
            toast: None,
            toast_visible: false,
            toast_generation: 0,
            nav_menu_open: false,
            compact: false,
            scroll_y: 0.0,
            active_section: Section::Home,
            contact_open: false,
        }
    }

    /// Header draws a stronger shadow once the page has scrolled
    pub fn header_raised(&self) -> bool {
        self.scroll_y > HEADER_RAISE_THRESHOLD
    }

    pub fn has_active_animations(&self) -> bool {
        self.booking_animation.is_animating() || self.notice_animation.is_animating()
    }

    pub fn tick_animations(&mut self, now: Instant) {
        self.booking_animation.tick(now);
        self.notice_animation.tick(now);
    }
}
