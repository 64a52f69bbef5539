//! Opacity transition for overlays, backed by iced_anim

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

const FADE_DURATION: Duration = Duration::from_millis(200);

/// Fade between hidden (0.0) and shown (1.0)
#[derive(Debug)]
pub struct FadeAnimation {
    animation: Animated<f32>,
}

impl Default for FadeAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl FadeAnimation {
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, Easing::EASE.with_duration(FADE_DURATION)),
        }
    }

    pub fn show(&mut self) {
        self.animation.update(1.0.into());
    }

    pub fn hide(&mut self) {
        self.animation.update(0.0.into());
    }

    /// Current opacity in `0.0..=1.0`
    pub fn progress(&self) -> f32 {
        self.animation.value().clamp(0.0, 1.0)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Must be called on each animation frame
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}
