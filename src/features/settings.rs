//! Application settings persistence
//!
//! Settings are read once at startup from `settings.json` in the platform
//! config directory. A default file is written on first run so the business
//! details and media location can be edited by hand.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::KeyBindings;
use super::carousel::film_strip::{STRIP_INTERVAL, STRIP_ITEM_WIDTH};
use super::carousel::hero::HERO_INTERVAL;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Display settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Carousel timing and media location
    #[serde(default)]
    pub carousel: CarouselSettings,
    /// Business details used by the booking dialog
    #[serde(default)]
    pub booking: BookingSettings,
    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeyBindings,
}

/// Display and interface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
}

/// Carousel settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselSettings {
    /// Media root containing `hero/`, `strips/<name>/` and `breeds/`
    pub media_dir: Option<String>,
    /// Hero advance period in milliseconds
    #[serde(default = "default_hero_interval")]
    pub hero_interval_ms: u64,
    /// Film strip advance period in milliseconds
    #[serde(default = "default_strip_interval")]
    pub strip_interval_ms: u64,
    /// Width of one film strip item in logical pixels
    #[serde(default = "default_strip_item_width")]
    pub strip_item_width: f32,
    /// Breeds marquee speed in pixels per second
    #[serde(default = "default_marquee_speed")]
    pub marquee_speed: f32,
    /// Start hero videos automatically when they become current
    #[serde(default = "default_true")]
    pub autoplay_videos: bool,
}

fn default_hero_interval() -> u64 {
    HERO_INTERVAL.as_millis() as u64
}

fn default_strip_interval() -> u64 {
    STRIP_INTERVAL.as_millis() as u64
}

fn default_strip_item_width() -> f32 {
    STRIP_ITEM_WIDTH
}

fn default_marquee_speed() -> f32 {
    40.0
}

fn default_true() -> bool {
    true
}

/// Booking settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingSettings {
    /// Name used in the greeting line
    pub business_name: String,
    /// WhatsApp number in international format, digits only
    pub whatsapp_number: String,
    /// Phone number shown in the contact panel
    #[serde(default)]
    pub phone_display: String,
    /// Service chip values
    pub services: Vec<String>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            media_dir: None,
            hero_interval_ms: default_hero_interval(),
            strip_interval_ms: default_strip_interval(),
            strip_item_width: default_strip_item_width(),
            marquee_speed: default_marquee_speed(),
            autoplay_videos: true,
        }
    }
}

impl CarouselSettings {
    pub fn hero_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.hero_interval_ms.max(1))
    }

    pub fn strip_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.strip_interval_ms.max(1))
    }

    /// Resolved media root: configured directory or `<data dir>/media`
    pub fn media_root(&self) -> Option<PathBuf> {
        self.media_dir.as_ref().map(PathBuf::from).or_else(|| {
            directories::ProjectDirs::from("com", "dogtales", "DogTales")
                .map(|dirs| dirs.data_dir().join("media"))
        })
    }
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            business_name: "Dog Tales Kennels".to_string(),
            whatsapp_number: "254797296255".to_string(),
            phone_display: "+254 797 296 255".to_string(),
            services: ["Boarding", "Daycare", "Grooming", "Training"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "dogtales", "DogTales")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings, writing a default file on first run
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("Could not determine config directory, using default settings");
            return Self::default();
        };

        if !path.exists() {
            let settings = Self::default();
            if let Err(e) = settings.save_to_file(&path) {
                tracing::warn!("Failed to write default settings to {:?}: {}", path, e);
            }
            return settings;
        }

        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load settings from {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}
