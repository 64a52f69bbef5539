//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod booking;
pub mod carousel;
pub mod catalog;
pub mod keybindings;
pub mod settings;

pub use keybindings::{Action, KeyBindings};

pub use settings::Settings;
