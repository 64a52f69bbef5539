//! Keyboard shortcuts
//!
//! Maps key presses to application actions. Escape closing the open dialog
//! is the only binding the site itself relies on; the rest are conveniences.

use std::collections::HashMap;

use iced::keyboard::{Key, Modifiers};
use serde::{Deserialize, Serialize};

/// All bindable actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Close the topmost dialog
    CloseDialog,
    /// Open the booking dialog
    OpenBooking,
    /// Toggle the collapsed navigation menu
    ToggleNavMenu,
    /// Toggle the floating contact panel
    ToggleContact,
}

impl Action {
    pub fn all() -> &'static [Action] {
        &[
            Action::CloseDialog,
            Action::OpenBooking,
            Action::ToggleNavMenu,
            Action::ToggleContact,
        ]
    }
}

/// A keyboard shortcut consisting of modifiers and a key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyBinding {
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub shift: bool,
    pub key: KeyCode,
}

impl KeyBinding {
    pub fn new(key: KeyCode) -> Self {
        Self {
            ctrl: false,
            alt: false,
            shift: false,
            key,
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Check if this keybinding matches the given key event
    pub fn matches(&self, key: &Key, modifiers: &Modifiers) -> bool {
        self.key.matches(key)
            && self.ctrl == modifiers.control()
            && self.alt == modifiers.alt()
            && self.shift == modifiers.shift()
    }

    /// Format as human-readable string
    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.alt {
            parts.push("Alt".to_string());
        }
        if self.shift {
            parts.push("Shift".to_string());
        }
        parts.push(self.key.display());
        parts.join("+")
    }
}

/// Key codes that can be bound
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCode {
    /// A printable character, compared case-insensitively
    Char(char),
    Escape,
    Enter,
    Tab,
    F1,
}

impl KeyCode {
    /// Check if this key code matches an iced Key
    pub fn matches(&self, key: &Key) -> bool {
        use iced::keyboard::key::Named;

        match (self, key) {
            (KeyCode::Char(expected), Key::Character(c)) => {
                let mut chars = c.chars();
                match (chars.next(), chars.next()) {
                    (Some(actual), None) => actual.eq_ignore_ascii_case(expected),
                    _ => false,
                }
            }
            (KeyCode::Escape, Key::Named(Named::Escape)) => true,
            (KeyCode::Enter, Key::Named(Named::Enter)) => true,
            (KeyCode::Tab, Key::Named(Named::Tab)) => true,
            (KeyCode::F1, Key::Named(Named::F1)) => true,
            _ => false,
        }
    }

    pub fn display(&self) -> String {
        match self {
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Escape => "Esc".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::F1 => "F1".to_string(),
        }
    }
}

/// The keybindings configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBindings {
    bindings: HashMap<Action, Vec<KeyBinding>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(Action::CloseDialog, vec![KeyBinding::new(KeyCode::Escape)]);
        bindings.insert(
            Action::OpenBooking,
            vec![KeyBinding::new(KeyCode::Char('b')).ctrl()],
        );
        bindings.insert(
            Action::ToggleNavMenu,
            vec![KeyBinding::new(KeyCode::Char('m')).ctrl()],
        );
        bindings.insert(
            Action::ToggleContact,
            vec![KeyBinding::new(KeyCode::Char('k')).ctrl()],
        );
        Self { bindings }
    }
}

impl KeyBindings {
    pub fn get(&self, action: &Action) -> Option<&Vec<KeyBinding>> {
        self.bindings.get(action)
    }

    /// Find the action that matches the given key event
    pub fn find_action(&self, key: &Key, modifiers: &Modifiers) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(_, bindings)| bindings.iter().any(|b| b.matches(key, modifiers)))
            .map(|(action, _)| *action)
    }

    /// Get display string for an action's first keybinding
    pub fn display_for_action(&self, action: &Action) -> String {
        self.bindings
            .get(action)
            .and_then(|b| b.first())
            .map(|b| b.display())
            .unwrap_or_else(|| "None".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::Named;

    #[test]
    fn escape_closes_dialog_by_default() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.find_action(&Key::Named(Named::Escape), &Modifiers::empty()),
            Some(Action::CloseDialog)
        );
    }

    #[test]
    fn modifiers_must_match_exactly() {
        let bindings = KeyBindings::default();
        let b = Key::Character("b".into());

        assert_eq!(bindings.find_action(&b, &Modifiers::empty()), None);
        assert_eq!(
            bindings.find_action(&b, &Modifiers::CTRL),
            Some(Action::OpenBooking)
        );
        assert_eq!(
            bindings.find_action(&Key::Named(Named::Escape), &Modifiers::CTRL),
            None
        );
    }

    #[test]
    fn char_match_ignores_case() {
        let binding = KeyBinding::new(KeyCode::Char('m')).ctrl();
        assert!(binding.matches(&Key::Character("M".into()), &Modifiers::CTRL));
        assert!(!binding.matches(&Key::Character("mm".into()), &Modifiers::CTRL));
    }

    #[test]
    fn keybinding_display() {
        let binding = KeyBinding::new(KeyCode::Char('b')).ctrl().shift();
        assert_eq!(binding.display(), "Ctrl+Shift+B");
        assert_eq!(
            KeyBindings::default().display_for_action(&Action::CloseDialog),
            "Esc"
        );
    }

    #[test]
    fn every_action_has_a_default_binding() {
        let bindings = KeyBindings::default();
        for action in Action::all() {
            assert!(bindings.get(action).is_some(), "{:?}", action);
        }
    }
}
