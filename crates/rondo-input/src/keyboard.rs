//! Keyboard events
//!
//! KeyboardEvent with key values and modifiers.

use rondo_dom::NodeId;

/// Keyboard event
#[derive(Debug, Clone)]
pub struct KeyboardEvent {
    pub event_type: KeyboardEventType,
    pub key: Key,
    pub modifiers: KeyModifiers,
    /// Element the event originated on
    pub target: NodeId,

    // Event state
    pub bubbles: bool,
    pub cancelable: bool,
    default_prevented: bool,
}

/// Keyboard event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardEventType {
    KeyDown,
    KeyUp,
    KeyPress, // Deprecated but still delivered by hosts
}

/// Key value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    // Navigation
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Editing / activation
    Enter,
    Tab,
    Escape,

    // Whitespace
    Space,

    // Printable
    Character(char),

    // Other
    Unidentified(String),
}

impl Key {
    /// Parse from a key string
    pub fn parse(s: &str) -> Self {
        match s {
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "Enter" => Self::Enter,
            "Tab" => Self::Tab,
            "Escape" => Self::Escape,
            " " | "Space" => Self::Space,
            s if s.chars().count() == 1 => Self::Character(s.chars().next().unwrap()),
            s => Self::Unidentified(s.to_string()),
        }
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyModifiers {
    /// Check if any modifier is pressed
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

impl KeyboardEvent {
    /// Create a new keyboard event
    pub fn new(event_type: KeyboardEventType, key: Key, target: NodeId) -> Self {
        Self {
            event_type,
            key,
            modifiers: KeyModifiers::default(),
            target,
            bubbles: true,
            cancelable: true,
            default_prevented: false,
        }
    }

    /// Add modifiers
    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Prevent the host's default action (scroll, link follow)
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Check if default was prevented
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_parse() {
        assert_eq!(Key::parse("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::parse(" "), Key::Space);
        assert_eq!(Key::parse("Enter"), Key::Enter);
        assert_eq!(Key::parse("q"), Key::Character('q'));
        assert_eq!(Key::parse("F5"), Key::Unidentified("F5".to_string()));
    }

    #[test]
    fn test_prevent_default() {
        let mut event = KeyboardEvent::new(KeyboardEventType::KeyDown, Key::Space, NodeId(3));
        assert!(!event.is_default_prevented());
        event.prevent_default();
        assert!(event.is_default_prevented());
    }
}
