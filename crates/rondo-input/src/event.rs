//! Input event union
//!
//! The single event surface delivered to delegated widget listeners.

use rondo_dom::NodeId;

use crate::{Key, KeyboardEvent, KeyboardEventType, MouseEvent};

/// An input event observed by a delegated listener
#[derive(Debug, Clone)]
pub enum InputEvent {
    Click(MouseEvent),
    Key(KeyboardEvent),
}

impl InputEvent {
    /// Convenience: a primary-button click on `target`
    pub fn click(target: NodeId) -> Self {
        Self::Click(MouseEvent::click(target))
    }

    /// Convenience: a key-down of `key` on `target`
    pub fn key_down(key: Key, target: NodeId) -> Self {
        Self::Key(KeyboardEvent::new(KeyboardEventType::KeyDown, key, target))
    }

    /// Convenience: a key-press of `key` on `target`
    pub fn key_press(key: Key, target: NodeId) -> Self {
        Self::Key(KeyboardEvent::new(KeyboardEventType::KeyPress, key, target))
    }

    /// Element the event originated on
    pub fn target(&self) -> NodeId {
        match self {
            Self::Click(e) => e.target,
            Self::Key(e) => e.target,
        }
    }

    /// Prevent the host's default action for the underlying event
    pub fn prevent_default(&mut self) {
        match self {
            Self::Click(e) => e.prevent_default(),
            Self::Key(e) => e.prevent_default(),
        }
    }

    /// Check if default was prevented
    pub fn is_default_prevented(&self) -> bool {
        match self {
            Self::Click(e) => e.is_default_prevented(),
            Self::Key(e) => e.is_default_prevented(),
        }
    }
}
