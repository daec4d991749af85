//! Mouse events
//!
//! MouseEvent for the click family; motion and wheel events are not
//! delivered to rondo widgets.

use rondo_dom::NodeId;

/// Mouse event
#[derive(Debug, Clone)]
pub struct MouseEvent {
    pub event_type: MouseEventType,
    pub button: MouseButton,
    /// Element the event originated on
    pub target: NodeId,

    // Event state
    pub bubbles: bool,
    pub cancelable: bool,
    default_prevented: bool,
}

/// Mouse event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventType {
    Click,
    MouseDown,
    MouseUp,
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Primary button (usually left)
    Primary,
    /// Auxiliary button (usually middle/wheel)
    Auxiliary,
    /// Secondary button (usually right)
    Secondary,
    /// No button
    None,
}

impl MouseEvent {
    /// Create a new mouse event
    pub fn new(event_type: MouseEventType, button: MouseButton, target: NodeId) -> Self {
        Self {
            event_type,
            button,
            target,
            bubbles: true,
            cancelable: true,
            default_prevented: false,
        }
    }

    /// Create a primary-button click
    pub fn click(target: NodeId) -> Self {
        Self::new(MouseEventType::Click, MouseButton::Primary, target)
    }

    /// Prevent the host's default action
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
