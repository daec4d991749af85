//! rondo input - input events and focus
//!
//! Keyboard and mouse event types delivered to widgets, plus keyboard focus
//! tracking over the element tree.

mod event;
mod focus;
mod keyboard;
mod mouse;

pub use event::InputEvent;
pub use focus::{FocusManager, TabIndex, first_focusable_descendant, is_focusable};
pub use keyboard::{Key, KeyModifiers, KeyboardEvent, KeyboardEventType};
pub use mouse::{MouseButton, MouseEvent, MouseEventType};
