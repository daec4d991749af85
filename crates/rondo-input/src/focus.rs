//! Focus management
//!
//! Tracks which element holds keyboard focus and finds focus targets
//! inside a subtree.

use rondo_dom::{DomTree, NodeId};

/// Focus manager
#[derive(Debug, Default)]
pub struct FocusManager {
    focused: Option<NodeId>,
}

impl FocusManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus an element
    pub fn focus(&mut self, id: NodeId) {
        self.focused = Some(id);
    }

    /// Get the focused element
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Drop focus
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Move focus to the first focusable descendant of `root`, if any.
    /// Focus is left untouched when the subtree has no focus target.
    pub fn focus_first_in(&mut self, tree: &DomTree, root: NodeId) -> Option<NodeId> {
        let target = first_focusable_descendant(tree, root)?;
        tracing::debug!(?target, ?root, "moving focus into subtree");
        self.focused = Some(target);
        Some(target)
    }
}

/// Tab index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    NotFocusable,
    Sequential(i32),
}

impl TabIndex {
    pub fn parse(value: &str) -> Self {
        match value.parse::<i32>() {
            Ok(n) if n < 0 => Self::NotFocusable,
            Ok(n) => Self::Sequential(n),
            Err(_) => Self::NotFocusable,
        }
    }

    pub fn is_focusable(&self) -> bool {
        matches!(self, Self::Sequential(_))
    }
}

/// Check whether an element can take keyboard focus: interactive tags, or
/// an explicit non-negative tabindex
pub fn is_focusable(tree: &DomTree, id: NodeId) -> bool {
    let Some(tag) = tree.tag(id) else {
        return false;
    };
    if matches!(tag, "a" | "button" | "input" | "select" | "textarea") {
        return tree.attribute(id, "disabled").is_none();
    }
    tree.attribute(id, "tabindex")
        .is_some_and(|v| TabIndex::parse(v).is_focusable())
}

/// First focusable element under `root` in document order
pub fn first_focusable_descendant(tree: &DomTree, root: NodeId) -> Option<NodeId> {
    tree.descendants(root).find(|&id| is_focusable(tree, id))
}
