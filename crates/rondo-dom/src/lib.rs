//! rondo DOM - retained element tree
//!
//! Arena-based element tree that rondo widgets query and mutate. The tree is
//! the single source of truth for widget state; widgets hold `NodeId` handles
//! and re-query on every operation.

mod classlist;
mod node;
mod selector;
mod tree;

pub use classlist::ClassList;
pub use node::{Attribute, ElementData, Node, NodeData};
pub use selector::Selector;
pub use tree::{Children, Descendants, DomError, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Document root ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel meaning "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check whether this ID refers to a node at all
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }
}
