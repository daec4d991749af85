//! Tree arena
//!
//! Arena-based tree storage. Nodes are created into the arena, then linked
//! with `append_child`. Removal unlinks; a detached node stays allocated but
//! is unreachable from the root, so traversal and queries never see it.

use crate::{Node, NodeId, Selector};

/// Element-tree errors
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("node {0:?} is not in the tree")]
    Missing(NodeId),
    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),
}

/// Arena-based tree with a document node at the root
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new tree holding only the document root
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// Document root ID
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if !id.is_valid() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if !id.is_valid() {
            return None;
        }
        self.nodes.get_mut(id.0 as usize)
    }

    /// Number of nodes in the arena, detached nodes included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the arena holds only the root
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element node
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.alloc(Node::text(content.to_string()))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.alloc(Node::comment(content.to_string()))
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous position first
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || self.get(parent).is_none() || self.get(child).is_none() {
            return;
        }
        self.detach(child);

        let last = self.nodes[parent.0 as usize].last_child;
        if last.is_valid() {
            self.nodes[last.0 as usize].next_sibling = child;
            self.nodes[child.0 as usize].prev_sibling = last;
        } else {
            self.nodes[parent.0 as usize].first_child = child;
        }
        self.nodes[parent.0 as usize].last_child = child;
        self.nodes[child.0 as usize].parent = parent;
    }

    /// Unlink a node (and its subtree) from the tree
    pub fn remove(&mut self, id: NodeId) {
        if self.get(id).is_none() {
            return;
        }
        tracing::trace!(?id, "detaching node");
        self.detach(id);
    }

    fn detach(&mut self, id: NodeId) {
        let node = &self.nodes[id.0 as usize];
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);

        if prev.is_valid() {
            self.nodes[prev.0 as usize].next_sibling = next;
        }
        if next.is_valid() {
            self.nodes[next.0 as usize].prev_sibling = prev;
        }
        if parent.is_valid() {
            let p = &mut self.nodes[parent.0 as usize];
            if p.first_child == id {
                p.first_child = next;
            }
            if p.last_child == id {
                p.last_child = prev;
            }
        }

        let node = &mut self.nodes[id.0 as usize];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// Parent of a node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.get(id)?.parent;
        parent.is_valid().then_some(parent)
    }

    /// Iterate over the direct children of a node
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Iterate over all descendants of a node in document (pre-)order,
    /// the node itself excluded
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack = Vec::new();
        if let Some(node) = self.get(id) {
            if node.first_child.is_valid() {
                stack.push(node.first_child);
            }
        }
        Descendants { tree: self, stack }
    }

    /// Check whether a node is an element matching the selector
    pub fn matches(&self, id: NodeId, selector: &Selector) -> bool {
        self.get(id)
            .and_then(Node::as_element)
            .is_some_and(|e| selector.matches(e))
    }

    /// All descendant elements of `root` matching the selector, in document
    /// order. Always recomputed from the live tree.
    pub fn query_all(&self, root: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(root)
            .filter(|&id| self.matches(id, selector))
            .collect()
    }

    /// First descendant element of `root` matching the selector
    pub fn query_first(&self, root: NodeId, selector: &Selector) -> Option<NodeId> {
        self.descendants(root).find(|&id| self.matches(id, selector))
    }

    /// Tag name of an element node
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.get(id)?.as_element().map(|e| e.tag.as_str())
    }

    /// Attribute value on an element node
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)?.as_element()?.attr(name)
    }

    /// Set an attribute on an element node
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        self.element_mut(id)?.set_attr(name, value);
        Ok(())
    }

    /// Remove an attribute from an element node
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<(), DomError> {
        self.element_mut(id)?.remove_attr(name);
        Ok(())
    }

    /// Check whether an element carries a class
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.get(id)
            .and_then(Node::as_element)
            .is_some_and(|e| e.classes.has(class))
    }

    /// Add a class to an element node
    pub fn add_class(&mut self, id: NodeId, class: &str) -> Result<(), DomError> {
        self.element_mut(id)?.classes.add(class);
        Ok(())
    }

    /// Remove a class from an element node
    pub fn remove_class(&mut self, id: NodeId, class: &str) -> Result<(), DomError> {
        self.element_mut(id)?.classes.remove(class);
        Ok(())
    }

    /// Replace an element's children with a single text node
    pub fn set_text(&mut self, id: NodeId, text: &str) -> Result<(), DomError> {
        self.element_mut(id)?;
        let children: Vec<NodeId> = self.children(id).map(|(child, _)| child).collect();
        for child in children {
            self.detach(child);
        }
        let text_node = self.create_text(text);
        self.append_child(id, text_node);
        Ok(())
    }

    /// Append a text node to an element's children
    pub fn append_text(&mut self, id: NodeId, text: &str) -> Result<(), DomError> {
        self.element_mut(id)?;
        let text_node = self.create_text(text);
        self.append_child(id, text_node);
        Ok(())
    }

    /// Concatenated text of all descendant text nodes, in document order
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for desc in self.descendants(id) {
            if let Some(text) = self.get(desc).and_then(Node::as_text) {
                out.push_str(text);
            }
        }
        out
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut crate::ElementData, DomError> {
        let node = self.get_mut(id).ok_or(DomError::Missing(id))?;
        node.as_element_mut().ok_or(DomError::NotAnElement(id))
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a node's direct children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.next.is_valid() {
            return None;
        }
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

/// Pre-order iterator over a node's descendants
pub struct Descendants<'a> {
    tree: &'a DomTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        if let Some(node) = self.tree.get(id) {
            // Sibling below child so the child pops first
            if node.next_sibling.is_valid() {
                self.stack.push(node.next_sibling);
            }
            if node.first_child.is_valid() {
                self.stack.push(node.first_child);
            }
        }
        Some(id)
    }
}
