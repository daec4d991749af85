//! Carousel registry
//!
//! Maps container identity to its bound carousel. The registry is owned by
//! whatever composition root constructs widgets; nothing is stashed on the
//! container itself. It also plays the delegated listener: one dispatch
//! entry point routes bubbling input to the innermost bound container.

use std::collections::HashMap;

use rondo_dom::{DomTree, Node, NodeId};
use rondo_input::{FocusManager, InputEvent};

use crate::{CarouselConfig, CarouselError, PageCarousel};

/// Registry of bound carousels
#[derive(Debug, Default)]
pub struct CarouselRegistry {
    carousels: HashMap<NodeId, PageCarousel>,
}

impl CarouselRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a carousel to a container element. Idempotent per container:
    /// a second bind returns the existing instance and ignores the new
    /// configuration. A fresh bind applies the construction contract -
    /// random start when configured (gracefully skipped with zero pages),
    /// otherwise a status refresh of whatever page is already marked.
    pub fn bind(
        &mut self,
        tree: &mut DomTree,
        container: NodeId,
        config: CarouselConfig,
    ) -> Result<&PageCarousel, CarouselError> {
        if !tree.get(container).is_some_and(Node::is_element) {
            return Err(CarouselError::InvalidContainer(container));
        }

        if self.carousels.contains_key(&container) {
            tracing::debug!(?container, "container already bound, reusing instance");
            return Ok(&self.carousels[&container]);
        }

        tracing::debug!(?container, "binding carousel");
        let carousel = PageCarousel::new(container, config);
        if carousel.config().random_start {
            if let Err(error) = carousel.pick_random_start(tree) {
                tracing::debug!(%error, ?container, "random start skipped");
            }
        } else {
            carousel.refresh_status(tree);
        }

        Ok(self.carousels.entry(container).or_insert(carousel))
    }

    /// Carousel bound to a container, if any
    pub fn get(&self, container: NodeId) -> Option<&PageCarousel> {
        self.carousels.get(&container)
    }

    /// Check whether a container has a carousel bound
    pub fn is_bound(&self, container: NodeId) -> bool {
        self.carousels.contains_key(&container)
    }

    /// Number of bound carousels
    pub fn len(&self) -> usize {
        self.carousels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carousels.is_empty()
    }

    /// Deliver a bubbling input event: walk from the target up the tree
    /// and hand the event to the first bound container on the path.
    /// Returns whether a carousel observed the event.
    pub fn dispatch(
        &self,
        tree: &mut DomTree,
        focus: &mut FocusManager,
        event: &mut InputEvent,
    ) -> bool {
        let mut cursor = Some(event.target());
        while let Some(id) = cursor {
            if let Some(carousel) = self.carousels.get(&id) {
                carousel.handle_event(tree, focus, event);
                return true;
            }
            cursor = tree.parent(id);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with_container() -> (DomTree, NodeId) {
        let mut tree = DomTree::new();
        let container = tree.create_element("div");
        tree.append_child(tree.root(), container);
        (tree, container)
    }

    #[test]
    fn test_bind_is_idempotent_per_container() {
        let (mut tree, container) = tree_with_container();
        let mut registry = CarouselRegistry::new();

        registry
            .bind(&mut tree, container, CarouselConfig::default())
            .unwrap();
        let rebound = registry
            .bind(
                &mut tree,
                container,
                CarouselConfig {
                    active_class: "ignored".to_string(),
                    ..Default::default()
                },
            )
            .unwrap();

        // The original configuration survives the second bind
        assert_eq!(rebound.config().active_class, "active");
        assert_eq!(registry.len(), 1);
        assert!(registry.is_bound(container));
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_bind_rejects_non_elements() {
        let (mut tree, _) = tree_with_container();
        let text = tree.create_text("not a container");
        let mut registry = CarouselRegistry::new();

        assert!(matches!(
            registry.bind(&mut tree, text, CarouselConfig::default()),
            Err(CarouselError::InvalidContainer(_))
        ));
        assert!(matches!(
            registry.bind(&mut tree, NodeId(500), CarouselConfig::default()),
            Err(CarouselError::InvalidContainer(_))
        ));
    }

    #[test]
    fn test_dispatch_ignores_unbound_subtrees() {
        let (mut tree, container) = tree_with_container();
        let outside = tree.create_element("p");
        tree.append_child(tree.root(), outside);

        let mut registry = CarouselRegistry::new();
        registry
            .bind(&mut tree, container, CarouselConfig::default())
            .unwrap();

        let mut focus = FocusManager::new();
        let mut event = InputEvent::click(outside);
        assert!(!registry.dispatch(&mut tree, &mut focus, &mut event));
    }
}
