//! Page carousel
//!
//! The carousel holds a non-owning handle to its container element and a
//! configuration; every page query goes back to the live tree. Exactly one
//! page carries the active class after any completed transition, and
//! `aria-hidden` always mirrors the inactive state.

use rondo_dom::{DomTree, NodeId, Selector};
use rondo_input::{FocusManager, InputEvent, Key, KeyboardEventType, MouseEventType};

use crate::{CarouselConfig, CarouselError};

const ARIA_HIDDEN: &str = "aria-hidden";

/// Paging direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// A page to activate or deactivate: a node handle or a zero-based index
/// into the live page collection. Either form is normalized through
/// resolution before use.
#[derive(Debug, Clone, Copy)]
pub enum PageRef {
    Node(NodeId),
    Index(usize),
}

impl From<NodeId> for PageRef {
    fn from(id: NodeId) -> Self {
        Self::Node(id)
    }
}

impl From<usize> for PageRef {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Page carousel bound to one container element
#[derive(Debug)]
pub struct PageCarousel {
    container: NodeId,
    config: CarouselConfig,
}

impl PageCarousel {
    pub(crate) fn new(container: NodeId, config: CarouselConfig) -> Self {
        Self { container, config }
    }

    /// Container element this carousel is bound to
    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Configuration, fixed at bind time
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The current page elements under the container, in document order.
    /// Recomputed from the live tree on every call.
    pub fn pages(&self, tree: &DomTree) -> Vec<NodeId> {
        match Selector::parse(&self.config.page_selector) {
            Some(selector) => tree.query_all(self.container, &selector),
            None => Vec::new(),
        }
    }

    /// Number of pages currently present
    pub fn page_count(&self, tree: &DomTree) -> usize {
        self.pages(tree).len()
    }

    /// The page carrying the active class, first match in document order
    pub fn active_page(&self, tree: &DomTree) -> Option<NodeId> {
        self.active_pages(tree).first().copied()
    }

    /// All pages carrying the active class. More than one means external
    /// mutation broke the invariant; `turn_page` repairs it.
    pub fn active_pages(&self, tree: &DomTree) -> Vec<NodeId> {
        self.pages(tree)
            .into_iter()
            .filter(|&page| tree.has_class(page, &self.config.active_class))
            .collect()
    }

    /// The page a transition in `direction` would land on, with wraparound.
    /// `None` only when there are zero pages.
    pub fn next_page(&self, tree: &DomTree, direction: Direction) -> Option<NodeId> {
        let pages = self.pages(tree);
        if pages.is_empty() {
            return None;
        }
        let active = self
            .active_page(tree)
            .and_then(|active| pages.iter().position(|&page| page == active));

        let index = match direction {
            Direction::Right => match active {
                Some(i) if i + 1 < pages.len() => i + 1,
                _ => 0,
            },
            Direction::Left => match active {
                Some(i) if i > 0 => i - 1,
                _ => pages.len() - 1,
            },
        };
        Some(pages[index])
    }

    /// Mark a page active: active class on, inactive class off, visible to
    /// assistive tech. Other pages are not touched.
    pub fn activate_page(
        &self,
        tree: &mut DomTree,
        target: impl Into<PageRef>,
    ) -> Result<NodeId, CarouselError> {
        let page = self.resolve_page(tree, target.into())?;
        tree.add_class(page, &self.config.active_class)?;
        tree.remove_class(page, &self.config.not_active_class)?;
        tree.remove_attribute(page, ARIA_HIDDEN)?;
        Ok(page)
    }

    /// Mark a page inactive: inactive class on, active class off, hidden
    /// from assistive tech
    pub fn deactivate_page(
        &self,
        tree: &mut DomTree,
        target: impl Into<PageRef>,
    ) -> Result<NodeId, CarouselError> {
        let page = self.resolve_page(tree, target.into())?;
        tree.add_class(page, &self.config.not_active_class)?;
        tree.remove_class(page, &self.config.active_class)?;
        tree.set_attribute(page, ARIA_HIDDEN, "true")?;
        Ok(page)
    }

    /// Turn one page in `direction`: suppress the input's default action,
    /// activate the landing page, deactivate the previous one(s), refresh
    /// the status displays, and move focus for keyboard-from-page input.
    pub fn turn_page(
        &self,
        tree: &mut DomTree,
        focus: &mut FocusManager,
        event: &mut InputEvent,
        direction: Direction,
    ) -> Result<(), CarouselError> {
        event.prevent_default();
        self.trace(tree, &format!("turning {direction}"), false);

        let previously_active = self.active_pages(tree);
        let Some(next) = self.next_page(tree, direction) else {
            return Err(CarouselError::NoPages);
        };

        // Activation first: when the carousel has a single page the landing
        // page is also the departing page, and it must end active.
        self.activate_page(tree, next)?;
        for page in previously_active {
            if page != next {
                self.deactivate_page(tree, page)?;
            }
        }

        self.refresh_status(tree);

        // Keyboard navigation from within a page would otherwise leave
        // focus on a now-hidden element and snap back to the document top.
        if !self.is_button(tree, event.target()) {
            focus.focus_first_in(tree, next);
        }
        Ok(())
    }

    /// Delegated interaction entry point: route clicks on the navigation
    /// buttons, and key input from the allow-list, into `turn_page`.
    /// Everything else is ignored without side effects.
    pub fn handle_event(
        &self,
        tree: &mut DomTree,
        focus: &mut FocusManager,
        event: &mut InputEvent,
    ) {
        let direction = match &*event {
            InputEvent::Click(click) => {
                if click.event_type != MouseEventType::Click {
                    return;
                }
                self.trace(tree, "triggered", true);
                self.button_direction(tree, click.target)
            }
            InputEvent::Key(key) => {
                if !matches!(
                    key.event_type,
                    KeyboardEventType::KeyDown | KeyboardEventType::KeyPress
                ) {
                    return;
                }
                self.trace(tree, "triggered", true);
                let target = key.target;
                match key.key {
                    Key::ArrowRight => Some(Direction::Right),
                    Key::ArrowLeft => Some(Direction::Left),
                    // Space and enter only act as a button activation
                    Key::Space | Key::Enter => self.button_direction(tree, target),
                    // Outside the allow-list: no preventDefault, no change
                    _ => return,
                }
            }
        };

        if let Some(direction) = direction {
            if let Err(error) = self.turn_page(tree, focus, event, direction) {
                tracing::debug!(%error, container = ?self.container, "page turn did not occur");
            }
        }
    }

    /// Push the 1-based active page number and the page count into the
    /// status display targets under the container, when configured.
    pub fn refresh_status(&self, tree: &mut DomTree) {
        let pages = self.pages(tree);
        let current = self
            .active_page(tree)
            .and_then(|active| pages.iter().position(|&page| page == active));

        // 1-based rank of the active page; 0 when nothing is active
        let current_text = current.map_or(0, |i| i + 1).to_string();
        self.set_status_text(tree, &self.config.current_page_selector, &current_text);
        self.set_status_text(tree, &self.config.total_pages_selector, &pages.len().to_string());
    }

    /// Debug trace: replace (`reset`) or append a line in the progress
    /// target; without one, fall back to the diagnostic log. No-op unless
    /// debug is enabled.
    pub fn trace(&self, tree: &mut DomTree, message: &str, reset: bool) {
        if !self.config.debug {
            return;
        }
        let target = Selector::parse(&self.config.progress_selector)
            .and_then(|selector| tree.query_first(self.container, &selector));
        match target {
            Some(target) => {
                let line = format!("{message}\n");
                let _ = if reset {
                    tree.set_text(target, &line)
                } else {
                    tree.append_text(target, &line)
                };
            }
            None => tracing::debug!(container = ?self.container, "carousel: {message}"),
        }
    }

    pub(crate) fn pick_random_start(&self, tree: &mut DomTree) -> Result<(), CarouselError> {
        let pages = self.pages(tree);
        self.trace(tree, &format!("picking random, size={}", pages.len()), true);
        if pages.is_empty() {
            return Err(CarouselError::NoPages);
        }

        let index = fastrand::usize(..pages.len());
        self.trace(tree, &format!("rand={index}"), false);

        for page in pages.iter().copied() {
            self.deactivate_page(tree, page)?;
        }
        self.activate_page(tree, index)?;
        self.refresh_status(tree);
        self.trace(tree, "chose random start", false);
        Ok(())
    }

    fn resolve_page(&self, tree: &DomTree, target: PageRef) -> Result<NodeId, CarouselError> {
        match target {
            PageRef::Node(id) => Ok(id),
            PageRef::Index(index) => {
                let pages = self.pages(tree);
                if pages.is_empty() {
                    return Err(CarouselError::NoPages);
                }
                pages
                    .get(index)
                    .copied()
                    .ok_or(CarouselError::IndexOutOfRange {
                        index,
                        len: pages.len(),
                    })
            }
        }
    }

    fn button_direction(&self, tree: &DomTree, target: NodeId) -> Option<Direction> {
        if self.matches_selector(tree, target, &self.config.right_button_selector) {
            Some(Direction::Right)
        } else if self.matches_selector(tree, target, &self.config.left_button_selector) {
            Some(Direction::Left)
        } else {
            None
        }
    }

    fn is_button(&self, tree: &DomTree, target: NodeId) -> bool {
        self.button_direction(tree, target).is_some()
    }

    fn matches_selector(&self, tree: &DomTree, id: NodeId, selector: &str) -> bool {
        Selector::parse(selector).is_some_and(|selector| tree.matches(id, &selector))
    }

    fn set_status_text(&self, tree: &mut DomTree, selector: &str, text: &str) {
        let Some(selector) = Selector::parse(selector) else {
            return;
        };
        for target in tree.query_all(self.container, &selector) {
            let _ = tree.set_text(target, text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel_with_pages(count: usize) -> (DomTree, PageCarousel, Vec<NodeId>) {
        let mut tree = DomTree::new();
        let container = tree.create_element("div");
        tree.append_child(tree.root(), container);

        let mut pages = Vec::new();
        for _ in 0..count {
            let page = tree.create_element("section");
            tree.add_class(page, "item-page").unwrap();
            tree.append_child(container, page);
            pages.push(page);
        }
        let carousel = PageCarousel::new(container, CarouselConfig::default());
        (tree, carousel, pages)
    }

    #[test]
    fn test_next_page_wraps_right() {
        let (mut tree, carousel, pages) = carousel_with_pages(3);
        carousel.activate_page(&mut tree, pages[2]).unwrap();

        assert_eq!(carousel.next_page(&tree, Direction::Right), Some(pages[0]));
    }

    #[test]
    fn test_next_page_wraps_left() {
        let (mut tree, carousel, pages) = carousel_with_pages(3);
        carousel.activate_page(&mut tree, pages[0]).unwrap();

        assert_eq!(carousel.next_page(&tree, Direction::Left), Some(pages[2]));
    }

    #[test]
    fn test_next_page_without_active_page() {
        let (tree, carousel, pages) = carousel_with_pages(3);

        assert_eq!(carousel.next_page(&tree, Direction::Right), Some(pages[0]));
        assert_eq!(carousel.next_page(&tree, Direction::Left), Some(pages[2]));
    }

    #[test]
    fn test_next_page_empty() {
        let (tree, carousel, _) = carousel_with_pages(0);
        assert_eq!(carousel.next_page(&tree, Direction::Right), None);
    }

    #[test]
    fn test_activate_mirrors_aria_hidden() {
        let (mut tree, carousel, pages) = carousel_with_pages(2);

        carousel.deactivate_page(&mut tree, pages[1]).unwrap();
        assert_eq!(tree.attribute(pages[1], "aria-hidden"), Some("true"));
        assert!(tree.has_class(pages[1], "hidden"));

        carousel.activate_page(&mut tree, pages[1]).unwrap();
        assert_eq!(tree.attribute(pages[1], "aria-hidden"), None);
        assert!(tree.has_class(pages[1], "active"));
        assert!(!tree.has_class(pages[1], "hidden"));
    }

    #[test]
    fn test_activate_by_index_out_of_range() {
        let (mut tree, carousel, _) = carousel_with_pages(2);
        assert!(matches!(
            carousel.activate_page(&mut tree, 5usize),
            Err(CarouselError::IndexOutOfRange { index: 5, len: 2 })
        ));
    }

    #[test]
    fn test_activate_by_index_with_no_pages() {
        let (mut tree, carousel, _) = carousel_with_pages(0);
        assert!(matches!(
            carousel.activate_page(&mut tree, 0usize),
            Err(CarouselError::NoPages)
        ));
    }

    #[test]
    fn test_ignored_key_leaves_state_alone() {
        let (mut tree, carousel, pages) = carousel_with_pages(3);
        carousel.activate_page(&mut tree, pages[0]).unwrap();

        let mut focus = FocusManager::new();
        let mut event = InputEvent::key_down(Key::Character('x'), pages[0]);
        carousel.handle_event(&mut tree, &mut focus, &mut event);

        assert_eq!(carousel.active_pages(&tree), vec![pages[0]]);
        assert!(!event.is_default_prevented());
    }

    #[test]
    fn test_key_up_is_ignored() {
        let (mut tree, carousel, pages) = carousel_with_pages(3);
        carousel.activate_page(&mut tree, pages[0]).unwrap();

        let mut focus = FocusManager::new();
        let mut event = InputEvent::Key(rondo_input::KeyboardEvent::new(
            KeyboardEventType::KeyUp,
            Key::ArrowRight,
            pages[0],
        ));
        carousel.handle_event(&mut tree, &mut focus, &mut event);

        assert_eq!(carousel.active_page(&tree), Some(pages[0]));
    }
}
