//! Integration tests for rondo-dom
//!
//! Tree construction, traversal order, and element state under mutation.

use rondo_dom::{DomTree, NodeId, Selector};

fn build_carousel_markup(tree: &mut DomTree) -> (NodeId, Vec<NodeId>) {
    // <div class="carousel">
    //   <a class="prev-button">
    //   <section class="item-page"> x3, one wrapped in an extra <div>
    //   <a class="next-button">
    // </div>
    let container = tree.create_element("div");
    tree.add_class(container, "carousel").unwrap();
    tree.append_child(tree.root(), container);

    let prev = tree.create_element("a");
    tree.add_class(prev, "prev-button").unwrap();
    tree.append_child(container, prev);

    let mut pages = Vec::new();
    for nested in [false, true, false] {
        let page = tree.create_element("section");
        tree.add_class(page, "item-page").unwrap();
        if nested {
            let wrapper = tree.create_element("div");
            tree.append_child(container, wrapper);
            tree.append_child(wrapper, page);
        } else {
            tree.append_child(container, page);
        }
        pages.push(page);
    }

    let next = tree.create_element("a");
    tree.add_class(next, "next-button").unwrap();
    tree.append_child(container, next);

    (container, pages)
}

#[test]
fn test_query_matches_nested_descendants_in_document_order() {
    let mut tree = DomTree::new();
    let (container, pages) = build_carousel_markup(&mut tree);

    let selector = Selector::parse(".item-page").unwrap();
    assert_eq!(tree.query_all(container, &selector), pages);
}

#[test]
fn test_button_selectors_do_not_match_pages() {
    let mut tree = DomTree::new();
    let (container, pages) = build_carousel_markup(&mut tree);

    let next = Selector::parse(".next-button").unwrap();
    let hits = tree.query_all(container, &next);
    assert_eq!(hits.len(), 1);
    assert!(!pages.contains(&hits[0]));
    assert_eq!(tree.tag(hits[0]), Some("a"));
}

#[test]
fn test_class_and_attribute_state() {
    let mut tree = DomTree::new();
    let (_, pages) = build_carousel_markup(&mut tree);
    let page = pages[0];

    tree.add_class(page, "active").unwrap();
    tree.remove_class(page, "hidden").unwrap();
    assert!(tree.has_class(page, "active"));
    assert!(tree.has_class(page, "item-page"));

    tree.set_attribute(page, "aria-hidden", "true").unwrap();
    assert_eq!(tree.attribute(page, "aria-hidden"), Some("true"));
    tree.remove_attribute(page, "aria-hidden").unwrap();
    assert_eq!(tree.attribute(page, "aria-hidden"), None);
}

#[test]
fn test_reparenting_keeps_order_consistent() {
    let mut tree = DomTree::new();
    let (container, pages) = build_carousel_markup(&mut tree);

    // Move the first page to the end; queries must reflect the new order.
    tree.append_child(container, pages[0]);

    let selector = Selector::parse(".item-page").unwrap();
    assert_eq!(
        tree.query_all(container, &selector),
        vec![pages[1], pages[2], pages[0]]
    );
}

#[test]
fn test_sentinel_ids() {
    assert!(!NodeId::NONE.is_valid());
    assert!(NodeId::ROOT.is_valid());
    assert!(NodeId(7).is_valid());
}
