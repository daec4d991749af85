//! Example: Basic usage of the rondo carousel

use rondo_dom::DomTree;
use rondo_input::{FocusManager, InputEvent, Key};
use rondo_widget::{CarouselConfig, CarouselRegistry};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Build a small document: three pages, two buttons, status displays
    let mut tree = DomTree::new();
    let container = tree.create_element("div");
    tree.append_child(tree.root(), container);

    let prev = tree.create_element("a");
    tree.add_class(prev, "prev-button").unwrap();
    tree.append_child(container, prev);

    for (i, title) in ["First", "Second", "Third"].into_iter().enumerate() {
        let page = tree.create_element("section");
        tree.add_class(page, "item-page").unwrap();
        tree.add_class(page, if i == 0 { "active" } else { "hidden" })
            .unwrap();
        tree.append_child(container, page);

        let heading = tree.create_element("h2");
        tree.set_text(heading, title).unwrap();
        tree.append_child(page, heading);
    }

    let next = tree.create_element("a");
    tree.add_class(next, "next-button").unwrap();
    tree.append_child(container, next);

    let current = tree.create_element("span");
    tree.add_class(current, "currentPage").unwrap();
    tree.append_child(container, current);
    let total = tree.create_element("span");
    tree.add_class(total, "totalPages").unwrap();
    tree.append_child(container, total);

    // Bind a carousel and drive it like a host would
    let mut registry = CarouselRegistry::new();
    let mut focus = FocusManager::new();
    registry
        .bind(&mut tree, container, CarouselConfig::default())
        .unwrap();

    let status = |tree: &DomTree| {
        format!(
            "page {} of {}",
            tree.text_content(current),
            tree.text_content(total)
        )
    };
    println!("bound: {}", status(&tree));

    let mut click = InputEvent::click(next);
    registry.dispatch(&mut tree, &mut focus, &mut click);
    println!("after clicking next: {}", status(&tree));

    let active = registry.get(container).unwrap().active_page(&tree).unwrap();
    let mut arrow = InputEvent::key_down(Key::ArrowLeft, active);
    registry.dispatch(&mut tree, &mut focus, &mut arrow);
    println!("after arrow-left: {}", status(&tree));
}
