use crate::constants::NAV_ACTIVE_CLASS;
use crate::dom;
use folio_core::{Section, SectionTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Highlight the nav link of the section under the header, now and on every
/// scroll or resize.
pub fn wire_section_tracking(document: &web::Document) {
    let tracker = Rc::new(RefCell::new(SectionTracker::new()));
    refresh(document, &tracker, true);
    for event in ["scroll", "resize"] {
        let doc = document.clone();
        let tracker = tracker.clone();
        dom::add_window_listener(event, move || refresh(&doc, &tracker, false));
    }
}

fn refresh(document: &web::Document, tracker: &Rc<RefCell<SectionTracker>>, force: bool) {
    let Some(window) = web::window() else {
        return;
    };
    let scroll = dom::scroll_y(&window);
    let changed = tracker
        .borrow_mut()
        .update(scroll, |s| dom::section_layout(document, s));
    if changed || force {
        let active = tracker.borrow().active();
        if changed {
            log::info!("[nav] active section: {}", active.id());
        }
        highlight(document, active);
    }
}

fn highlight(document: &web::Document, active: Section) {
    for section in Section::ALL {
        let selector = format!("nav a[href=\"#{}\"]", section.id());
        let Ok(links) = document.query_selector_all(&selector) else {
            continue;
        };
        for i in 0..links.length() {
            if let Some(el) = links.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                dom::set_class(&el, NAV_ACTIVE_CLASS, section == active);
            }
        }
    }
}
