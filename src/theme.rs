use crate::constants::{THEME_CLASS_PREFIX, THEME_TOGGLE_ID};
use crate::dom;
use crate::scene::Scene;
use folio_core::Theme;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Reflect `theme` on `<body>` (class) and `<html>` (`data-theme`).
pub fn apply_theme(document: &web::Document, theme: Theme) {
    if let Some(body) = document.body() {
        for t in [Theme::Violet, Theme::Ember] {
            let class = format!("{}{}", THEME_CLASS_PREFIX, t.name());
            dom::set_class(&body, &class, t == theme);
        }
    }
    if let Some(root) = document.document_element() {
        _ = root.set_attribute("data-theme", theme.name());
    }
    if let Some(button) = document.get_element_by_id(THEME_TOGGLE_ID) {
        _ = button.set_attribute("aria-pressed", if theme == Theme::Ember { "true" } else { "false" });
    }
}

pub fn wire_theme_toggle(document: &web::Document, theme: Rc<Cell<Theme>>, scene: Rc<RefCell<Scene>>) {
    let doc = document.clone();
    let wired = dom::add_click_listener(document, THEME_TOGGLE_ID, move || {
        let next = theme.get().toggled();
        theme.set(next);
        apply_theme(&doc, next);
        let regenerated = scene.borrow_mut().apply_theme(next);
        log::info!("[theme] {} (background regenerated: {})", next.name(), regenerated);
    });
    if !wired {
        log::warn!("[theme] missing #{}", THEME_TOGGLE_ID);
    }
}
