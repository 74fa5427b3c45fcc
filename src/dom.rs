use crate::config::SceneConfig;
use folio_core::{Section, SectionLayout};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    let Some(el) = document.get_element_by_id(element_id) else {
        return false;
    };
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
    true
}

pub fn add_window_listener(event: &str, mut handler: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Live offset/height of a section element; `None` while it is not mounted.
pub fn section_layout(document: &web::Document, section: Section) -> Option<SectionLayout> {
    let el = document
        .get_element_by_id(section.id())?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    Some(SectionLayout::new(
        el.offset_top() as f64,
        el.offset_height() as f64,
    ))
}

pub fn scene_config(canvas: &web::HtmlCanvasElement) -> SceneConfig {
    let background = canvas.get_attribute("data-background");
    let theme = canvas.get_attribute("data-theme");
    let music = canvas.get_attribute("data-music");
    SceneConfig::from_attrs(background.as_deref(), theme.as_deref(), music.as_deref())
}

pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}
