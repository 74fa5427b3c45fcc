use crate::input;
use crate::scene::Scene;
use folio_core::{Camera, OrbitRig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub camera: Rc<RefCell<Camera>>,
    pub rig: Rc<RefCell<OrbitRig>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_click(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let px = input::pointer_canvas_px(&ev, &w.canvas);
        let dragging = w
            .rig
            .borrow_mut()
            .drag_to(px, w.canvas.height() as f32);
        let cursor = if dragging {
            "grabbing"
        } else {
            let (ro, rd) = input::pointer_ray(&ev, &w.canvas, &w.camera.borrow());
            match w.scene.borrow_mut().hover(ro, rd) {
                Some(_) => "pointer",
                None => "grab",
            }
        };
        _ = w.canvas.style().set_property("cursor", cursor);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let px = input::pointer_canvas_px(&ev, &w.canvas);
        w.rig.borrow_mut().begin_drag(px);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let rig = w.rig.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let mut rig = rig.borrow_mut();
        if rig.drag.active && rig.end_drag() {
            log::info!("[orbit] yaw={:.2} pitch={:.2}", rig.yaw, rig.pitch);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        // The click that ends an orbit drag is not a burst
        if w.rig.borrow().was_dragged() {
            return;
        }
        let (ro, rd) = input::pointer_ray(&ev, &w.canvas, &w.camera.borrow());
        let now_ms = instant::now();
        if let Some(id) = w.scene.borrow_mut().activate(ro, rd, now_ms) {
            log::info!("[click] burst bubble {}", id);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
