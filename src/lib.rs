#![cfg(target_arch = "wasm32")]
use config::Background;
use folio_core::constants::{ORBIT_PITCH_LIMIT_BUBBLES, ORBIT_PITCH_LIMIT_EMBLEMS};
use folio_core::{Camera, OrbitRig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod nav;
mod render;
mod scene;
mod theme;

use constants::CANVAS_ID;
use scene::Scene;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    dom::add_window_listener("resize", move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Navigation works without the background
    nav::wire_section_tracking(&document);

    let canvas: Option<web::HtmlCanvasElement> = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    let config = canvas.as_ref().map(dom::scene_config).unwrap_or_default();
    log::info!(
        "[config] background={:?} theme={}",
        config.background,
        config.theme.name()
    );

    let theme = Rc::new(Cell::new(config.theme));
    theme::apply_theme(&document, config.theme);

    let now_ms = instant::now();
    let scene = Rc::new(RefCell::new(Scene::new(
        config.background,
        config.theme,
        now_ms,
        rand::random(),
    )));
    theme::wire_theme_toggle(&document, theme.clone(), scene.clone());

    if let Some(music) = audio::MusicToggle::from_document(&document, &config) {
        audio::wire_music_toggle(&document, Rc::new(RefCell::new(music)));
    }

    let canvas = canvas.ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    wire_canvas_resize(&canvas);

    let camera = Rc::new(RefCell::new(Camera::default()));
    let pitch_limit = match config.background {
        Background::Bubbles => ORBIT_PITCH_LIMIT_BUBBLES,
        Background::Emblems => ORBIT_PITCH_LIMIT_EMBLEMS,
    };
    let rig = Rc::new(RefCell::new(OrbitRig::with_pitch_limit(pitch_limit)));
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        camera: camera.clone(),
        rig: rig.clone(),
    });

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        camera,
        theme,
        rig,
        canvas,
        gpu,
        instances: Vec::with_capacity(constants::MAX_INSTANCES),
        started_ms: now_ms,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
