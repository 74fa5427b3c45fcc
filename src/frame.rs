use crate::constants::{CLEAR_EMBER, CLEAR_EMBLEM, CLEAR_VIOLET};
use crate::render::{self, InstanceRaw};
use crate::scene::Scene;
use folio_core::{hex_rgb, Camera, OrbitRig, Theme};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub camera: Rc<RefCell<Camera>>,
    pub theme: Rc<Cell<Theme>>,
    pub rig: Rc<RefCell<OrbitRig>>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    pub instances: Vec<InstanceRaw>,

    pub started_ms: f64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now_ms = instant::now();
        let elapsed_sec = ((now_ms - self.started_ms) / 1000.0) as f32;

        self.scene.borrow_mut().advance(now_ms);

        let w = self.canvas.width();
        let h = self.canvas.height();
        let eye = {
            let mut cam = self.camera.borrow_mut();
            cam.eye = self.rig.borrow().eye(elapsed_sec);
            cam.set_viewport(w, h);
            cam.eye
        };

        self.instances.clear();
        let clear = {
            let scene = self.scene.borrow();
            scene.write_instances(&mut self.instances);
            clear_color_for(&scene, self.theme.get())
        };
        render::sort_back_to_front(&mut self.instances, eye);

        if let Some(g) = &mut self.gpu {
            g.set_clear_color(hex_rgb(clear));
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&self.camera.borrow(), &self.instances, elapsed_sec) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

fn clear_color_for(scene: &Scene, theme: Theme) -> u32 {
    match (scene, theme) {
        (Scene::Emblems(_), _) => CLEAR_EMBLEM,
        (Scene::Bubbles(_), Theme::Violet) => CLEAR_VIOLET,
        (Scene::Bubbles(_), Theme::Ember) => CLEAR_EMBER,
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
