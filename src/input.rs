use folio_core::Camera;
use glam::{Vec2, Vec3};
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// World-space pick ray under the pointer for the current camera.
#[inline]
pub fn pointer_ray(
    ev: &web::MouseEvent,
    canvas: &web::HtmlCanvasElement,
    camera: &Camera,
) -> (Vec3, Vec3) {
    let px = pointer_canvas_px(ev, canvas);
    camera.screen_ray(
        px.x,
        px.y,
        canvas.width() as f32,
        canvas.height() as f32,
    )
}
