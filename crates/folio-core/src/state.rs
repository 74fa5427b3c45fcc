//! Camera and picking shared with the web frontend.
//!
//! Nothing here touches platform APIs; the web crate feeds canvas sizes and
//! pointer coordinates in and gets matrices and rays out.

use crate::constants::*;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// World-space ray through pixel (`sx`, `sy`) of a `width` x `height`
    /// viewport. Returns `(origin, direction)`.
    pub fn screen_ray(&self, sx: f32, sy: f32, width: f32, height: f32) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        (self.eye, (p1 - self.eye).normalize())
    }
}

/// Pointer drag in progress on the canvas, in canvas pixels.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    pub last: Vec2,
    /// Total pointer travel since the press.
    pub travel_px: f32,
}

/// Slow turntable orbit around the target at a fixed distance, plus the
/// yaw/pitch the visitor adds by dragging.
#[derive(Clone, Copy, Debug)]
pub struct OrbitRig {
    pub distance: f32,
    pub period_sec: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub pitch_limit: f32,
    pub drag: DragState,
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self {
            distance: CAMERA_DISTANCE,
            period_sec: ORBIT_PERIOD_SEC,
            yaw: 0.0,
            pitch: 0.0,
            pitch_limit: ORBIT_PITCH_LIMIT_BUBBLES,
            drag: DragState::default(),
        }
    }
}

impl OrbitRig {
    pub fn with_pitch_limit(pitch_limit: f32) -> Self {
        Self {
            pitch_limit: pitch_limit.abs(),
            ..Self::default()
        }
    }

    pub fn eye(&self, elapsed_sec: f32) -> Vec3 {
        let turn = std::f32::consts::TAU * elapsed_sec / self.period_sec.max(f32::EPSILON);
        let angle = turn + self.yaw;
        let flat = self.distance * self.pitch.cos();
        Vec3::new(
            flat * angle.sin(),
            self.distance * self.pitch.sin(),
            flat * angle.cos(),
        )
    }

    pub fn begin_drag(&mut self, px: Vec2) {
        self.drag = DragState {
            active: true,
            last: px,
            travel_px: 0.0,
        };
    }

    /// Turn the view by the pointer travel since the last call. Returns
    /// false when no drag is active.
    pub fn drag_to(&mut self, px: Vec2, viewport_h: f32) -> bool {
        if !self.drag.active {
            return false;
        }
        let delta = px - self.drag.last;
        self.drag.last = px;
        self.drag.travel_px += delta.length();
        let per_px = ORBIT_DRAG_RAD_PER_VIEWPORT / viewport_h.max(1.0);
        self.yaw = (self.yaw - delta.x * per_px) % std::f32::consts::TAU;
        self.pitch = (self.pitch + delta.y * per_px).clamp(-self.pitch_limit, self.pitch_limit);
        true
    }

    /// Release the pointer. Returns true when the press moved far enough to
    /// count as a drag rather than a click.
    pub fn end_drag(&mut self) -> bool {
        let was_drag = self.was_dragged();
        self.drag.active = false;
        was_drag
    }

    /// Whether the latest press travelled past the click slop.
    pub fn was_dragged(&self) -> bool {
        self.drag.travel_px > DRAG_CLICK_SLOP_PX
    }
}

/// Distance along a normalized ray to the first intersection with a sphere.
/// Origins inside the sphere report no hit.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}
