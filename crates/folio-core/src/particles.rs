//! Bubble pool for the animated background.
//!
//! [`ParticleField`] owns a fixed-size pool of bubbles, moves them once per
//! rendered frame and runs the click-triggered burst/respawn cycle. Respawns
//! are deadlines in a [`RespawnSchedule`] polled at the start of every
//! [`ParticleField::advance`], so replacing the pool or dropping the field
//! discards them with it.

use crate::constants::*;
use crate::error::FieldError;
use crate::schedule::RespawnSchedule;
use crate::state::ray_sphere;
use crate::theme::{Palette, Rgb};
use glam::Vec3;
use rand::prelude::*;

const HOVER_COLOR: Rgb = [1.0, 1.0, 1.0];

#[derive(Clone, Debug)]
pub struct FieldParams {
    pub pool_size: usize,
    /// Edge length of the cube particles spawn in, centred on the origin.
    pub spawn_extent: f32,
    pub size_min: f32,
    pub size_max: f32,
    pub respawn_delay_ms: f64,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            pool_size: POOL_SIZE,
            spawn_extent: SPAWN_EXTENT,
            size_min: SIZE_MIN,
            size_max: SIZE_MAX,
            respawn_delay_ms: RESPAWN_DELAY_MS,
        }
    }
}

/// Burst progress. Scale and opacity are derived from the frame count, which
/// starts at zero on every activation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Burst {
    pub started_ms: f64,
    pub frames: u32,
}

impl Burst {
    #[inline]
    pub fn scale(&self) -> f32 {
        1.0 + BURST_SCALE_STEP * self.frames as f32
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        (1.0 - BURST_FADE_STEP * self.frames as f32).max(0.0)
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub id: u32,
    /// Spawn position; the rendered position adds `offset`.
    pub position: Vec3,
    pub color: Rgb,
    pub size: f32,
    pub offset: Vec3,
    pub rotation: Vec3,
    burst: Option<Burst>,
}

impl Particle {
    pub fn bursting(&self) -> bool {
        self.burst.is_some()
    }

    pub fn burst(&self) -> Option<Burst> {
        self.burst
    }

    pub fn scale(&self) -> f32 {
        self.burst.map_or(1.0, |b| b.scale())
    }

    pub fn opacity(&self) -> f32 {
        self.burst.map_or(1.0, |b| b.opacity())
    }

    pub fn visible(&self) -> bool {
        self.opacity() > 0.0
    }

    pub fn world_position(&self) -> Vec3 {
        self.position + self.offset
    }

    pub fn radius(&self) -> f32 {
        self.size * self.scale()
    }
}

/// Bounded cosmetic sway for bubble `id` at `now_ms`.
#[inline]
pub fn drift_offset(id: u32, now_ms: f64) -> Vec3 {
    let t = now_ms * DRIFT_OMEGA_PER_MS;
    let id = id as f64;
    let x = (t + id * DRIFT_PHASE_X).sin() as f32 * DRIFT_AMPLITUDE_X;
    let y = -(t + id * DRIFT_PHASE_Y).cos() as f32 * DRIFT_AMPLITUDE_Y;
    Vec3::new(x, y, 0.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    Burst,
    AlreadyBursting,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    palette: Palette,
    params: FieldParams,
    rng: StdRng,
    respawns: RespawnSchedule,
    hovered: Option<u32>,
    generation: u64,
}

impl ParticleField {
    pub fn new(palette: Palette, params: FieldParams, seed: u64) -> Self {
        Self::with_rng(palette, params, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(palette: Palette, params: FieldParams, rng: StdRng) -> Self {
        let mut field = Self {
            particles: Vec::with_capacity(params.pool_size),
            palette,
            params,
            rng,
            respawns: RespawnSchedule::new(),
            hovered: None,
            generation: 0,
        };
        field.regenerate();
        field
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn get(&self, id: u32) -> Option<&Particle> {
        self.particles.get(id as usize)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Bumped every time the pool is replaced.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pending_respawns(&self) -> usize {
        self.respawns.len()
    }

    pub fn respawn_due_at(&self, id: u32) -> Option<f64> {
        self.respawns.due_at(id)
    }

    /// Swap the palette; a different palette replaces the whole pool.
    pub fn set_palette(&mut self, palette: Palette) -> bool {
        if palette == self.palette {
            return false;
        }
        self.palette = palette;
        self.regenerate();
        true
    }

    /// Replace every particle and drop all pending respawns.
    pub fn regenerate(&mut self) {
        self.respawns.clear();
        self.hovered = None;
        self.particles.clear();
        for i in 0..self.params.pool_size {
            let p = Particle {
                id: i as u32,
                position: random_position(&mut self.rng, self.params.spawn_extent),
                color: random_color(&mut self.rng, &self.palette),
                size: self
                    .rng
                    .gen_range(self.params.size_min..=self.params.size_max),
                offset: Vec3::ZERO,
                rotation: Vec3::ZERO,
                burst: None,
            };
            self.particles.push(p);
        }
        self.generation += 1;
        log::debug!(
            "[field] generation {} with {} particles ({:?})",
            self.generation,
            self.particles.len(),
            self.palette.theme
        );
    }

    /// Start a burst on `id` and schedule its respawn.
    pub fn activate(&mut self, id: u32, now_ms: f64) -> Result<Activation, FieldError> {
        let p = self
            .particles
            .get_mut(id as usize)
            .ok_or(FieldError::UnknownParticle(id))?;
        if p.burst.is_some() {
            return Ok(Activation::AlreadyBursting);
        }
        p.burst = Some(Burst {
            started_ms: now_ms,
            frames: 0,
        });
        self.respawns
            .schedule(id, now_ms + self.params.respawn_delay_ms);
        log::debug!("[field] burst {} at {:.0}ms", id, now_ms);
        Ok(Activation::Burst)
    }

    /// Run every respawn whose deadline has passed.
    pub fn fire_due(&mut self, now_ms: f64) -> usize {
        let Self {
            particles,
            palette,
            params,
            rng,
            respawns,
            ..
        } = self;
        respawns.fire_due(now_ms, |id| {
            if let Some(p) = particles.get_mut(id as usize) {
                p.burst = None;
                p.position = random_position(rng, params.spawn_extent);
                p.color = random_color(rng, palette);
                p.offset = Vec3::ZERO;
                log::debug!("[field] respawn {}", id);
            }
        })
    }

    /// Per-frame update.
    pub fn advance(&mut self, now_ms: f64) {
        self.fire_due(now_ms);
        for p in &mut self.particles {
            match &mut p.burst {
                Some(b) => {
                    if b.opacity() > 0.0 {
                        b.frames = b.frames.saturating_add(1);
                    }
                }
                None => {
                    p.offset = drift_offset(p.id, now_ms);
                    p.rotation = wrap_angles(p.rotation + Vec3::from(SPIN_STEP));
                }
            }
        }
    }

    pub fn set_hovered(&mut self, id: Option<u32>) {
        self.hovered = id.filter(|&i| (i as usize) < self.particles.len());
    }

    pub fn hovered(&self) -> Option<u32> {
        self.hovered
    }

    pub fn display_color(&self, p: &Particle) -> Rgb {
        if self.hovered == Some(p.id) {
            HOVER_COLOR
        } else {
            p.color
        }
    }

    /// Closest visible particle hit by the ray, if any.
    pub fn pick(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<u32> {
        let mut best = None::<(u32, f32)>;
        for p in self.particles.iter().filter(|p| p.visible()) {
            if let Some(t) = ray_sphere(ray_origin, ray_dir, p.world_position(), p.radius()) {
                match best {
                    Some((_, bt)) if t >= bt => {}
                    _ => best = Some((p.id, t)),
                }
            }
        }
        best.map(|(id, _)| id)
    }
}

#[inline]
fn wrap_angles(v: Vec3) -> Vec3 {
    let tau = std::f32::consts::TAU;
    Vec3::new(v.x % tau, v.y % tau, v.z % tau)
}

fn random_position(rng: &mut StdRng, extent: f32) -> Vec3 {
    let h = extent * 0.5;
    Vec3::new(
        rng.gen_range(-h..=h),
        rng.gen_range(-h..=h),
        rng.gen_range(-h..=h),
    )
}

fn random_color(rng: &mut StdRng, palette: &Palette) -> Rgb {
    palette.colors[rng.gen_range(0..palette.colors.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn field() -> ParticleField {
        ParticleField::new(Theme::Violet.palette(), FieldParams::default(), 7)
    }

    #[test]
    fn drift_is_bounded() {
        for id in 0..40 {
            for step in 0..200 {
                let o = drift_offset(id, step as f64 * 97.0);
                assert!(o.x.abs() <= DRIFT_AMPLITUDE_X + 1e-6);
                assert!(o.y.abs() <= DRIFT_AMPLITUDE_Y + 1e-6);
                assert_eq!(o.z, 0.0);
            }
        }
    }

    #[test]
    fn burst_fade_reaches_zero_and_stays() {
        let b = Burst {
            started_ms: 0.0,
            frames: 17,
        };
        assert_eq!(b.opacity(), 0.0);
        assert!(b.scale() > 2.0);
    }

    #[test]
    fn non_bursting_particles_spin() {
        let mut f = field();
        f.advance(16.0);
        f.advance(32.0);
        let p = f.get(0).unwrap();
        assert!((p.rotation.x - 2.0 * SPIN_STEP[0]).abs() < 1e-6);
        assert!((p.rotation.z - 2.0 * SPIN_STEP[2]).abs() < 1e-6);
    }

    #[test]
    fn hover_recolors_only_the_hovered_particle() {
        let mut f = field();
        f.set_hovered(Some(2));
        let hovered = f.get(2).unwrap().clone();
        let other = f.get(3).unwrap().clone();
        assert_eq!(f.display_color(&hovered), HOVER_COLOR);
        assert_eq!(f.display_color(&other), other.color);
        f.set_hovered(Some(999));
        assert_eq!(f.hovered(), None);
    }
}
