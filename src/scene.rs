use crate::config::Background;
use crate::constants::*;
use crate::render::InstanceRaw;
use folio_core::{hex_rgb, Activation, EmblemScene, FieldParams, ParticleField, Theme};
use glam::Vec3;

/// Whichever background the page asked for.
pub enum Scene {
    Bubbles(ParticleField),
    Emblems(EmblemScene),
}

impl Scene {
    pub fn new(background: Background, theme: Theme, now_ms: f64, seed: u64) -> Self {
        match background {
            Background::Bubbles => {
                Scene::Bubbles(ParticleField::new(theme.palette(), FieldParams::default(), seed))
            }
            Background::Emblems => Scene::Emblems(EmblemScene::new(now_ms, seed)),
        }
    }

    pub fn advance(&mut self, now_ms: f64) {
        match self {
            Scene::Bubbles(f) => f.advance(now_ms),
            Scene::Emblems(e) => e.advance(now_ms),
        }
    }

    /// Emblems ignore the theme; bubbles regenerate with the new palette.
    pub fn apply_theme(&mut self, theme: Theme) -> bool {
        match self {
            Scene::Bubbles(f) => f.set_palette(theme.palette()),
            Scene::Emblems(_) => false,
        }
    }

    /// Update hover from a pointer ray; returns the hovered bubble.
    pub fn hover(&mut self, ray_origin: Vec3, ray_dir: Vec3) -> Option<u32> {
        match self {
            Scene::Bubbles(f) => {
                let hit = f.pick(ray_origin, ray_dir);
                f.set_hovered(hit);
                hit
            }
            Scene::Emblems(_) => None,
        }
    }

    /// Burst the bubble under the ray, if any.
    pub fn activate(&mut self, ray_origin: Vec3, ray_dir: Vec3, now_ms: f64) -> Option<u32> {
        let Scene::Bubbles(f) = self else {
            return None;
        };
        let id = f.pick(ray_origin, ray_dir)?;
        match f.activate(id, now_ms) {
            Ok(Activation::Burst) => Some(id),
            Ok(Activation::AlreadyBursting) => None,
            Err(e) => {
                log::warn!("[field] {}", e);
                None
            }
        }
    }

    pub fn write_instances(&self, out: &mut Vec<InstanceRaw>) {
        match self {
            Scene::Bubbles(f) => {
                for p in f.particles().iter().filter(|p| p.visible()) {
                    let c = f.display_color(p);
                    out.push(InstanceRaw::new(
                        p.world_position(),
                        p.radius(),
                        [c[0], c[1], c[2], p.opacity()],
                        [KIND_BUBBLE, p.rotation.y, p.rotation.x, 0.0],
                    ));
                }
            }
            Scene::Emblems(e) => {
                let [r, g, b] = hex_rgb(CLOUD_COLOR);
                for c in e.clouds() {
                    out.push(InstanceRaw::new(
                        c.position,
                        c.radius,
                        [r, g, b, CLOUD_OPACITY],
                        [KIND_CLOUD, 0.0, 0.0, 0.0],
                    ));
                }
                let (glow, pattern) = if e.is_awake() {
                    (EMBLEM_GLOW_AWAKE, EMBLEM_PATTERN_AWAKE)
                } else {
                    (EMBLEM_GLOW_DORMANT, EMBLEM_PATTERN_DORMANT)
                };
                let [r, g, b] = hex_rgb(EMBLEM_COLOR);
                for em in e.emblems() {
                    out.push(InstanceRaw::new(
                        em.world_position(),
                        EMBLEM_HALF_SIZE * em.scale,
                        [r, g, b, 1.0],
                        [KIND_EMBLEM, em.spin, pattern, glow],
                    ));
                }
                for crow in e.crows() {
                    out.push(InstanceRaw::new(
                        crow.position,
                        CROW_HALF_WIDTH,
                        CROW_COLOR,
                        [KIND_CROW, crow.flap, CROW_ASPECT, 0.0],
                    ));
                }
            }
        }
        out.truncate(MAX_INSTANCES);
    }
}
