//! Emblem background: three spinning emblems that periodically "awaken"
//! (spin faster and pulse) plus a flock of crows drifting right to left.

use crate::constants::*;
use glam::Vec3;
use rand::prelude::*;

/// Time windows, measured from scene mount, during which emblems are awake:
/// one early window at `first_ms`, then one at every multiple of `period_ms`.
#[derive(Clone, Copy, Debug)]
pub struct AwakeningCycle {
    pub first_ms: f64,
    pub period_ms: f64,
    pub duration_ms: f64,
}

impl Default for AwakeningCycle {
    fn default() -> Self {
        Self {
            first_ms: AWAKEN_FIRST_MS,
            period_ms: AWAKEN_PERIOD_MS,
            duration_ms: AWAKEN_DURATION_MS,
        }
    }
}

impl AwakeningCycle {
    pub fn is_awake(&self, elapsed_ms: f64) -> bool {
        if elapsed_ms < 0.0 {
            return false;
        }
        if elapsed_ms >= self.first_ms && elapsed_ms < self.first_ms + self.duration_ms {
            return true;
        }
        self.period_ms > 0.0
            && elapsed_ms >= self.period_ms
            && elapsed_ms % self.period_ms < self.duration_ms
    }
}

#[derive(Clone, Debug)]
pub struct Emblem {
    pub anchor: Vec3,
    pub spin: f32,
    pub scale: f32,
    pub float_y: f32,
}

impl Emblem {
    fn new(anchor: Vec3) -> Self {
        Self {
            anchor,
            spin: 0.0,
            scale: 1.0,
            float_y: 0.0,
        }
    }

    pub fn world_position(&self) -> Vec3 {
        self.anchor + Vec3::new(0.0, self.float_y, 0.0)
    }

    fn step(&mut self, awake: bool, elapsed_sec: f32) {
        self.spin -= EMBLEM_SPIN_STEP;
        if awake {
            self.spin -= EMBLEM_AWAKE_EXTRA_SPIN;
            self.scale = (elapsed_sec * EMBLEM_PULSE_RATE).sin() * EMBLEM_PULSE_DEPTH + 1.0;
        } else {
            self.scale = 1.0;
            self.float_y += elapsed_sec.sin() * EMBLEM_FLOAT_STEP;
        }
        self.spin %= std::f32::consts::TAU;
    }
}

#[derive(Clone, Debug)]
pub struct Crow {
    pub position: Vec3,
    pub speed: f32,
    pub flap: f32,
}

/// Static backdrop sphere.
#[derive(Clone, Debug)]
pub struct Cloud {
    pub position: Vec3,
    pub radius: f32,
}

pub struct EmblemScene {
    emblems: Vec<Emblem>,
    crows: Vec<Crow>,
    clouds: Vec<Cloud>,
    cycle: AwakeningCycle,
    mounted_ms: f64,
    awake: bool,
    rng: StdRng,
}

impl EmblemScene {
    pub fn new(mounted_ms: f64, seed: u64) -> Self {
        Self::with_rng(mounted_ms, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(mounted_ms: f64, mut rng: StdRng) -> Self {
        let emblems = EMBLEM_ANCHORS
            .iter()
            .map(|a| Emblem::new(Vec3::from(*a)))
            .collect();
        let crows = (0..CROW_COUNT)
            .map(|_| Crow {
                position: Vec3::new(
                    rng.gen_range(-CROW_WRAP_X..CROW_WRAP_X),
                    rng.gen_range(-10.0..10.0),
                    rng.gen_range(-10.0..0.0),
                ),
                speed: rng.gen_range(CROW_SPEED_MIN..CROW_SPEED_MAX),
                flap: 0.0,
            })
            .collect();
        let [span_x, span_y] = CLOUD_SPAN;
        let clouds = (0..CLOUD_COUNT)
            .map(|_| Cloud {
                position: Vec3::new(
                    rng.gen_range(-span_x * 0.5..span_x * 0.5),
                    rng.gen_range(-span_y * 0.5..span_y * 0.5),
                    CLOUD_DEPTH,
                ),
                radius: rng.gen_range(CLOUD_RADIUS_MIN..CLOUD_RADIUS_MAX),
            })
            .collect();
        Self {
            emblems,
            crows,
            clouds,
            cycle: AwakeningCycle::default(),
            mounted_ms,
            awake: false,
            rng,
        }
    }

    pub fn with_cycle(mut self, cycle: AwakeningCycle) -> Self {
        self.cycle = cycle;
        self
    }

    pub fn emblems(&self) -> &[Emblem] {
        &self.emblems
    }

    pub fn crows(&self) -> &[Crow] {
        &self.crows
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    pub fn is_awake(&self) -> bool {
        self.awake
    }

    /// Per-frame update.
    pub fn advance(&mut self, now_ms: f64) {
        let elapsed_ms = now_ms - self.mounted_ms;
        let awake = self.cycle.is_awake(elapsed_ms);
        if awake != self.awake {
            log::debug!("[emblem] awake={} at {:.0}ms", awake, elapsed_ms);
            self.awake = awake;
        }
        let elapsed_sec = (elapsed_ms / 1000.0) as f32;
        for e in &mut self.emblems {
            e.step(awake, elapsed_sec);
        }
        for (i, c) in self.crows.iter_mut().enumerate() {
            c.position.x -= c.speed;
            if c.position.x < -CROW_WRAP_X {
                c.position.x = CROW_WRAP_X;
                let half = CROW_RESPAWN_SPAN_Y * 0.5;
                c.position.y = self.rng.gen_range(-half..half);
            }
            c.flap = (now_ms * CROW_FLAP_RATE_PER_MS + i as f64).sin() as f32 * CROW_FLAP_ANGLE;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emblem_spins_faster_when_awake() {
        let mut calm = Emblem::new(Vec3::ZERO);
        let mut awake = Emblem::new(Vec3::ZERO);
        calm.step(false, 1.0);
        awake.step(true, 1.0);
        assert!(awake.spin < calm.spin);
        assert_eq!(calm.scale, 1.0);
    }

    #[test]
    fn dormant_emblem_floats() {
        let mut e = Emblem::new(Vec3::new(1.0, 2.0, 3.0));
        e.step(false, 1.0);
        assert!(e.float_y > 0.0);
        assert_eq!(e.world_position().x, 1.0);
    }
}
