// Shared tuning constants for the scroll tracker and the background scenes.

// Navigation
pub const HEADER_OFFSET_PX: f64 = 100.0; // fixed header height added to the scroll probe

// Bubble pool
pub const POOL_SIZE: usize = 40;
pub const SPAWN_EXTENT: f32 = 25.0; // positions are uniform in [-EXTENT/2, EXTENT/2]
pub const SIZE_MIN: f32 = 0.3;
pub const SIZE_MAX: f32 = 0.8;
pub const RESPAWN_DELAY_MS: f64 = 5000.0;

// Bubble drift: closed form of a per-frame sine nudge integrated at ~60 fps
pub const DRIFT_OMEGA_PER_MS: f64 = 0.001;
pub const DRIFT_AMPLITUDE_Y: f32 = 0.18;
pub const DRIFT_AMPLITUDE_X: f32 = 0.06;
pub const DRIFT_PHASE_Y: f64 = 0.5; // per-id phase step
pub const DRIFT_PHASE_X: f64 = 0.3;

// Per-frame rotation step (radians) on x, y, z
pub const SPIN_STEP: [f32; 3] = [0.005, 0.005, 0.002];

// Burst animation, per frame
pub const BURST_SCALE_STEP: f32 = 0.08;
pub const BURST_FADE_STEP: f32 = 0.06;

// Emblem scene
pub const EMBLEM_ANCHORS: [[f32; 3]; 3] = [[0.0, 0.0, -2.0], [-8.0, 5.0, -5.0], [8.0, -5.0, -5.0]];
pub const EMBLEM_SPIN_STEP: f32 = 0.005;
pub const EMBLEM_AWAKE_EXTRA_SPIN: f32 = 0.02;
pub const EMBLEM_PULSE_RATE: f32 = 5.0; // rad/s
pub const EMBLEM_PULSE_DEPTH: f32 = 0.1;
pub const EMBLEM_FLOAT_STEP: f32 = 0.0005;
pub const AWAKEN_FIRST_MS: f64 = 5000.0;
pub const AWAKEN_PERIOD_MS: f64 = 30000.0;
pub const AWAKEN_DURATION_MS: f64 = 5000.0;

// Crow flock
pub const CROW_COUNT: usize = 20;
pub const CROW_SPEED_MIN: f32 = 0.01;
pub const CROW_SPEED_MAX: f32 = 0.03;
pub const CROW_WRAP_X: f32 = 15.0;
pub const CROW_RESPAWN_SPAN_Y: f32 = 15.0;
pub const CROW_FLAP_RATE_PER_MS: f64 = 0.01;
pub const CROW_FLAP_ANGLE: f32 = 0.2;

// Camera rig
pub const CAMERA_DISTANCE: f32 = 15.0;
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const ORBIT_PERIOD_SEC: f32 = 120.0;
// Drag-to-orbit: one full turn per viewport height of travel
pub const ORBIT_DRAG_RAD_PER_VIEWPORT: f32 = std::f32::consts::TAU;
pub const ORBIT_PITCH_LIMIT_BUBBLES: f32 = 0.6; // rad either side of the horizon
pub const ORBIT_PITCH_LIMIT_EMBLEMS: f32 = 0.3;
// Pointer travel (px) below which a press still counts as a click
pub const DRAG_CLICK_SLOP_PX: f32 = 4.0;

// Backdrop clouds
pub const CLOUD_COUNT: usize = 10;
pub const CLOUD_SPAN: [f32; 2] = [20.0, 15.0];
pub const CLOUD_DEPTH: f32 = -10.0;
pub const CLOUD_RADIUS_MIN: f32 = 1.0;
pub const CLOUD_RADIUS_MAX: f32 = 3.0;
