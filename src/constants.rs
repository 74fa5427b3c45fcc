// Page wiring and renderer tuning constants used by the web frontend.

// Element ids and classes the page is expected to provide
pub const CANVAS_ID: &str = "bg-canvas";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const MUSIC_TOGGLE_ID: &str = "music-toggle";
pub const MUSIC_ELEMENT_ID: &str = "bg-music";
pub const NAV_ACTIVE_CLASS: &str = "active";
pub const MUSIC_ON_CLASS: &str = "on";
pub const THEME_CLASS_PREFIX: &str = "theme-";

// Clear colors (the page gradient's base color per theme)
pub const CLEAR_VIOLET: u32 = 0x1A1F2C;
pub const CLEAR_EMBER: u32 = 0x2D1B1B;
pub const CLEAR_EMBLEM: u32 = 0x000000;

// Instance kinds understood by the scene shader
pub const KIND_BUBBLE: f32 = 0.0;
pub const KIND_EMBLEM: f32 = 1.0;
pub const KIND_CROW: f32 = 2.0;
pub const KIND_CLOUD: f32 = 3.0;

// Instance buffer capacity; the largest scene is emblems + crows + clouds
pub const MAX_INSTANCES: usize = 64;

// Emblem scene look
pub const EMBLEM_HALF_SIZE: f32 = 1.0; // 2x2 plane
pub const EMBLEM_COLOR: u32 = 0xB00000;
pub const EMBLEM_GLOW_DORMANT: f32 = 0.5;
pub const EMBLEM_GLOW_AWAKE: f32 = 2.0;
// params.z of an emblem instance: three commas asleep, twisted blades awake
pub const EMBLEM_PATTERN_DORMANT: f32 = 0.0;
pub const EMBLEM_PATTERN_AWAKE: f32 = 1.0;
pub const CROW_HALF_WIDTH: f32 = 0.15; // 0.3 x 0.05 box seen edge-on
pub const CROW_ASPECT: f32 = 0.05 / 0.3;
pub const CROW_COLOR: [f32; 4] = [0.02, 0.02, 0.02, 1.0];
pub const CLOUD_COLOR: u32 = 0x8A0303;
pub const CLOUD_OPACITY: f32 = 0.6;

// Lighting: key light from the upper right front
pub const LIGHT_DIR: [f32; 3] = [0.5, 0.6, 0.62];
