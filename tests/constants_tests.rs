// Host-side tests for the frontend constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;

use constants::*;
use folio_core::constants::{CLOUD_COUNT, CROW_COUNT, POOL_SIZE};

#[test]
#[allow(clippy::assertions_on_constants)]
fn instance_capacity_covers_every_scene() {
    assert!(POOL_SIZE <= MAX_INSTANCES);
    assert!(3 + CROW_COUNT + CLOUD_COUNT <= MAX_INSTANCES);
}

#[test]
fn instance_kinds_are_distinct_whole_numbers() {
    let kinds = [KIND_BUBBLE, KIND_EMBLEM, KIND_CROW, KIND_CLOUD];
    for (i, k) in kinds.iter().enumerate() {
        assert_eq!(k.fract(), 0.0);
        assert_eq!(*k, i as f32);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn emblem_glow_brightens_when_awake() {
    assert!(EMBLEM_GLOW_AWAKE > EMBLEM_GLOW_DORMANT);
    assert!(EMBLEM_GLOW_DORMANT > 0.0);
    assert!(CLOUD_OPACITY > 0.0 && CLOUD_OPACITY <= 1.0);
    assert!(CROW_ASPECT > 0.0 && CROW_ASPECT < 1.0);
}

#[test]
fn page_ids_are_plain_identifiers() {
    for id in [CANVAS_ID, THEME_TOGGLE_ID, MUSIC_TOGGLE_ID, MUSIC_ELEMENT_ID] {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#'));
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
    }
}

#[test]
fn theme_clear_colors_differ() {
    assert_ne!(CLEAR_VIOLET, CLEAR_EMBER);
    assert!(CLEAR_VIOLET <= 0xFF_FFFF && CLEAR_EMBER <= 0xFF_FFFF);
}

#[test]
fn awake_emblems_use_their_own_pattern() {
    assert_ne!(EMBLEM_PATTERN_AWAKE, EMBLEM_PATTERN_DORMANT);
    // The shader splits the two at 0.5
    assert!(EMBLEM_PATTERN_DORMANT < 0.5 && EMBLEM_PATTERN_AWAKE > 0.5);
}
