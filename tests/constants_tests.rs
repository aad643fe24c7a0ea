// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn orbit_constants_are_positive() {
    assert!(ORBIT_RADIUS > 0.0);
    assert!(ITEM_HALF_EXTENT > 0.0);
    assert!(SPEED_BASE > 0.0);
    assert!(SPEED_STEP > 0.0);
    assert!(SPEED_CYCLE > 0);
    assert!(ATTRACTION_THRESHOLD > 0.0);
    assert!(ATTRACTION_STRENGTH > 0.0);
    // Smoothing must be strictly positive or the force blows up at the pointer
    assert!(ATTRACTION_SMOOTHING > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn orbit_constants_have_logical_relationships() {
    // Wobble never collapses the orbit through the center
    assert!(WOBBLE_AMPLITUDE < ORBIT_RADIUS);

    // Peak force is strength / smoothing; above 1 the item would overshoot the pointer
    assert!(ATTRACTION_STRENGTH / ATTRACTION_SMOOTHING <= 1.0);

    // The whole orbit fits in a viewport wide enough for orbital mode
    assert!(2.0 * (ORBIT_RADIUS + WOBBLE_AMPLITUDE + ITEM_HALF_EXTENT) < COMPACT_BREAKPOINT_PX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn entrance_spring_is_underdamped() {
    let zeta = ENTRANCE_DAMPING / (2.0 * ENTRANCE_STIFFNESS.sqrt());
    assert!(zeta > 0.0 && zeta < 1.0);
    assert!(ENTRANCE_STAGGER_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spectrum_constants_are_sane() {
    assert!(FFT_SIZE.is_power_of_two());
    assert!((32..=32768).contains(&FFT_SIZE));
    assert!(BAR_WIDTH_FACTOR > 0.0);
    assert!(BAR_HEIGHT_DIVISOR > 0.0);
    assert!(SPIN_LEVEL_DIVISOR > 0.0);
    // Max byte bin (255) fits in a canvas of a few hundred pixels
    assert!(255.0 / BAR_HEIGHT_DIVISOR < 200.0);
}

#[test]
fn element_ids_are_distinct_and_non_empty() {
    let ids = [
        NAV_ID,
        HERO_ID,
        HERO_CANVAS_ID,
        PLAYER_AUDIO_ID,
        PLAYER_TITLE_ID,
        PLAYER_TOGGLE_ID,
        PLAYER_PROGRESS_ID,
        PLAYER_COVER_ID,
        VISUALIZER_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.starts_with('#'), "ids are passed to getElementById: {}", a);
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(HERO_LOADED_DELAY_MS > 0);
}
