//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_degenerate_area_epsilon_larger_than_epsilon() {
    assert!(
        DEGENERATE_AREA_EPSILON >= EPSILON,
        "DEGENERATE_AREA_EPSILON should be >= EPSILON"
    );
}

// =============================================================================
// THRESHOLD TESTS
// =============================================================================

#[test]
fn test_height_change_threshold() {
    // Wall correction fires at 5 cm of ground drift
    assert_eq!(HEIGHT_CHANGE_THRESHOLD, 0.05);
}

#[test]
fn test_uv_dominant_axis_threshold_is_half() {
    // A normal component above 1/2 always dominates a unit normal
    assert_eq!(UV_DOMINANT_AXIS_THRESHOLD, 0.5);
}

// =============================================================================
// VISUAL DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_world_opacity_in_range() {
    assert!(DEFAULT_WORLD_OPACITY > 0.0 && DEFAULT_WORLD_OPACITY <= 1.0);
}

#[test]
fn test_default_world_color_is_valid_rgba() {
    for channel in DEFAULT_WORLD_COLOR {
        assert!((0.0..=1.0).contains(&channel));
    }
}

#[test]
fn test_platform_vertex_color_is_translucent_white() {
    assert_eq!(PLATFORM_VERTEX_COLOR[0], 1.0);
    assert_eq!(PLATFORM_VERTEX_COLOR[1], 1.0);
    assert_eq!(PLATFORM_VERTEX_COLOR[2], 1.0);
    assert!(PLATFORM_VERTEX_COLOR[3] < 1.0);
}
