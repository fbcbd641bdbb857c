//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_default_tolerance_larger_than_epsilon() {
    assert!(
        DEFAULT_TOLERANCE > EPSILON,
        "DEFAULT_TOLERANCE should be coarser than EPSILON"
    );
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_default_sides_in_range() {
    assert!(DEFAULT_SIDES >= MIN_SIDES);
    assert!(DEFAULT_SIDES <= MAX_SIDES);
}

#[test]
fn test_min_sides_forms_polygon() {
    // A cross-section needs at least 3 points to enclose area
    assert!(MIN_SIDES >= 3);
}

#[test]
fn test_default_radius_positive() {
    assert!(DEFAULT_STRUT_RADIUS > 0.0);
}

// =============================================================================
// JUNCTION TESTS
// =============================================================================

#[test]
fn test_sharp_angle_is_acute() {
    assert!(SHARP_ANGLE_DEGREES > 0.0);
    assert!(SHARP_ANGLE_DEGREES < 90.0);
}

#[test]
fn test_iteration_limits_nonzero() {
    assert!(MAX_CONVEXITY_ITERATIONS > 0);
    assert!(MAX_INTERSECTION_PASSES > 0);
}

#[test]
fn test_min_plate_offset_ratio_positive() {
    assert!(MIN_PLATE_OFFSET_RATIO > 0.0);
}

// =============================================================================
// APPROX TESTS
// =============================================================================

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(EPSILON / 2.0));
    assert!(!approx_zero(-EPSILON * 2.0));
}
