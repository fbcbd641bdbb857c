//! # Geometry Tests

use super::*;
use approx::assert_relative_eq;

const TOL: f64 = 1e-6;

fn seg(a: [f64; 3], b: [f64; 3]) -> Segment {
    Segment::new(DVec3::from_array(a), DVec3::from_array(b))
}

// =============================================================================
// LINE-LINE INTERSECTION
// =============================================================================

#[test]
fn test_crossing_diagonals_meet_at_center() {
    let a = seg([0.0, 0.0, 0.0], [1.0, 1.0, 0.0]);
    let b = seg([0.0, 1.0, 0.0], [1.0, 0.0, 0.0]);
    let (ta, tb) = line_line_intersect(&a, &b, TOL).unwrap();
    assert_relative_eq!(ta, 0.5, epsilon = 1e-12);
    assert_relative_eq!(tb, 0.5, epsilon = 1e-12);
}

#[test]
fn test_parallel_segments_do_not_intersect() {
    let a = seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
    let b = seg([0.0, 1.0, 0.0], [1.0, 1.0, 0.0]);
    assert!(line_line_intersect(&a, &b, TOL).is_none());
}

#[test]
fn test_skew_segments_do_not_intersect() {
    let a = seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
    let b = seg([0.5, -1.0, 1.0], [0.5, 1.0, 1.0]);
    assert!(line_line_intersect(&a, &b, TOL).is_none());
}

#[test]
fn test_carrier_hit_outside_segment_is_rejected() {
    let a = seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
    let b = seg([2.0, -1.0, 0.0], [2.0, 1.0, 0.0]);
    assert!(line_line_intersect(&a, &b, TOL).is_none());
}

#[test]
fn test_shared_endpoint_reports_end_parameters() {
    let a = seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
    let b = seg([1.0, 0.0, 0.0], [1.0, 1.0, 0.0]);
    let (ta, tb) = line_line_intersect(&a, &b, TOL).unwrap();
    assert_relative_eq!(ta, 1.0, epsilon = 1e-12);
    assert_relative_eq!(tb, 0.0, epsilon = 1e-12);
}

// =============================================================================
// SEGMENTS AND CURVES
// =============================================================================

#[test]
fn test_interior_parameter_excludes_endpoints() {
    let s = seg([0.0, 0.0, 0.0], [10.0, 0.0, 0.0]);
    assert!(s.is_interior_parameter(0.5, 0.1));
    assert!(!s.is_interior_parameter(0.005, 0.1));
    assert!(!s.is_interior_parameter(0.995, 0.1));
    assert!(!s.is_interior_parameter(1.5, 0.1));
}

#[test]
fn test_split_shares_midpoint() {
    let s = seg([0.0, 0.0, 0.0], [4.0, 0.0, 0.0]);
    let (left, right) = s.split_at(0.25);
    assert_eq!(left.end, DVec3::new(1.0, 0.0, 0.0));
    assert_eq!(left.end, right.start);
    assert_eq!(right.end, s.end);
}

#[test]
fn test_collinear_polyline_becomes_chord() {
    let curve = InputCurve::Polyline(vec![
        DVec3::ZERO,
        DVec3::new(1.0, 1.0, 1.0),
        DVec3::new(2.0, 2.0, 2.0),
    ]);
    let s = curve.to_segment(0, TOL).unwrap();
    assert_eq!(s.start, DVec3::ZERO);
    assert_eq!(s.end, DVec3::splat(2.0));
}

#[test]
fn test_bent_polyline_is_rejected() {
    let curve = InputCurve::Polyline(vec![
        DVec3::ZERO,
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(2.0, 0.0, 0.0),
    ]);
    assert_eq!(
        curve.to_segment(3, TOL),
        Err(CellError::NonLinearCurve { index: 3 })
    );
}

#[test]
fn test_zero_length_line_is_rejected() {
    let curve = InputCurve::Line(seg([1.0, 1.0, 1.0], [1.0, 1.0, 1.0]));
    assert_eq!(
        curve.to_segment(0, TOL),
        Err(CellError::DegenerateCurve { index: 0 })
    );
}

#[test]
fn test_empty_curve_list_is_rejected() {
    assert_eq!(curves_to_segments(&[], TOL), Err(CellError::EmptyInput));
}

// =============================================================================
// POINT QUERIES
// =============================================================================

#[test]
fn test_closest_point_on_empty_list() {
    assert!(closest_point(&[], DVec3::ZERO).is_none());
    assert!(find_point(&[], DVec3::ZERO, 1.0).is_none());
}

#[test]
fn test_find_point_respects_tolerance() {
    let points = [DVec3::ZERO, DVec3::X, DVec3::Y];
    assert_eq!(find_point(&points, DVec3::new(1.0, 1e-7, 0.0), TOL), Some(1));
    assert_eq!(find_point(&points, DVec3::new(0.5, 0.5, 0.0), TOL), None);
}

#[test]
fn test_bounding_box() {
    let points = [DVec3::new(-1.0, 2.0, 0.0), DVec3::new(3.0, -2.0, 5.0)];
    let (min, max) = bounding_box(&points).unwrap();
    assert_eq!(min, DVec3::new(-1.0, -2.0, 0.0));
    assert_eq!(max, DVec3::new(3.0, 2.0, 5.0));
    assert!(bounding_box(&[]).is_none());
}

#[test]
fn test_axis_component_roundtrip() {
    let v = DVec3::new(1.0, 2.0, 3.0);
    assert_eq!(Axis::Y.component(v), 2.0);
    assert_eq!(Axis::Z.with_component(v, 0.0), DVec3::new(1.0, 2.0, 0.0));
    assert_eq!(Axis::X.to_string(), "x");
}
