//! # Cell Pipeline Tests

use super::*;
use crate::geometry::{Axis, Segment};
use crate::presets::CellPreset;
use approx::assert_relative_eq;
use glam::DVec3;

fn define(lines: Vec<Segment>) -> Result<CellDefinition, CellError> {
    let input: CellInput = lines.into_iter().collect();
    define_unit_cell(&input, &LatticeConfig::default())
}

#[test]
fn test_grid_cell_is_valid() {
    let definition = define(CellPreset::Grid.lines()).unwrap();

    assert_eq!(definition.cell.node_count(), 8);
    assert_eq!(definition.cell.strut_count(), 3);
    assert!(definition.cell.is_formatted());
    assert_eq!(definition.diagnostics, vec![Diagnostic::info("cell is valid")]);
}

#[test]
fn test_every_preset_defines_a_cell() {
    for preset in CellPreset::ALL {
        let definition = define(preset.lines())
            .unwrap_or_else(|e| panic!("{preset:?} failed: {e}"));
        assert!(definition.cell.strut_count() > 0, "{preset:?} has no struts");
    }
}

#[test]
fn test_crossing_diagonals_meet_at_center() {
    let definition = define(CellPreset::BodyCentered.lines()).unwrap();
    let cell = &definition.cell;

    let center = cell
        .nodes()
        .iter()
        .position(|n| n.distance(DVec3::splat(0.5)) < 1e-9)
        .expect("center node");
    assert_eq!(cell.strut_count(), 8);
    assert!(cell.struts().iter().all(|s| s.other(center).is_some()));
}

#[test]
fn test_cell_is_rescaled_into_unit_cube() {
    let stretch = |p: DVec3| p * DVec3::new(4.0, 2.0, 1.0) + 3.0;
    let lines: Vec<Segment> = CellPreset::Star
        .lines()
        .into_iter()
        .map(|s| Segment::new(stretch(s.start), stretch(s.end)))
        .collect();
    let definition = define(lines).unwrap();

    for axis in Axis::ALL {
        let values: Vec<f64> = definition
            .cell
            .nodes()
            .iter()
            .map(|n| axis.component(*n))
            .collect();
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert_relative_eq!(min, 0.0);
        assert_relative_eq!(max, 1.0);
    }
}

#[test]
fn test_missing_corner_is_rejected() {
    let lines: Vec<Segment> = CellPreset::Grid
        .lines()
        .into_iter()
        .filter(|s| s.start != DVec3::ONE && s.end != DVec3::ONE)
        .collect();
    assert_eq!(lines.len(), 9);

    let err = define(lines).unwrap_err();
    assert_eq!(err, CellError::AsymmetricFaces { axis: Axis::X });
    assert!(err.is_periodicity_error());
    assert_eq!(Diagnostic::from(&err).severity, Severity::Error);
}

#[test]
fn test_flat_input_has_degenerate_box() {
    let lines = vec![
        Segment::new(DVec3::ZERO, DVec3::new(1.0, 1.0, 0.0)),
        Segment::new(DVec3::Y, DVec3::X),
    ];
    assert_eq!(
        define(lines).unwrap_err(),
        CellError::DegenerateBoundingBox { axis: Axis::Z }
    );
}

#[test]
fn test_bent_polyline_is_rejected_before_topology() {
    let input = CellInput::new(vec![
        InputCurve::Line(Segment::new(DVec3::ZERO, DVec3::ONE)),
        InputCurve::Polyline(vec![DVec3::ZERO, DVec3::new(0.5, 0.5, 0.0), DVec3::X]),
    ]);
    assert_eq!(
        define_unit_cell(&input, &LatticeConfig::default()).unwrap_err(),
        CellError::NonLinearCurve { index: 1 }
    );
}

#[test]
fn test_empty_input_and_bad_config() {
    let config = LatticeConfig::default();
    assert_eq!(
        define_unit_cell(&CellInput::default(), &config).unwrap_err(),
        CellError::EmptyInput
    );

    let mut bad = config;
    bad.tolerance = -1.0;
    let input: CellInput = CellPreset::Grid.lines().into_iter().collect();
    assert!(matches!(
        define_unit_cell(&input, &bad),
        Err(CellError::Config(_))
    ));
}
