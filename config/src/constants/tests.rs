//! Tests for the runtime configuration builder.

use super::*;

/// Ensures default constants are sane and positive.
#[test]
fn default_config_is_valid() {
    let cfg = LatticeConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert!(cfg.sides >= MIN_SIDES);
    assert_eq!(LatticeConfig::new(cfg.tolerance, cfg.sides), Ok(cfg));
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        LatticeConfig::new(0.0, 6).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        LatticeConfig::new(1.0e-3, 2).unwrap_err(),
        ConfigError::InvalidSides(2)
    );
    assert_eq!(
        LatticeConfig::new(1.0e-3, MAX_SIDES + 1).unwrap_err(),
        ConfigError::InvalidSides(MAX_SIDES + 1)
    );
    assert!(LatticeConfig::new(f64::NAN, 6).is_err());
}

#[test]
fn with_tolerance_keeps_sides() {
    let cfg = LatticeConfig::new(1.0e-3, 10).unwrap();
    let cfg = cfg.with_tolerance(1.0e-6).unwrap();
    assert_eq!(cfg.sides, 10);
    assert_eq!(cfg.tolerance, 1.0e-6);
    assert!(cfg.with_tolerance(-1.0).is_err());
}

#[test]
fn error_messages_name_the_value() {
    let msg = ConfigError::InvalidSides(1).to_string();
    assert!(msg.contains("sides"), "unexpected message: {msg}");
    assert!(msg.ends_with('1'));
}

#[test]
fn validate_catches_edited_fields() {
    let mut cfg = LatticeConfig::default();
    assert!(cfg.validate().is_ok());
    cfg.sides = 0;
    assert_eq!(cfg.validate(), Err(ConfigError::InvalidSides(0)));
}
