//! Centralized configuration values shared across the lattice pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons that are independent of model
/// scale (plane side tests inside the hull solver, zero-length checks).
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1e-10;

/// Default modeling tolerance used when the host does not supply one.
///
/// Node deduplication, boundary-plane membership and vertex welding all
/// compare distances against this value.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_TOLERANCE, EPSILON};
/// assert!(DEFAULT_TOLERANCE > EPSILON);
/// ```
pub const DEFAULT_TOLERANCE: f64 = 1e-3;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of sides of each strut cross-section polygon.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SIDES;
/// assert_eq!(DEFAULT_SIDES, 6);
/// ```
pub const DEFAULT_SIDES: u32 = 6;

/// Smallest cross-section that still forms a polygon.
pub const MIN_SIDES: u32 = 3;

/// Safety limit on cross-section resolution.
pub const MAX_SIDES: u32 = 256;

/// Radius assigned to every strut when the host supplies no radius list.
///
/// Sized for unit cells, whose struts are about one unit long.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_STRUT_RADIUS;
/// assert!(DEFAULT_STRUT_RADIUS > 0.0);
/// ```
pub const DEFAULT_STRUT_RADIUS: f64 = 0.05;

// =============================================================================
// TOPOLOGY LIMITS
// =============================================================================

/// Upper bound on intersection-splitting passes.
///
/// Every productive pass splits at least one segment, so a well-formed input
/// converges long before this. Hitting the limit means the tolerance is too
/// coarse for the geometry.
pub const MAX_INTERSECTION_PASSES: usize = 1000;

// =============================================================================
// JUNCTION MESHING
// =============================================================================

/// Angle between two struts at a node below which the junction is treated
/// as sharp and re-checked for plate convexity.
///
/// # Examples
/// ```
/// use config::constants::SHARP_ANGLE_DEGREES;
/// let threshold = SHARP_ANGLE_DEGREES.to_radians();
/// assert!(threshold < std::f64::consts::FRAC_PI_2);
/// ```
pub const SHARP_ANGLE_DEGREES: f64 = 30.0;

/// Maximum number of offset-raising rounds spent restoring convexity at a
/// single junction before it is reported as failed.
pub const MAX_CONVEXITY_ITERATIONS: usize = 100;

/// Lower bound for a plate offset, as a fraction of the plate radius.
///
/// Keeps two plates of nearly collinear struts from collapsing onto the node.
pub const MIN_PLATE_OFFSET_RATIO: f64 = 0.5;

// =============================================================================
// RUNTIME CONFIGURATION
// =============================================================================

/// Immutable snapshot of the settings every pipeline stage reads.
///
/// The tolerance normally comes from the active host document and is passed
/// down explicitly; no stage reads a global.
///
/// # Examples
/// ```
/// use config::constants::LatticeConfig;
/// let config = LatticeConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeConfig {
    /// Distance under which two points are considered coincident.
    pub tolerance: f64,
    /// Number of sides of each sleeve cross-section.
    pub sides: u32,
}

impl LatticeConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and polygon resolution.
    ///
    /// # Examples
    /// ```
    /// use config::constants::LatticeConfig;
    /// let cfg = LatticeConfig::new(1.0e-4, 12).expect("valid config");
    /// assert_eq!(cfg.sides, 12);
    /// ```
    pub fn new(tolerance: f64, sides: u32) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !(MIN_SIDES..=MAX_SIDES).contains(&sides) {
            return Err(ConfigError::InvalidSides(sides));
        }
        Ok(Self { tolerance, sides })
    }

    /// Re-checks the fields, which are public and may have been edited after
    /// construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::new(self.tolerance, self.sides).map(|_| ())
    }

    /// Returns a copy with a different tolerance, validated like [`Self::new`].
    pub fn with_tolerance(self, tolerance: f64) -> Result<Self, ConfigError> {
        Self::new(tolerance, self.sides)
    }
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            sides: DEFAULT_SIDES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the requested side count is outside `MIN_SIDES..=MAX_SIDES`.
    InvalidSides(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidSides(value) => {
                write!(f, "sides must be in {MIN_SIDES}..={MAX_SIDES}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

#[cfg(test)]
mod tests;
