//! # Config Crate
//!
//! Centralized configuration for the lattice pipeline. Tolerances, polygon
//! resolution and the thresholds used by the junction mesher are defined
//! here so the cell and mesh crates never carry their own literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{LatticeConfig, DEFAULT_SIDES};
//!
//! let cfg = LatticeConfig::default();
//! assert_eq!(cfg.sides, DEFAULT_SIDES);
//!
//! // The host document usually supplies its own modeling tolerance.
//! let cfg = LatticeConfig::new(1.0e-3, 8).unwrap();
//! assert_eq!(cfg.tolerance, 1.0e-3);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Explicit Tolerance**: The active tolerance travels inside
//!   [`constants::LatticeConfig`]; nothing reads process-wide state
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
