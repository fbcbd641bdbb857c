//! # Lattice Cell
//!
//! Unit cell topology for strut lattices. Raw line geometry goes in; a
//! deduplicated, normalized and periodicity-checked node/strut graph comes
//! out, with every boundary node linked to the node it stands in for when
//! the cell is tiled.
//!
//! ## Architecture
//!
//! ```text
//! InputCurve → Segment → resolve → extract → normalize → validate → format → UnitCell
//! ```
//!
//! The same extraction stage feeds the solid mesher in `lattice-mesh`.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::LatticeConfig;
//! use lattice_cell::{define_unit_cell, CellInput, CellPreset};
//!
//! let input: CellInput = CellPreset::Grid.lines().into_iter().collect();
//! let definition = define_unit_cell(&input, &LatticeConfig::default()).unwrap();
//! assert_eq!(definition.cell.strut_count(), 3);
//! ```

pub mod cell;
pub mod error;
pub mod geometry;
pub mod ops;
pub mod pipeline;
pub mod presets;

pub use cell::{NodePath, Strut, UnitCell};
pub use error::CellError;
pub use geometry::{Axis, InputCurve, Segment};
pub use pipeline::{define_unit_cell, CellDefinition, CellInput, Diagnostic, Severity};
pub use presets::CellPreset;
