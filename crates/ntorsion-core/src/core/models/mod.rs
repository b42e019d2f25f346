//! # Core Models Module
//!
//! Data structures describing a parsed coordinate file.
//!
//! - [`atom`] - A single immutable `ATOM` record
//! - [`residue`] - Residue keys
//! - [`torsion`] - Named torsion angles, per-residue rows and the ordered result table
//! - [`index`] - The read-only, insertion-ordered atom index answering point queries
//!
//! ```ignore
//! use ntorsion::core::models::{atom::AtomRecord, index::AtomIndex};
//!
//! let index = AtomIndex::new(atoms)?;
//! let phosphorus = index.lookup(12, 'A', "P");
//! ```

pub mod atom;
pub mod index;
pub mod residue;
pub mod torsion;
