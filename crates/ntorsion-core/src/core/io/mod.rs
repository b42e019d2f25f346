//! Provides input/output functionality for coordinate files and torsion reports.
//!
//! Coordinate files are read through the [`traits::StructureFile`] interface; the
//! [`pdb`] module implements it for fixed-column Protein Data Bank records. The
//! [`report`] module writes (and reads back) the per-residue torsion table, and
//! [`rings`] draws a table as a concentric-ring SVG plot.

pub mod pdb;
pub mod report;
pub mod rings;
pub mod traits;
