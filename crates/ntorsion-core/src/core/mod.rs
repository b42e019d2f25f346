//! # Core Module
//!
//! Fundamental building blocks for torsion analysis of nucleic-acid structures.
//!
//! - **Structure Representation** ([`models`]) - Atom records, residue keys and the queryable atom index
//! - **File I/O** ([`io`]) - PDB reading, torsion reports and the rings plot
//! - **Geometry and Naming** ([`utils`]) - Dihedral primitives, hybrid-36 serials and nucleotide tables

pub mod io;
pub mod models;
pub mod utils;
