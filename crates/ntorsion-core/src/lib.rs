//! # ntorsion Core Library
//!
//! Computes the backbone (alpha through zeta) and glycosidic (chi) torsion angles of
//! nucleic-acid residues from Protein Data Bank coordinate files.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Immutable data models (`AtomRecord`, `AtomIndex`),
//!   dihedral geometry, and I/O for PDB input and torsion reports.
//!
//! - **[`engine`]: The Logic Core.** Torsion definitions, contiguous residue grouping,
//!   and the per-residue evaluation task, optionally run on a rayon pool.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together into the
//!   end-to-end "atoms in, torsion table out" procedure.

pub mod core;
pub mod engine;
pub mod workflows;
