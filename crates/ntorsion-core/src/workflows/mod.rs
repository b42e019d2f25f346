//! # Workflows Module
//!
//! End-to-end entry points that take coordinates in and hand a finished torsion
//! table out, reporting progress phase by phase.
//!
//! - **Analysis Workflow** ([`analyze`]) - Indexes the atoms, groups residues,
//!   evaluates every torsion and optionally writes the report.
//! - **Rings Workflow** ([`rings`]) - Draws the concentric-ring plot of a
//!   computed table or of a report file written earlier.

pub mod analyze;
pub mod rings;
