//! # Engine Module
//!
//! Turns an indexed structure into per-residue torsion rows.
//!
//! ## Architecture
//!
//! - **Definitions** ([`definitions`]) - The four-atom tuple behind each named torsion
//! - **Residue Grouping** ([`residues`]) - Splits the atom sequence into contiguous residue blocks
//! - **Configuration** ([`config`]) - Input limits and report options, built through a validated builder
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Error Handling** ([`error`]) - Engine-level error type
//!
//! The per-residue evaluation itself lives in the crate-private `tasks` module and runs on a
//! rayon pool when the `parallel` feature is enabled.

pub mod config;
pub mod definitions;
pub mod error;
pub mod progress;
pub mod residues;
pub(crate) mod tasks;
