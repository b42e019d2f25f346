//! Per-residue computations driven by the analysis workflow.

pub mod torsion_angles;
