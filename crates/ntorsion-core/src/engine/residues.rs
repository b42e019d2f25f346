use crate::core::models::atom::AtomRecord;
use crate::core::models::residue::ResidueKey;
use itertools::Itertools;
use std::collections::HashSet;
use tracing::warn;

/// A run of consecutive atoms sharing one residue number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidueGroup {
    /// Chain of the block's first atom together with the shared residue number.
    pub key: ResidueKey,
    pub residue_name: String,
    pub atom_count: usize,
}

/// Splits the atom sequence into residue groups.
///
/// A new group starts whenever the residue number differs from that of the
/// preceding atom. Only the number is compared: a chain change that keeps the
/// number continues the current group. A residue number that reappears later in
/// the file forms a second group, and so yields a second row.
pub fn contiguous_residue_groups(atoms: &[AtomRecord]) -> Vec<ResidueGroup> {
    let blocks = atoms.iter().chunk_by(|atom| atom.residue_number);

    let mut groups = Vec::new();
    for (_, mut block) in &blocks {
        let Some(first) = block.next() else {
            continue;
        };
        groups.push(ResidueGroup {
            key: first.residue_key(),
            residue_name: first.residue_name.clone(),
            atom_count: 1 + block.count(),
        });
    }

    let mut seen = HashSet::with_capacity(groups.len());
    for group in &groups {
        if !seen.insert(group.key) {
            warn!(
                "Residue {} appears in more than one contiguous block; it will be reported once per block.",
                group.key
            );
        }
    }

    groups
}
