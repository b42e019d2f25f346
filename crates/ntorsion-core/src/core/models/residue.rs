use std::fmt;

/// Identifies a residue by chain identifier and residue sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResidueKey {
    pub chain_id: char,
    pub residue_number: isize,
}

impl ResidueKey {
    pub fn new(chain_id: char, residue_number: isize) -> Self {
        Self {
            chain_id,
            residue_number,
        }
    }

    /// The key of the residue `offset` positions along the same chain.
    ///
    /// Neighbours are found by residue number arithmetic alone; gaps in numbering
    /// simply make the neighbour absent.
    pub fn offset(self, offset: isize) -> Self {
        Self {
            chain_id: self.chain_id,
            residue_number: self.residue_number + offset,
        }
    }
}

impl fmt::Display for ResidueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chain_id, self.residue_number)
    }
}
