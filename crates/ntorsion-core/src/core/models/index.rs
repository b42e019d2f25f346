use super::atom::AtomRecord;
use super::residue::ResidueKey;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndexError {
    #[error("Structure contains no atoms")]
    EmptyStructure,
}

/// Read-only collection of atom records answering point queries.
///
/// Records keep their input order, which drives residue grouping downstream.
/// Lookups by (residue, chain, atom name) resolve to the first record carrying
/// that key, so duplicated atom names behave exactly as with a front-to-back
/// scan of the input.
#[derive(Debug, Clone)]
pub struct AtomIndex {
    /// Atom records in input order.
    atoms: Vec<AtomRecord>,
    /// Residue key -> atom name -> position of the first matching record.
    lookup_map: HashMap<ResidueKey, HashMap<String, usize>>,
}

impl AtomIndex {
    /// Builds the index from parsed records.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::EmptyStructure`] if `atoms` is empty.
    pub fn new(atoms: Vec<AtomRecord>) -> Result<Self, IndexError> {
        if atoms.is_empty() {
            return Err(IndexError::EmptyStructure);
        }

        let mut lookup_map: HashMap<ResidueKey, HashMap<String, usize>> = HashMap::new();
        for (position, atom) in atoms.iter().enumerate() {
            let by_name = lookup_map.entry(atom.residue_key()).or_default();
            if let Entry::Vacant(slot) = by_name.entry(atom.name.clone()) {
                slot.insert(position);
            }
        }

        Ok(Self { atoms, lookup_map })
    }

    /// Finds the first atom with the given residue number, chain and exact
    /// (case-sensitive) atom name.
    ///
    /// A miss is ordinary control flow: terminal residues and incomplete
    /// residues simply lack some atoms.
    pub fn lookup(
        &self,
        residue_number: isize,
        chain_id: char,
        atom_name: &str,
    ) -> Option<&AtomRecord> {
        self.lookup_key(ResidueKey::new(chain_id, residue_number), atom_name)
    }

    /// Same as [`lookup`](Self::lookup), keyed by a [`ResidueKey`].
    pub fn lookup_key(&self, key: ResidueKey, atom_name: &str) -> Option<&AtomRecord> {
        self.lookup_map
            .get(&key)
            .and_then(|by_name| by_name.get(atom_name))
            .map(|&position| &self.atoms[position])
    }

    /// Tries each candidate name in order and returns the first atom found.
    pub fn lookup_first_of(&self, key: ResidueKey, atom_names: &[&str]) -> Option<&AtomRecord> {
        atom_names
            .iter()
            .find_map(|name| self.lookup_key(key, name))
    }

    pub fn atoms(&self) -> &[AtomRecord] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Number of distinct (chain, residue number) pairs present.
    pub fn residue_count(&self) -> usize {
        self.lookup_map.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn atom(serial: i64, name: &str, res: isize, chain: char, x: f64) -> AtomRecord {
        AtomRecord::new(serial, name, "G", res, chain, Point3::new(x, 0.0, 0.0))
    }

    #[test]
    fn new_rejects_empty_input() {
        assert_eq!(AtomIndex::new(Vec::new()).unwrap_err(), IndexError::EmptyStructure);
    }

    #[test]
    fn lookup_matches_all_three_keys() {
        let index = AtomIndex::new(vec![
            atom(1, "P", 1, 'A', 1.0),
            atom(2, "P", 2, 'A', 2.0),
            atom(3, "P", 1, 'B', 3.0),
        ])
        .unwrap();

        assert_eq!(index.lookup(1, 'A', "P").unwrap().serial, Some(1));
        assert_eq!(index.lookup(2, 'A', "P").unwrap().serial, Some(2));
        assert_eq!(index.lookup(1, 'B', "P").unwrap().serial, Some(3));
        assert!(index.lookup(3, 'A', "P").is_none());
        assert!(index.lookup(1, 'C', "P").is_none());
        assert!(index.lookup(1, 'A', "O5'").is_none());
    }

    #[test]
    fn lookup_returns_first_record_for_duplicate_keys() {
        let index = AtomIndex::new(vec![
            atom(10, "C1'", 4, 'A', 1.0),
            atom(11, "C1'", 4, 'A', 9.0),
        ])
        .unwrap();

        let found = index.lookup(4, 'A', "C1'").unwrap();
        assert_eq!(found.serial, Some(10));
        assert_eq!(found.position.x, 1.0);
    }

    #[test]
    fn lookup_is_case_sensitive_and_does_not_trim() {
        let index = AtomIndex::new(vec![atom(1, "C4'", 1, 'A', 0.0)]).unwrap();
        assert!(index.lookup(1, 'A', "c4'").is_none());
        assert!(index.lookup(1, 'A', " C4'").is_none());
        assert!(index.lookup(1, 'A', "C4'").is_some());
    }

    #[test]
    fn lookup_first_of_respects_candidate_order() {
        let index = AtomIndex::new(vec![
            atom(1, "N1", 1, 'A', 0.0),
            atom(2, "N9", 1, 'A', 0.0),
        ])
        .unwrap();
        let key = ResidueKey::new('A', 1);

        assert_eq!(index.lookup_first_of(key, &["N9", "N1"]).unwrap().serial, Some(2));
        assert_eq!(index.lookup_first_of(key, &["N1", "N9"]).unwrap().serial, Some(1));
        assert!(index.lookup_first_of(key, &["C8", "C6"]).is_none());
    }

    #[test]
    fn atoms_preserve_insertion_order() {
        let index = AtomIndex::new(vec![
            atom(3, "P", 2, 'A', 0.0),
            atom(1, "P", 1, 'A', 0.0),
            atom(2, "O5'", 2, 'A', 0.0),
        ])
        .unwrap();

        let serials: Vec<i64> = index.atoms().iter().filter_map(|a| a.serial).collect();
        assert_eq!(serials, vec![3, 1, 2]);
        assert_eq!(index.len(), 3);
        assert_eq!(index.residue_count(), 2);
        assert!(!index.is_empty());
    }
}
