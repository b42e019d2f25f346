use super::residue::ResidueKey;
use nalgebra::Point3;

/// A single `ATOM` record read from a coordinate file.
///
/// Records are created once by the reader and never mutated afterwards. Text fields
/// hold the whitespace-trimmed column contents, so atom names compare exactly
/// against identifiers such as `"C4'"` or `"P"`.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// Atom serial number (columns 7-11), decimal or hybrid-36. `None` when the
    /// columns hold neither, such as the `*****` overflow marker.
    pub serial: Option<i64>,
    /// The name of the atom (e.g., "P", "O5'", "N9").
    pub name: String,
    /// The three-letter residue code (e.g., "G", "DA", "URA").
    pub residue_name: String,
    /// Residue sequence number; may be zero or negative.
    pub residue_number: isize,
    /// Single-character chain identifier.
    pub chain_id: char,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// Occupancy (columns 55-60), `0.0` when absent.
    pub occupancy: f64,
    /// Temperature factor (columns 61-66), `0.0` when absent.
    pub temperature_factor: f64,
}

impl AtomRecord {
    /// Creates a record with the identifying fields set and occupancy and
    /// temperature factor left at zero.
    ///
    /// # Arguments
    ///
    /// * `serial` - The atom serial number.
    /// * `name` - The atom name.
    /// * `residue_name` - The residue code.
    /// * `residue_number` - The residue sequence number.
    /// * `chain_id` - The chain identifier.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(
        serial: i64,
        name: &str,
        residue_name: &str,
        residue_number: isize,
        chain_id: char,
        position: Point3<f64>,
    ) -> Self {
        Self {
            serial: Some(serial),
            name: name.to_string(),
            residue_name: residue_name.to_string(),
            residue_number,
            chain_id,
            position,
            occupancy: 0.0,
            temperature_factor: 0.0,
        }
    }

    /// The (chain, residue number) pair this atom belongs to.
    pub fn residue_key(&self) -> ResidueKey {
        ResidueKey::new(self.chain_id, self.residue_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_has_expected_default_fields() {
        let atom = AtomRecord::new(7, "C4'", "G", 3, 'A', Point3::new(1.0, 2.0, 3.0));

        assert_eq!(atom.serial, Some(7));
        assert_eq!(atom.name, "C4'");
        assert_eq!(atom.residue_name, "G");
        assert_eq!(atom.residue_number, 3);
        assert_eq!(atom.chain_id, 'A');
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.occupancy, 0.0);
        assert_eq!(atom.temperature_factor, 0.0);
    }

    #[test]
    fn residue_key_combines_chain_and_number() {
        let atom = AtomRecord::new(1, "P", "U", -2, 'B', Point3::origin());
        assert_eq!(atom.residue_key(), ResidueKey::new('B', -2));
    }

    #[test]
    fn record_equality_and_clone_works() {
        let mut atom1 = AtomRecord::new(1, "O3'", "C", 10, 'A', Point3::new(0.5, 0.0, 0.0));
        atom1.occupancy = 0.5;
        let atom2 = atom1.clone();
        assert_eq!(atom1, atom2);
    }
}
