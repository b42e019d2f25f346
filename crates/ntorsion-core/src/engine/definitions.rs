//! The four-atom tuples behind each named nucleic-acid torsion.
//!
//! | Angle   | Atom 1      | Atom 2      | Atom 3        | Atom 4        |
//! |---------|-------------|-------------|---------------|---------------|
//! | alpha   | P (n-1)     | O5'         | C5'           | C4'           |
//! | beta    | O5'         | C5'         | C4'           | C3'           |
//! | gamma   | C5'         | C4'         | C3'           | O3'           |
//! | delta   | C4'         | C3'         | O3'           | P (n+1)       |
//! | epsilon | C3'         | O3'         | P (n+1)       | O5' (n+1)     |
//! | zeta    | O3'         | P (n+1)     | O5' (n+1)     | C5' (n+1)     |
//! | chi     | O4'         | C1'         | N9, else N1   | C8, else C6   |

use crate::core::models::atom::AtomRecord;
use crate::core::models::index::AtomIndex;
use crate::core::models::residue::ResidueKey;
use crate::core::models::torsion::TorsionKind;

/// One position of a torsion tuple: which residue, relative to the current one,
/// and which atom names to try, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomSpec {
    pub residue_offset: isize,
    pub candidates: &'static [&'static str],
}

impl AtomSpec {
    const fn previous(name: &'static [&'static str]) -> Self {
        Self {
            residue_offset: -1,
            candidates: name,
        }
    }
    const fn current(name: &'static [&'static str]) -> Self {
        Self {
            residue_offset: 0,
            candidates: name,
        }
    }
    const fn next(name: &'static [&'static str]) -> Self {
        Self {
            residue_offset: 1,
            candidates: name,
        }
    }

    /// Resolves this position for the residue `key`; the first candidate present wins.
    pub fn resolve<'a>(&self, index: &'a AtomIndex, key: ResidueKey) -> Option<&'a AtomRecord> {
        index.lookup_first_of(key.offset(self.residue_offset), self.candidates)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TorsionDefinition {
    pub kind: TorsionKind,
    pub atoms: [AtomSpec; 4],
}

impl TorsionDefinition {
    /// Finds all four atoms for residue `key`, or `None` if any is absent.
    pub fn resolve<'a>(
        &self,
        index: &'a AtomIndex,
        key: ResidueKey,
    ) -> Option<[&'a AtomRecord; 4]> {
        let [a, b, c, d] = &self.atoms;
        Some([
            a.resolve(index, key)?,
            b.resolve(index, key)?,
            c.resolve(index, key)?,
            d.resolve(index, key)?,
        ])
    }
}

const P: &[&str] = &["P"];
const O5: &[&str] = &["O5'"];
const C5: &[&str] = &["C5'"];
const C4: &[&str] = &["C4'"];
const C3: &[&str] = &["C3'"];
const O3: &[&str] = &["O3'"];
const O4: &[&str] = &["O4'"];
const C1: &[&str] = &["C1'"];
const GLYCOSIDIC_N: &[&str] = &["N9", "N1"];
const BASE_C: &[&str] = &["C8", "C6"];

pub static DEFINITIONS: [TorsionDefinition; TorsionKind::COUNT] = [
    TorsionDefinition {
        kind: TorsionKind::Alpha,
        atoms: [
            AtomSpec::previous(P),
            AtomSpec::current(O5),
            AtomSpec::current(C5),
            AtomSpec::current(C4),
        ],
    },
    TorsionDefinition {
        kind: TorsionKind::Beta,
        atoms: [
            AtomSpec::current(O5),
            AtomSpec::current(C5),
            AtomSpec::current(C4),
            AtomSpec::current(C3),
        ],
    },
    TorsionDefinition {
        kind: TorsionKind::Gamma,
        atoms: [
            AtomSpec::current(C5),
            AtomSpec::current(C4),
            AtomSpec::current(C3),
            AtomSpec::current(O3),
        ],
    },
    TorsionDefinition {
        kind: TorsionKind::Delta,
        atoms: [
            AtomSpec::current(C4),
            AtomSpec::current(C3),
            AtomSpec::current(O3),
            AtomSpec::next(P),
        ],
    },
    TorsionDefinition {
        kind: TorsionKind::Epsilon,
        atoms: [
            AtomSpec::current(C3),
            AtomSpec::current(O3),
            AtomSpec::next(P),
            AtomSpec::next(O5),
        ],
    },
    TorsionDefinition {
        kind: TorsionKind::Zeta,
        atoms: [
            AtomSpec::current(O3),
            AtomSpec::next(P),
            AtomSpec::next(O5),
            AtomSpec::next(C5),
        ],
    },
    TorsionDefinition {
        kind: TorsionKind::Chi,
        atoms: [
            AtomSpec::current(O4),
            AtomSpec::current(C1),
            AtomSpec::current(GLYCOSIDIC_N),
            AtomSpec::current(BASE_C),
        ],
    },
];

/// The tuple definition for a named torsion.
pub fn definition(kind: TorsionKind) -> &'static TorsionDefinition {
    &DEFINITIONS[kind.index()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn definitions_are_stored_in_column_order() {
        for kind in TorsionKind::ALL {
            assert_eq!(definition(kind).kind, kind);
        }
    }

    #[test]
    fn backbone_definitions_span_expected_residues() {
        let offsets = |kind| definition(kind).atoms.map(|spec| spec.residue_offset);
        assert_eq!(offsets(TorsionKind::Alpha), [-1, 0, 0, 0]);
        assert_eq!(offsets(TorsionKind::Beta), [0, 0, 0, 0]);
        assert_eq!(offsets(TorsionKind::Delta), [0, 0, 0, 1]);
        assert_eq!(offsets(TorsionKind::Epsilon), [0, 0, 1, 1]);
        assert_eq!(offsets(TorsionKind::Zeta), [0, 1, 1, 1]);
        assert_eq!(offsets(TorsionKind::Chi), [0, 0, 0, 0]);
    }

    #[test]
    fn chi_tries_purine_atoms_first() {
        let chi = definition(TorsionKind::Chi);
        assert_eq!(chi.atoms[2].candidates, &["N9", "N1"]);
        assert_eq!(chi.atoms[3].candidates, &["C8", "C6"]);
    }

    #[test]
    fn resolve_requires_every_atom() {
        let atom = |name: &str, res: isize| {
            AtomRecord::new(0, name, "G", res, 'A', Point3::origin())
        };
        let index = AtomIndex::new(vec![
            atom("P", 1),
            atom("O5'", 2),
            atom("C5'", 2),
            atom("C4'", 2),
            atom("C3'", 2),
        ])
        .unwrap();
        let key = ResidueKey::new('A', 2);

        let alpha = definition(TorsionKind::Alpha).resolve(&index, key).unwrap();
        assert_eq!(alpha.map(|a| a.name.as_str()), ["P", "O5'", "C5'", "C4'"]);
        assert_eq!(alpha[0].residue_number, 1);

        assert!(definition(TorsionKind::Beta).resolve(&index, key).is_some());
        assert!(definition(TorsionKind::Gamma).resolve(&index, key).is_none());
        assert!(definition(TorsionKind::Alpha).resolve(&index, ResidueKey::new('B', 2)).is_none());
    }
}
