use super::residue::ResidueKey;
use std::fmt;

/// Value written in place of an angle that could not be computed.
pub const MISSING_ANGLE_SENTINEL: f64 = 999.0;

/// The seven named nucleic-acid torsion angles, in report column order.
///
/// The six backbone angles follow the sugar-phosphate chain from the phosphorus
/// of the preceding residue (alpha) to the C5' of the following one (zeta); chi
/// describes the glycosidic bond between sugar and base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TorsionKind {
    Alpha,
    Beta,
    Gamma,
    Delta,
    Epsilon,
    Zeta,
    Chi,
}

impl TorsionKind {
    pub const COUNT: usize = 7;

    pub const ALL: [TorsionKind; Self::COUNT] = [
        TorsionKind::Alpha,
        TorsionKind::Beta,
        TorsionKind::Gamma,
        TorsionKind::Delta,
        TorsionKind::Epsilon,
        TorsionKind::Zeta,
        TorsionKind::Chi,
    ];

    /// Column position of this angle within a [`TorsionRow`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            TorsionKind::Alpha => "alpha",
            TorsionKind::Beta => "beta",
            TorsionKind::Gamma => "gamma",
            TorsionKind::Delta => "delta",
            TorsionKind::Epsilon => "epsilon",
            TorsionKind::Zeta => "zeta",
            TorsionKind::Chi => "chi",
        }
    }
}

impl fmt::Display for TorsionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The torsion angles computed for one residue group.
#[derive(Debug, Clone, PartialEq)]
pub struct TorsionRow {
    pub key: ResidueKey,
    /// Residue code of the first atom of the group.
    pub residue_name: String,
    /// Angles in degrees, indexed by [`TorsionKind::index`]; `None` when any of the
    /// four defining atoms is absent.
    pub angles: [Option<f64>; TorsionKind::COUNT],
}

impl TorsionRow {
    pub fn new(key: ResidueKey, residue_name: &str) -> Self {
        Self {
            key,
            residue_name: residue_name.to_string(),
            angles: [None; TorsionKind::COUNT],
        }
    }

    #[inline]
    pub fn residue_number(&self) -> isize {
        self.key.residue_number
    }

    #[inline]
    pub fn get(&self, kind: TorsionKind) -> Option<f64> {
        self.angles[kind.index()]
    }

    #[inline]
    pub fn set(&mut self, kind: TorsionKind, value: Option<f64>) {
        self.angles[kind.index()] = value;
    }

    /// The angle as written to reports: the value itself, or
    /// [`MISSING_ANGLE_SENTINEL`] when it could not be computed.
    pub fn value_or_sentinel(&self, kind: TorsionKind) -> f64 {
        self.get(kind).unwrap_or(MISSING_ANGLE_SENTINEL)
    }

    pub fn computed_count(&self) -> usize {
        self.angles.iter().filter(|a| a.is_some()).count()
    }
}

/// Ordered torsion rows, one per residue group, in processing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TorsionTable {
    rows: Vec<TorsionRow>,
}

impl TorsionTable {
    pub fn new(rows: Vec<TorsionRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[TorsionRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of angles that were computed across all rows.
    pub fn computed_angles(&self) -> usize {
        self.rows.iter().map(TorsionRow::computed_count).sum()
    }

    /// Number of angles reported as missing across all rows.
    pub fn missing_angles(&self) -> usize {
        self.rows.len() * TorsionKind::COUNT - self.computed_angles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_kinds_in_column_order() {
        for (i, kind) in TorsionKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
        assert_eq!(TorsionKind::Chi.index(), 6);
    }

    #[test]
    fn new_row_has_every_angle_missing() {
        let row = TorsionRow::new(ResidueKey::new('A', 1), "G");
        assert_eq!(row.computed_count(), 0);
        for kind in TorsionKind::ALL {
            assert_eq!(row.get(kind), None);
            assert_eq!(row.value_or_sentinel(kind), MISSING_ANGLE_SENTINEL);
        }
    }

    #[test]
    fn set_only_affects_the_named_column() {
        let mut row = TorsionRow::new(ResidueKey::new('A', 1), "G");
        row.set(TorsionKind::Gamma, Some(54.2));

        assert_eq!(row.get(TorsionKind::Gamma), Some(54.2));
        assert_eq!(row.value_or_sentinel(TorsionKind::Gamma), 54.2);
        assert_eq!(row.get(TorsionKind::Beta), None);
        assert_eq!(row.computed_count(), 1);
    }

    #[test]
    fn table_counts_computed_and_missing_angles() {
        let mut first = TorsionRow::new(ResidueKey::new('A', 1), "G");
        first.set(TorsionKind::Beta, Some(-170.0));
        first.set(TorsionKind::Chi, Some(-160.0));
        let second = TorsionRow::new(ResidueKey::new('A', 2), "C");

        let table = TorsionTable::new(vec![first, second]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.computed_angles(), 2);
        assert_eq!(table.missing_angles(), 12);
    }
}
