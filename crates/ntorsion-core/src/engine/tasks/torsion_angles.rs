use crate::core::models::atom::AtomRecord;
use crate::core::models::index::AtomIndex;
use crate::core::models::torsion::{TorsionKind, TorsionRow};
use crate::core::utils::geometry::{bond_angle, dihedral, distance};
use crate::core::utils::identifiers::is_purine;
use crate::engine::definitions::{DEFINITIONS, TorsionDefinition};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::residues::ResidueGroup;
use tracing::{debug, info, instrument, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[instrument(skip_all, name = "torsion_angles_task")]
pub fn run(
    index: &AtomIndex,
    groups: &[ResidueGroup],
    reporter: &ProgressReporter,
) -> Vec<TorsionRow> {
    info!(residues = groups.len(), "Evaluating torsion angles.");

    if groups.is_empty() {
        return Vec::new();
    }

    reporter.report(Progress::TaskStart {
        total_steps: groups.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = groups.iter();

    #[cfg(feature = "parallel")]
    let iterator = groups.par_iter();

    let rows: Vec<TorsionRow> = iterator
        .map(|group| {
            let row = compute_row(index, group);
            reporter.report(Progress::TaskIncrement);
            row
        })
        .collect();

    reporter.report(Progress::TaskFinish);

    rows
}

/// Evaluates all seven torsions for one residue group.
pub fn compute_row(index: &AtomIndex, group: &ResidueGroup) -> TorsionRow {
    let mut row = TorsionRow::new(group.key, &group.residue_name);

    for definition in &DEFINITIONS {
        let value = definition.resolve(index, group.key).map(|atoms| {
            if definition.kind == TorsionKind::Chi {
                check_glycosidic_atom(group, &atoms);
            }
            trace_tuple(definition, group, &atoms);
            let [a, b, c, d] = atoms;
            dihedral(&a.position, &b.position, &c.position, &d.position)
        });
        row.set(definition.kind, value);
    }

    if row.computed_count() < TorsionKind::COUNT {
        debug!(
            residue = %group.key,
            computed = row.computed_count(),
            "Residue has incomplete torsion geometry."
        );
    }

    row
}

fn check_glycosidic_atom(group: &ResidueGroup, atoms: &[&AtomRecord; 4]) {
    let Some(purine) = is_purine(&group.residue_name) else {
        return;
    };
    let nitrogen = atoms[2].name.as_str();
    if purine != (nitrogen == "N9") {
        debug!(
            residue = %group.key,
            residue_name = %group.residue_name,
            atom = nitrogen,
            "Glycosidic nitrogen does not match the base type of the residue."
        );
    }
}

fn trace_tuple(definition: &TorsionDefinition, group: &ResidueGroup, atoms: &[&AtomRecord; 4]) {
    let [a, b, c, d] = atoms;
    trace!(
        torsion = %definition.kind,
        residue = %group.key,
        atoms = ?[a.serial, b.serial, c.serial, d.serial],
        central_bond = distance(&b.position, &c.position),
        angle_abc = ?bond_angle(&a.position, &b.position, &c.position),
        angle_bcd = ?bond_angle(&b.position, &c.position, &d.position),
        "Resolved torsion tuple."
    );
}
