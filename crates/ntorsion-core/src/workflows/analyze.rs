use crate::core::io::pdb::PdbFile;
use crate::core::io::report::{ReportError, write_table};
use crate::core::io::traits::StructureFile;
use crate::core::models::atom::AtomRecord;
use crate::core::models::index::AtomIndex;
use crate::core::models::torsion::TorsionTable;
use crate::engine::config::TorsionConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::residues::contiguous_residue_groups;
use crate::engine::tasks::torsion_angles;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{info, instrument};

/// Computes the torsion table for atoms already in memory.
///
/// # Errors
///
/// Returns [`EngineError::Index`] if `atoms` is empty.
#[instrument(skip_all, name = "analysis_workflow")]
pub fn run(
    atoms: Vec<AtomRecord>,
    reporter: &ProgressReporter,
) -> Result<TorsionTable, EngineError> {
    reporter.report(Progress::PhaseStart { name: "Indexing" });
    let groups = contiguous_residue_groups(&atoms);
    let index = AtomIndex::new(atoms)?;
    info!(
        atoms = index.len(),
        residues = index.residue_count(),
        groups = groups.len(),
        "Indexed structure."
    );
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart { name: "Torsions" });
    let table = TorsionTable::new(torsion_angles::run(&index, &groups, reporter));
    reporter.report(Progress::PhaseFinish);

    info!(
        rows = table.len(),
        computed = table.computed_angles(),
        missing = table.missing_angles(),
        "Torsion analysis complete."
    );
    reporter.message(format!(
        "{} residues, {} angles computed, {} missing",
        table.len(),
        table.computed_angles(),
        table.missing_angles()
    ));

    Ok(table)
}

/// Reads a PDB file and computes its torsion table.
pub fn run_on_path<P: AsRef<Path>>(
    path: P,
    config: &TorsionConfig,
    reporter: &ProgressReporter,
) -> Result<TorsionTable, EngineError> {
    let path = path.as_ref();
    reporter.report(Progress::PhaseStart { name: "Reading" });
    info!(path = %path.display(), "Reading coordinates.");
    let atoms = PdbFile::read_from_path(path, &config.read_options())?;
    reporter.report(Progress::PhaseFinish);

    run(atoms, reporter)
}

/// Outcome of [`analyze_file`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    /// Number of `ATOM` records read from the input.
    pub atoms_read: usize,
    pub table: TorsionTable,
}

/// Reads `input`, computes the torsion table and writes the report to `output`.
///
/// The output file is created once the input has been read and before any
/// torsion is evaluated, so an unwritable destination aborts the run early and
/// an input without atoms leaves no output file behind.
///
/// # Errors
///
/// Returns [`EngineError::Input`] if the input cannot be read or holds no `ATOM`
/// records, and [`EngineError::Report`] if the report cannot be created or written.
#[instrument(skip_all, name = "analyze_file_workflow")]
pub fn analyze_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    config: &TorsionConfig,
    reporter: &ProgressReporter,
) -> Result<AnalysisOutcome, EngineError> {
    let input = input.as_ref();
    let output = output.as_ref();

    reporter.report(Progress::PhaseStart { name: "Reading" });
    info!(path = %input.display(), "Reading coordinates.");
    let atoms = PdbFile::read_from_path(input, &config.read_options())?;
    let atoms_read = atoms.len();
    reporter.report(Progress::PhaseFinish);

    let file = File::create(output).map_err(ReportError::from)?;
    let mut writer = BufWriter::new(file);

    let table = run(atoms, reporter)?;

    reporter.report(Progress::PhaseStart { name: "Writing" });
    write_table(&table, &config.report, &mut writer)?;
    writer.flush().map_err(ReportError::from)?;
    info!(path = %output.display(), rows = table.len(), "Torsion report written.");
    reporter.report(Progress::PhaseFinish);

    Ok(AnalysisOutcome { atoms_read, table })
}
