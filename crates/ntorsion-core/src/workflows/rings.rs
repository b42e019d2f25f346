use crate::core::io::report::{ReportError, read_table};
use crate::core::io::rings::{AngleSet, write_svg_to_path};
use crate::core::models::torsion::TorsionTable;
use crate::engine::error::EngineError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{info, instrument};

/// Draws the rings plot of a table computed in this run.
///
/// # Errors
///
/// Returns [`EngineError::Plot`] if the table is empty or the SVG cannot be written.
#[instrument(skip(table), name = "rings_workflow")]
pub fn plot_table(table: &TorsionTable, output: &Path, title: &str) -> Result<(), EngineError> {
    let series: Vec<AngleSet> = table.rows().iter().map(|row| row.angles).collect();
    write_svg_to_path(&series, title, output)?;
    info!(path = %output.display(), residues = series.len(), "Torsion rings written.");
    Ok(())
}

/// Reads a fixed-width torsion report (either layout) and draws its rings plot.
///
/// Returns the number of residues plotted.
///
/// # Errors
///
/// Returns [`EngineError::Report`] if the report cannot be read or parsed, and
/// [`EngineError::Plot`] if it holds no rows or the SVG cannot be written.
#[instrument(name = "rings_file_workflow")]
pub fn plot_report_file(report: &Path, output: &Path, title: &str) -> Result<usize, EngineError> {
    let file = File::open(report).map_err(ReportError::from)?;
    let entries = read_table(&mut BufReader::new(file))?;
    info!(residues = entries.len(), "Torsion report read.");

    let series: Vec<AngleSet> = entries.iter().map(|entry| entry.angles).collect();
    write_svg_to_path(&series, title, output)?;
    info!(path = %output.display(), "Torsion rings written.");
    Ok(series.len())
}
