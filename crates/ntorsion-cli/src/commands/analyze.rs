use crate::cli::AnalyzeArgs;
use crate::config::build_config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use ntorsion::core::io::rings::DEFAULT_TITLE;
use ntorsion::{engine::progress::ProgressReporter, workflows};
use tracing::info;

pub fn run(args: &AnalyzeArgs, quiet: bool) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app = build_config(args)?;

    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!(
        input = %app.input_path.display(),
        output = %app.output_path.display(),
        "Invoking the torsion analysis workflow..."
    );
    let outcome = workflows::analyze::analyze_file(
        &app.input_path,
        &app.output_path,
        &app.core_config,
        &reporter,
    )?;

    println!(
        "Successfully read {} atoms from PDB file",
        outcome.atoms_read
    );
    println!(
        "Torsion angles for {} residues written to: {}",
        outcome.table.len(),
        app.output_path.display()
    );

    if let Some(rings_path) = &app.rings_path {
        workflows::rings::plot_table(&outcome.table, rings_path, DEFAULT_TITLE)?;
        println!("Successfully generated: {}", rings_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use nalgebra::Point3;
    use ntorsion::core::io::pdb::format_atom_line;
    use ntorsion::core::models::atom::AtomRecord;
    use ntorsion::engine::error::EngineError;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    fn write_pdb(path: &Path) {
        let names = ["P", "O5'", "C5'", "C4'", "C3'", "O3'", "O4'", "C1'", "N1", "C6"];
        let mut text = String::new();
        for res in 1..=2isize {
            for (i, name) in names.iter().enumerate() {
                let step = res as usize * names.len() + i;
                let t = step as f64 * 0.8;
                let atom = AtomRecord::new(
                    step as i64,
                    name,
                    "C",
                    res,
                    'A',
                    Point3::new(5.0 * t.cos(), 5.0 * t.sin(), 0.6 * step as f64),
                );
                text.push_str(&format_atom_line(&atom));
                text.push('\n');
            }
        }
        text.push_str("END\n");
        fs::write(path, text).unwrap();
    }

    fn args(input: PathBuf, output: PathBuf) -> AnalyzeArgs {
        AnalyzeArgs {
            pdb_file: Some(input),
            output_file: Some(output),
            config: None,
            format: None,
            with_residue_type: true,
            max_atoms: None,
            rings: None,
        }
    }

    #[test]
    fn writes_report_with_residue_type_column() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("rna.pdb");
        let output = dir.path().join("torsions.dat");
        write_pdb(&input);

        run(&args(input, output.clone()), true).unwrap();

        let report = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Residue Type"));
        assert!(lines[2].starts_with("      1    C    999.0"));
    }

    #[test]
    fn rings_flag_draws_the_computed_table() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("rna.pdb");
        let output = dir.path().join("torsions.dat");
        let rings = dir.path().join("rings.svg");
        write_pdb(&input);

        let mut analyze_args = args(input, output.clone());
        analyze_args.rings = Some(rings.clone());
        run(&analyze_args, true).unwrap();

        assert!(output.exists());
        let svg = fs::read_to_string(&rings).unwrap();
        assert!(svg.contains(DEFAULT_TITLE));
    }

    #[test]
    fn input_without_atoms_fails_without_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.pdb");
        let output = dir.path().join("torsions.dat");
        fs::write(&input, "HEADER    NOTHING HERE\nEND\n").unwrap();

        let result = run(&args(input, output.clone()), true);

        assert!(matches!(
            result,
            Err(CliError::Core(EngineError::Input(_)))
        ));
        assert!(!output.exists());
    }
}
