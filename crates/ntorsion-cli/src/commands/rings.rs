use crate::cli::RingsArgs;
use crate::error::Result;
use ntorsion::workflows;
use tracing::info;

pub fn run(args: &RingsArgs) -> Result<()> {
    println!("Reading torsion angles from: {}", args.report_file.display());
    let residues =
        workflows::rings::plot_report_file(&args.report_file, &args.output, &args.title)?;
    info!(residues, "Rings plot complete.");

    println!("Successfully generated: {}", args.output.display());
    Ok(())
}
