use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::AnalyzeArgs;
use crate::error::Result;
use anyhow::anyhow;
use ntorsion::core::io::report::{ReportFormat, ReportLayout};
use ntorsion::engine::config::TorsionConfigBuilder;
use ntorsion::engine::error::EngineError;
use tracing::debug;

/// Merges CLI flags over the optional TOML file over the built-in defaults.
pub fn build_config(args: &AnalyzeArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();
    let input_path = args
        .pdb_file
        .clone()
        .ok_or_else(|| anyhow!("no PDB file was given"))?;

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    let input_file = file_config.input.unwrap_or_default();
    let output_file = file_config.output.unwrap_or_default();

    let max_atoms = args
        .max_atoms
        .or(input_file.max_atoms)
        .or(defaults.max_atoms);
    let format = args
        .format
        .map(ReportFormat::from)
        .or(output_file.format)
        .unwrap_or(defaults.format);
    let with_residue_type = args.with_residue_type
        || output_file
            .with_residue_type
            .unwrap_or(defaults.with_residue_type);
    let layout = if with_residue_type {
        ReportLayout::WithResidueType
    } else {
        ReportLayout::Standard
    };

    let core_config = TorsionConfigBuilder::new()
        .max_atoms(max_atoms)
        .report_format(format)
        .report_layout(layout)
        .build()
        .map_err(EngineError::from)?;
    debug!(?core_config, "Resolved torsion configuration.");

    Ok(AppConfig {
        input_path,
        output_path: args
            .output_file
            .clone()
            .unwrap_or(defaults.output_file),
        rings_path: args.rings.clone(),
        core_config,
    })
}
