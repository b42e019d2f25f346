use ntorsion::core::io::report::ReportFormat;
use std::path::PathBuf;

pub struct DefaultsConfig {
    pub output_file: PathBuf,
    pub format: ReportFormat,
    pub with_residue_type: bool,
    pub max_atoms: Option<usize>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            output_file: PathBuf::from("torsion_angles.dat"),
            format: ReportFormat::Table,
            with_residue_type: false,
            max_atoms: None,
        }
    }
}
