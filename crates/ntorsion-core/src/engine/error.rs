use crate::core::io::pdb::PdbError;
use crate::core::io::report::ReportError;
use crate::core::io::rings::RingsError;
use crate::core::models::index::IndexError;
use crate::engine::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read coordinate input: {0}")]
    Input(#[from] PdbError),

    #[error("Failed to index structure: {0}")]
    Index(#[from] IndexError),

    #[error("Failed to write torsion report: {0}")]
    Report(#[from] ReportError),

    #[error("Failed to draw torsion rings: {0}")]
    Plot(#[from] RingsError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
