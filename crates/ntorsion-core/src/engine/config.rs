use crate::core::io::pdb::PdbReadOptions;
use crate::core::io::report::{ReportFormat, ReportLayout, ReportOptions};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputConfig {
    /// Soft limit on atoms read; `None` reads the whole file.
    pub max_atoms: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TorsionConfig {
    pub input: InputConfig,
    pub report: ReportOptions,
}

impl TorsionConfig {
    pub fn read_options(&self) -> PdbReadOptions {
        PdbReadOptions {
            max_atoms: self.input.max_atoms,
        }
    }
}

#[derive(Default)]
pub struct TorsionConfigBuilder {
    max_atoms: Option<usize>,
    report_format: Option<ReportFormat>,
    report_layout: Option<ReportLayout>,
}

impl TorsionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_atoms(mut self, max_atoms: Option<usize>) -> Self {
        self.max_atoms = max_atoms;
        self
    }
    pub fn report_format(mut self, format: ReportFormat) -> Self {
        self.report_format = Some(format);
        self
    }
    pub fn report_layout(mut self, layout: ReportLayout) -> Self {
        self.report_layout = Some(layout);
        self
    }

    pub fn build(self) -> Result<TorsionConfig, ConfigError> {
        if self.max_atoms == Some(0) {
            return Err(ConfigError::InvalidParameter {
                name: "max_atoms",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(TorsionConfig {
            input: InputConfig {
                max_atoms: self.max_atoms,
            },
            report: ReportOptions {
                format: self.report_format.unwrap_or_default(),
                layout: self.report_layout.unwrap_or_default(),
            },
        })
    }
}
