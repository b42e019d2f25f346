use ntorsion::engine::config::TorsionConfig;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// SVG destination for the rings plot, when one was requested.
    pub rings_path: Option<PathBuf>,
    pub core_config: TorsionConfig,
}
