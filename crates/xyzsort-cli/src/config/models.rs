use std::path::PathBuf;
use xyzsort::engine::config as core_config;

/// Everything a reorder run needs, resolved from the command line and the
/// optional config file.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub input_path: PathBuf,
    pub template_path: PathBuf,
    pub output_path: PathBuf,
    pub core_config: core_config::ReorderConfig,
}
