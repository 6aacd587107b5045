pub mod file;
pub mod models;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use file::PartialReorderConfig;
use models::AppConfig;
use tracing::info;
use xyzsort::engine::config as core_config;

impl PartialReorderConfig {
    /// Merges the file values with command-line overrides; the command line wins.
    pub fn merge_with_cli(self, cli: &Cli) -> Result<AppConfig> {
        let matching = self.matching.unwrap_or_default();

        let core_config = core_config::ReorderConfigBuilder::new()
            .warn_distance(cli.warn_distance.or(matching.warn_distance))
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        Ok(AppConfig {
            input_path: cli.input.clone(),
            template_path: cli.template.clone(),
            output_path: cli.output.clone(),
            core_config,
        })
    }
}

pub fn build_app_config(cli: &Cli) -> Result<AppConfig> {
    let partial = match &cli.config {
        Some(path) => {
            info!("Reading configuration file {:?}", path);
            PartialReorderConfig::from_file(path)?
        }
        None => PartialReorderConfig::default(),
    };
    partial.merge_with_cli(cli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::file::PartialMatchingConfig;
    use clap::Parser;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["xyzsort"];
        argv.extend_from_slice(args);
        argv.extend_from_slice(&["in.xyz", "tmpl.xyz", "out.xyz"]);
        Cli::try_parse_from(argv).unwrap()
    }

    fn file_config(warn_distance: Option<f64>) -> PartialReorderConfig {
        PartialReorderConfig {
            matching: Some(PartialMatchingConfig { warn_distance }),
        }
    }

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let config = PartialReorderConfig::default()
            .merge_with_cli(&parse(&[]))
            .unwrap();

        assert_eq!(config.input_path, PathBuf::from("in.xyz"));
        assert_eq!(config.template_path, PathBuf::from("tmpl.xyz"));
        assert_eq!(config.output_path, PathBuf::from("out.xyz"));
        assert_eq!(config.core_config.warn_distance, None);
    }

    #[test]
    fn file_value_is_used_when_cli_is_silent() {
        let config = file_config(Some(0.5)).merge_with_cli(&parse(&[])).unwrap();
        assert_eq!(config.core_config.warn_distance, Some(0.5));
    }

    #[test]
    fn cli_value_overrides_file_value() {
        let config = file_config(Some(0.5))
            .merge_with_cli(&parse(&["--warn-distance", "0.2"]))
            .unwrap();
        assert_eq!(config.core_config.warn_distance, Some(0.2));
    }

    #[test]
    fn invalid_warn_distance_is_a_config_error() {
        let err = file_config(Some(-1.0)).merge_with_cli(&parse(&[])).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn build_app_config_reads_the_config_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("xyzsort.toml");
        std::fs::write(&path, "[matching]\nwarn-distance = 1.25\n").unwrap();

        let cli = parse(&["--config", path.to_str().unwrap()]);
        let config = build_app_config(&cli).unwrap();

        assert_eq!(config.core_config.warn_distance, Some(1.25));
    }
}
