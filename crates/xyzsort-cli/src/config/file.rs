use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PartialMatchingConfig {
    #[serde(rename = "warn-distance")]
    pub warn_distance: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PartialReorderConfig {
    pub matching: Option<PartialMatchingConfig>,
}

impl PartialReorderConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_matching_section() {
        let config: PartialReorderConfig =
            toml::from_str("[matching]\nwarn-distance = 0.4\n").unwrap();
        assert_eq!(
            config.matching,
            Some(PartialMatchingConfig {
                warn_distance: Some(0.4)
            })
        );
    }

    #[test]
    fn empty_file_is_a_valid_config() {
        let config: PartialReorderConfig = toml::from_str("").unwrap();
        assert_eq!(config, PartialReorderConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let misspelled = toml::from_str::<PartialReorderConfig>("[matching]\nwarn_distance = 0.4\n");
        assert!(misspelled.is_err());
        let unknown_section = toml::from_str::<PartialReorderConfig>("[output]\nprecision = 6\n");
        assert!(unknown_section.is_err());
    }

    #[test]
    fn from_file_reports_the_offending_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("bad.toml");
        std::fs::write(&path, "[matching]\nwarn-distance = \"far\"\n").unwrap();

        let err = PartialReorderConfig::from_file(&path).unwrap_err();
        match err {
            CliError::FileParsing { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn from_file_propagates_missing_file_as_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("none.toml");
        let err = PartialReorderConfig::from_file(&missing).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
