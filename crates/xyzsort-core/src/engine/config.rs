use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReorderConfig {
    /// Matches farther apart than this many length units are reported as warnings.
    pub warn_distance: Option<f64>,
}

#[derive(Default)]
pub struct ReorderConfigBuilder {
    warn_distance: Option<f64>,
}

impl ReorderConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn_distance(mut self, distance: Option<f64>) -> Self {
        self.warn_distance = distance;
        self
    }

    pub fn build(self) -> Result<ReorderConfig, ConfigError> {
        if let Some(distance) = self.warn_distance {
            if !distance.is_finite() || distance <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    name: "warn_distance",
                    reason: format!("expected a positive finite distance, got {}", distance),
                });
            }
        }
        Ok(ReorderConfig {
            warn_distance: self.warn_distance,
        })
    }
}
