use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::scoring::ScoringWeights;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{name} must be a finite positive number, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub scoring: ScoringWeights,
    #[serde(default)]
    pub filter: FilterConfig,
}

impl AnalysisConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject weights that could make a session's score undefined.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("like_weight", self.scoring.like_weight),
            ("dislike_weight", self.scoring.dislike_weight),
            ("view_weight", self.scoring.view_weight),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Discard events dated before this day.
    pub since: Option<NaiveDate>,
}

#[cfg(test)]
mod tests;
