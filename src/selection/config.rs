use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Weight {name} must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f32 },
    #[error("Minimum score must lie in [0, 1), got {0}")]
    InvalidThreshold(f32),
    #[error("Result limit must be at least 1")]
    InvalidResultLimit,
}

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Added per term found in the title.
    pub title_weight: f32,
    /// Added per term found inside any keyword.
    pub keyword_weight: f32,
    /// Added per term found in the content.
    pub content_weight: f32,
    /// Added per distinct matched term beyond the first.
    pub multi_term_bonus: f32,
    /// Results must score strictly above this.
    pub min_score: f32,
    pub max_results: usize,
}

impl ScoringConfig {
    pub fn v0() -> Self {
        Self {
            title_weight: 0.4,
            keyword_weight: 0.3,
            content_weight: 0.2,
            multi_term_bonus: 0.1,
            min_score: 0.1,
            max_results: 5,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("title_weight", self.title_weight),
            ("keyword_weight", self.keyword_weight),
            ("content_weight", self.content_weight),
            ("multi_term_bonus", self.multi_term_bonus),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }

        if !(0.0..1.0).contains(&self.min_score) {
            return Err(ConfigError::InvalidThreshold(self.min_score));
        }

        if self.max_results == 0 {
            return Err(ConfigError::InvalidResultLimit);
        }

        Ok(())
    }

    /// Parse and validate. Missing fields take their v0 values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ScoringConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), ?config, "Scoring config loaded");
        Ok(config)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::v0()
    }
}
