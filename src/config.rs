use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::models::{LearningParams, ScoringWeights};

/// Errors raised while loading or validating engine configuration
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Engine configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub learning: LearningSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_species_match")]
    pub species_match: f64,
    #[serde(default = "default_species_neutral")]
    pub species_neutral: f64,
    #[serde(default = "default_species_explore_max")]
    pub species_explore_max: f64,
    #[serde(default = "default_age_max")]
    pub age_max: f64,
    #[serde(default = "default_weight_max")]
    pub weight_max: f64,
    #[serde(default = "default_gender_match")]
    pub gender_match: f64,
    #[serde(default = "default_gender_neutral")]
    pub gender_neutral: f64,
    #[serde(default = "default_breed_match")]
    pub breed_match: f64,
    #[serde(default = "default_coat_length_match")]
    pub coat_length_match: f64,
    #[serde(default = "default_health_match")]
    pub health_match: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            species_match: default_species_match(),
            species_neutral: default_species_neutral(),
            species_explore_max: default_species_explore_max(),
            age_max: default_age_max(),
            weight_max: default_weight_max(),
            gender_match: default_gender_match(),
            gender_neutral: default_gender_neutral(),
            breed_match: default_breed_match(),
            coat_length_match: default_coat_length_match(),
            health_match: default_health_match(),
        }
    }
}

fn default_species_match() -> f64 { 50.0 }
fn default_species_neutral() -> f64 { 25.0 }
fn default_species_explore_max() -> f64 { 60.0 }
fn default_age_max() -> f64 { 30.0 }
fn default_weight_max() -> f64 { 20.0 }
fn default_gender_match() -> f64 { 10.0 }
fn default_gender_neutral() -> f64 { 5.0 }
fn default_breed_match() -> f64 { 20.0 }
fn default_coat_length_match() -> f64 { 10.0 }
fn default_health_match() -> f64 { 5.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LearningSettings {
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default = "default_positive_threshold")]
    pub positive_threshold: f64,
    #[serde(default = "default_streak_threshold")]
    pub streak_threshold: u32,
}

impl Default for LearningSettings {
    fn default() -> Self {
        Self {
            learning_rate: default_learning_rate(),
            positive_threshold: default_positive_threshold(),
            streak_threshold: default_streak_threshold(),
        }
    }
}

fn default_learning_rate() -> f64 { 0.1 }
fn default_positive_threshold() -> f64 { 4.0 }
fn default_streak_threshold() -> u32 { 3 }

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides
    /// earlier):
    /// 1. Default values per field
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PAWMATCH__,
    ///    e.g. PAWMATCH__LEARNING__LEARNING_RATE -> learning.learning_rate)
    pub fn load() -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("PAWMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Self = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("PAWMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Self = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject tunings that would break the engine's numeric contracts
    ///
    /// Weights must be finite and non-negative (the exploration cap feeds a
    /// half-open random range), the learning rate must sit strictly inside
    /// (0, 1) for smoothing to converge, and a streak threshold of 0 would
    /// forget preferences that were never disliked.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let rate = self.learning.learning_rate;
        if !rate.is_finite() || rate <= 0.0 || rate >= 1.0 {
            return Err(SettingsError::Invalid(format!(
                "learning_rate must be in (0, 1), got {}",
                rate
            )));
        }

        if !self.learning.positive_threshold.is_finite() {
            return Err(SettingsError::Invalid(
                "positive_threshold must be finite".to_string(),
            ));
        }

        if self.learning.streak_threshold == 0 {
            return Err(SettingsError::Invalid(
                "streak_threshold must be at least 1".to_string(),
            ));
        }

        let w = &self.scoring.weights;
        let weights = [
            ("species_match", w.species_match),
            ("species_neutral", w.species_neutral),
            ("species_explore_max", w.species_explore_max),
            ("age_max", w.age_max),
            ("weight_max", w.weight_max),
            ("gender_match", w.gender_match),
            ("gender_neutral", w.gender_neutral),
            ("breed_match", w.breed_match),
            ("coat_length_match", w.coat_length_match),
            ("health_match", w.health_match),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::Invalid(format!(
                    "scoring weight {} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// Scoring weights for constructing a [`crate::core::Ranker`]
    pub fn scoring_weights(&self) -> ScoringWeights {
        let w = &self.scoring.weights;
        ScoringWeights {
            species_match: w.species_match,
            species_neutral: w.species_neutral,
            species_explore_max: w.species_explore_max,
            age_max: w.age_max,
            weight_max: w.weight_max,
            gender_match: w.gender_match,
            gender_neutral: w.gender_neutral,
            breed_match: w.breed_match,
            coat_length_match: w.coat_length_match,
            health_match: w.health_match,
        }
    }

    /// Learning parameters for constructing a
    /// [`crate::core::PreferenceLearner`]
    pub fn learning_params(&self) -> LearningParams {
        LearningParams {
            learning_rate: self.learning.learning_rate,
            positive_threshold: self.learning.positive_threshold,
            streak_threshold: self.learning.streak_threshold,
        }
    }
}
