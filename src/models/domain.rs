use serde::{Deserialize, Serialize};

use crate::models::preference::Preference;

/// Species available for adoption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Species {
    Dog,
    Cat,
}

/// Pet gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Coat length categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoatLength {
    Hairless,
    Short,
    Medium,
    Long,
}

/// Reported health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Excellent,
    Good,
    Fair,
    Poor,
}

/// A pet listing as the engine sees it
///
/// `id` and `name` are carried through for the caller's benefit; scoring and
/// learning only look at the attribute fields. Availability and shelter
/// ownership live in the storage layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub species: Species,
    #[serde(default)]
    pub breed: Option<String>,
    pub gender: Gender,
    pub age: u32,
    pub weight: u32,
    #[serde(rename = "coatLength", default)]
    pub coat_length: Option<CoatLength>,
    #[serde(rename = "healthStatus", default)]
    pub health_status: Option<HealthStatus>,
}

/// An adopter's taste profile
///
/// Species and breed preferences run through the dislike-streak state machine
/// (see [`Preference`]); gender, coat and health preferences are plain
/// options because negative ratings never erode them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "speciesPreference", default)]
    pub species_preference: Preference<Species>,
    #[serde(rename = "breedPreference", default)]
    pub breed_preference: Preference<String>,
    #[serde(rename = "preferredGender", default)]
    pub preferred_gender: Option<Gender>,
    #[serde(rename = "preferredCoatLength", default)]
    pub preferred_coat_length: Option<CoatLength>,
    #[serde(rename = "preferredHealthStatus", default)]
    pub preferred_health_status: Option<HealthStatus>,
    #[serde(rename = "targetAge", default)]
    pub target_age: Option<u32>,
    #[serde(rename = "ageTolerance", default)]
    pub age_tolerance: Option<f64>,
    #[serde(rename = "targetWeight", default)]
    pub target_weight: Option<u32>,
    #[serde(rename = "weightTolerance", default)]
    pub weight_tolerance: Option<f64>,
}

impl Profile {
    /// A fresh profile with every preference unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Current species preference, if any
    pub fn preferred_species(&self) -> Option<Species> {
        self.species_preference.value().copied()
    }

    /// Consecutive dislikes recorded against the species preference
    pub fn species_dislike_count(&self) -> u32 {
        self.species_preference.dislike_count()
    }

    /// Current breed preference, if any
    pub fn preferred_breed(&self) -> Option<&str> {
        self.breed_preference.value().map(String::as_str)
    }

    /// Consecutive dislikes recorded against the breed preference
    pub fn breed_dislike_count(&self) -> u32 {
        self.breed_preference.dislike_count()
    }
}

/// Per-factor contributions behind an affinity score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub species: f64,
    pub age: f64,
    pub weight: f64,
    pub gender: f64,
    pub breed: f64,
    #[serde(rename = "coatLength")]
    pub coat_length: f64,
    pub health: f64,
}

impl ScoreBreakdown {
    /// Sum of all factor contributions
    pub fn total(&self) -> f64 {
        self.species
            + self.age
            + self.weight
            + self.gender
            + self.breed
            + self.coat_length
            + self.health
    }
}

/// Scored ranking entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPet {
    pub pet: Pet,
    #[serde(rename = "affinityScore")]
    pub affinity_score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Scoring weights
///
/// Point values for each affinity factor. `species_explore_max` caps the
/// uniform random draw a species-mismatched pet receives instead of a fixed
/// contribution.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub species_match: f64,
    pub species_neutral: f64,
    pub species_explore_max: f64,
    pub age_max: f64,
    pub weight_max: f64,
    pub gender_match: f64,
    pub gender_neutral: f64,
    pub breed_match: f64,
    pub coat_length_match: f64,
    pub health_match: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            species_match: 50.0,
            species_neutral: 25.0,
            species_explore_max: 60.0,
            age_max: 30.0,
            weight_max: 20.0,
            gender_match: 10.0,
            gender_neutral: 5.0,
            breed_match: 20.0,
            coat_length_match: 10.0,
            health_match: 5.0,
        }
    }
}

/// Preference learning parameters
#[derive(Debug, Clone, Copy)]
pub struct LearningParams {
    /// Exponential smoothing coefficient for numeric targets
    pub learning_rate: f64,
    /// Ratings at or above this count as positive
    pub positive_threshold: f64,
    /// Consecutive matching dislikes before a preference is forgotten
    pub streak_threshold: u32,
}

impl Default for LearningParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            positive_threshold: 4.0,
            streak_threshold: 3,
        }
    }
}
