// Model exports
pub mod domain;
pub mod preference;

pub use domain::{
    CoatLength, Gender, HealthStatus, LearningParams, Pet, Profile, RankedPet, ScoreBreakdown,
    ScoringWeights, Species,
};
pub use preference::Preference;
