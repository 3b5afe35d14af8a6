// Core algorithm exports
pub mod learner;
pub mod ranker;
pub mod scoring;

pub use learner::PreferenceLearner;
pub use ranker::Ranker;
pub use scoring::calculate_affinity_score;
