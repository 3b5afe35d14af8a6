use rand::Rng;

use crate::core::scoring::calculate_affinity_score;
use crate::models::{Pet, Profile, RankedPet, ScoringWeights};

/// Ranks candidate pets for an adopter profile
///
/// Scores every candidate and orders them strictly descending by affinity.
/// The sort is stable, so pets with equal scores keep the caller's input
/// order. Filtering (already-seen pets, availability) and pagination are the
/// caller's responsibility; every candidate passed in comes back out.
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: ScoringWeights,
}

impl Ranker {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Rank candidates using the thread-local generator
    pub fn rank(&self, profile: &Profile, candidates: Vec<Pet>) -> Vec<RankedPet> {
        self.rank_with(profile, candidates, &mut rand::thread_rng())
    }

    /// Rank candidates drawing exploration scores from `rng`
    ///
    /// Species-mismatched candidates get a fresh draw on every call, so
    /// repeated rankings of the same candidate set may place them
    /// differently. Fix the generator to make an ordering reproducible.
    pub fn rank_with<R: Rng + ?Sized>(
        &self,
        profile: &Profile,
        candidates: Vec<Pet>,
        rng: &mut R,
    ) -> Vec<RankedPet> {
        tracing::debug!("Ranking {} candidates", candidates.len());

        let mut ranked: Vec<RankedPet> = candidates
            .into_iter()
            .map(|pet| {
                let (affinity_score, breakdown) =
                    calculate_affinity_score(&pet, profile, &self.weights, rng);

                RankedPet {
                    pet,
                    affinity_score,
                    breakdown,
                }
            })
            .collect();

        // Sort by score (descending); stability preserves input order on ties
        ranked.sort_by(|a, b| {
            b.affinity_score
                .partial_cmp(&a.affinity_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        ranked
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
