use crate::models::{LearningParams, Pet, Preference, Profile};

/// Evolves an adopter profile from rating events
///
/// Every rating nudges the numeric targets toward the rated pet via
/// exponential smoothing, liked or not. A positive rating (at or above the
/// threshold) adopts all five of the pet's categorical attributes outright;
/// a negative rating only erodes the species and breed preferences, and only
/// after a streak of consecutive dislikes of the currently preferred value.
/// Gender, coat and health preferences are deliberately one-way.
#[derive(Debug, Clone)]
pub struct PreferenceLearner {
    params: LearningParams,
}

impl PreferenceLearner {
    pub fn new(params: LearningParams) -> Self {
        Self { params }
    }

    pub fn with_default_params() -> Self {
        Self {
            params: LearningParams::default(),
        }
    }

    /// Apply one rating event, returning the updated profile
    ///
    /// The input profile is untouched. Persisting the returned value — and
    /// serializing concurrent ratings for the same adopter — is the caller's
    /// job; rating order changes the outcome.
    pub fn apply_rating(&self, profile: &Profile, pet: &Pet, rating: f64) -> Profile {
        let mut updated = profile.clone();

        updated.target_age = Some(self.smooth(profile.target_age, pet.age));
        updated.target_weight = Some(self.smooth(profile.target_weight, pet.weight));

        if rating >= self.params.positive_threshold {
            tracing::debug!("Positive rating {} for pet {}, adopting attributes", rating, pet.id);

            updated.species_preference = Preference::on_positive(Some(pet.species));
            updated.breed_preference = Preference::on_positive(pet.breed.clone());
            updated.preferred_gender = Some(pet.gender);
            updated.preferred_coat_length = pet.coat_length;
            updated.preferred_health_status = pet.health_status;
        } else {
            let species_matches = profile
                .preferred_species()
                .map_or(false, |preferred| preferred == pet.species);

            let breed_matches = match (profile.preferred_breed(), &pet.breed) {
                (Some(preferred), Some(breed)) => breed.eq_ignore_ascii_case(preferred),
                _ => false,
            };

            let threshold = self.params.streak_threshold;
            updated.species_preference =
                profile.species_preference.on_negative(species_matches, threshold);
            updated.breed_preference = profile.breed_preference.on_negative(breed_matches, threshold);

            if updated.species_preference.is_unset() && !profile.species_preference.is_unset() {
                tracing::debug!("Species preference forgotten after {} dislikes", threshold);
            }
            if updated.breed_preference.is_unset() && !profile.breed_preference.is_unset() {
                tracing::debug!("Breed preference forgotten after {} dislikes", threshold);
            }
        }

        updated
    }

    /// Move a numeric target a fraction of the way toward the rated value
    ///
    /// An unset target adopts the value directly. The result is rounded to
    /// the nearest year/pound, matching how the targets are stored.
    fn smooth(&self, target: Option<u32>, value: u32) -> u32 {
        match target {
            Some(target) => {
                let alpha = self.params.learning_rate;
                ((1.0 - alpha) * target as f64 + alpha * value as f64).round() as u32
            }
            None => value,
        }
    }
}

impl Default for PreferenceLearner {
    fn default() -> Self {
        Self::with_default_params()
    }
}
