use rand::Rng;

use crate::models::{Gender, Pet, Profile, ScoreBreakdown, ScoringWeights};

/// Calculate an affinity score for a pet against an adopter profile
///
/// Scoring formula (default weights):
/// score = species_score +      # 50 match / 25 neutral / random [0,60) mismatch
///     age_score +              # up to 30, linear decay over the tolerance
///     weight_score +           # up to 20, linear decay over the tolerance
///     gender_score +           # 10 match / 5 neutral / 0 mismatch
///     breed_score +            # 20 on case-insensitive match
///     coat_length_score +      # 10 on match
///     health_score             # 5 on match
///
/// Every factor is non-negative and an absent pet attribute contributes 0,
/// so scoring is total over any pet. The species-mismatch draw is fresh on
/// every call; pass a seeded generator for reproducible scores.
pub fn calculate_affinity_score<R: Rng + ?Sized>(
    pet: &Pet,
    profile: &Profile,
    weights: &ScoringWeights,
    rng: &mut R,
) -> (f64, ScoreBreakdown) {
    let breakdown = ScoreBreakdown {
        species: calculate_species_score(pet, profile, weights, rng),
        age: calculate_proximity_score(
            pet.age,
            profile.target_age,
            profile.age_tolerance,
            weights.age_max,
        ),
        weight: calculate_proximity_score(
            pet.weight,
            profile.target_weight,
            profile.weight_tolerance,
            weights.weight_max,
        ),
        gender: calculate_gender_score(pet.gender, profile.preferred_gender, weights),
        breed: calculate_breed_score(pet, profile, weights.breed_match),
        coat_length: calculate_match_bonus(
            pet.coat_length,
            profile.preferred_coat_length,
            weights.coat_length_match,
        ),
        health: calculate_match_bonus(
            pet.health_status,
            profile.preferred_health_status,
            weights.health_match,
        ),
    };

    (breakdown.total(), breakdown)
}

/// Species factor: full points on a match, a neutral bonus when the profile
/// has no species preference, and a fresh uniform draw below the exploration
/// cap on a mismatch so a disliked species can still surface over time.
fn calculate_species_score<R: Rng + ?Sized>(
    pet: &Pet,
    profile: &Profile,
    weights: &ScoringWeights,
    rng: &mut R,
) -> f64 {
    match profile.preferred_species() {
        None => weights.species_neutral,
        Some(preferred) if preferred == pet.species => weights.species_match,
        Some(_) => {
            if weights.species_explore_max > 0.0 {
                rng.gen_range(0.0..weights.species_explore_max)
            } else {
                0.0
            }
        }
    }
}

/// Numeric proximity factor (0 to `max_points`)
///
/// Decays linearly with the distance from the target, hitting 0 once the
/// distance reaches the tolerance. Missing target or tolerance, or a
/// tolerance of 0, contributes nothing rather than dividing by zero.
#[inline]
fn calculate_proximity_score(
    value: u32,
    target: Option<u32>,
    tolerance: Option<f64>,
    max_points: f64,
) -> f64 {
    let (target, tolerance) = match (target, tolerance) {
        (Some(target), Some(tolerance)) => (target, tolerance),
        _ => return 0.0,
    };

    if tolerance <= 0.0 {
        return 0.0;
    }

    let diff = (value as f64 - target as f64).abs();
    (max_points - (diff / tolerance) * max_points).max(0.0)
}

/// Gender factor (match bonus, neutral bonus, or nothing)
#[inline]
fn calculate_gender_score(gender: Gender, preferred: Option<Gender>, weights: &ScoringWeights) -> f64 {
    match preferred {
        None => weights.gender_neutral,
        Some(preferred) if preferred == gender => weights.gender_match,
        Some(_) => 0.0,
    }
}

/// Breed factor: case-insensitive exact match only
///
/// An empty preferred breed counts as no preference, and a pet without a
/// recorded breed never matches.
#[inline]
fn calculate_breed_score(pet: &Pet, profile: &Profile, bonus: f64) -> f64 {
    let preferred = match profile.preferred_breed() {
        Some(breed) if !breed.is_empty() => breed,
        _ => return 0.0,
    };

    match &pet.breed {
        Some(breed) if breed.eq_ignore_ascii_case(preferred) => bonus,
        _ => 0.0,
    }
}

/// Flat bonus when a preferred categorical attribute matches the pet's
#[inline]
fn calculate_match_bonus<T: PartialEq>(attribute: Option<T>, preferred: Option<T>, bonus: f64) -> f64 {
    match (attribute, preferred) {
        (Some(attribute), Some(preferred)) if attribute == preferred => bonus,
        _ => 0.0,
    }
}
