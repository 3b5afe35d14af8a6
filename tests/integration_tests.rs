// Integration tests for PawMatch Algo
//
// Drives the full feedback loop: rank a catalog, rate what was shown, and
// check the next ranking reflects the evolved profile.

use pawmatch_algo::{
    Gender, Pet, PreferenceLearner, Profile, RankedPet, Ranker, Species,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn create_pet(id: i64, species: Species, breed: &str, age: u32, weight: u32) -> Pet {
    Pet {
        id,
        name: format!("Pet {}", id),
        species,
        breed: Some(breed.to_string()),
        gender: if id % 2 == 0 { Gender::Female } else { Gender::Male },
        age,
        weight,
        coat_length: None,
        health_status: None,
    }
}

fn catalog() -> Vec<Pet> {
    vec![
        create_pet(1, Species::Dog, "Beagle", 3, 25),
        create_pet(2, Species::Dog, "Labrador", 5, 60),
        create_pet(3, Species::Cat, "Siamese", 2, 8),
        create_pet(4, Species::Cat, "Maine Coon", 6, 15),
        create_pet(5, Species::Dog, "Beagle", 8, 28),
        create_pet(6, Species::Cat, "Siamese", 4, 9),
    ]
}

#[test]
fn test_rating_a_pet_reshapes_the_next_ranking() {
    let ranker = Ranker::with_default_weights();
    let learner = PreferenceLearner::with_default_params();

    // a fresh profile ranks everything on neutral bonuses alone
    let profile = Profile::new();
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let first: Vec<RankedPet> = ranker.rank_with(&profile, catalog(), &mut rng);
    assert_eq!(first.len(), 6);

    // the adopter loves the Siamese cat
    let liked = first.iter().find(|r| r.pet.id == 3).unwrap().pet.clone();
    let profile = learner.apply_rating(&profile, &liked, 5.0);

    assert_eq!(profile.preferred_species(), Some(Species::Cat));
    assert_eq!(profile.preferred_breed(), Some("Siamese"));
    assert_eq!(profile.target_age, Some(2));
    assert_eq!(profile.target_weight, Some(8));

    // cats now outrank dogs; the matching breed leads
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let second = ranker.rank_with(&profile, catalog(), &mut rng);

    assert_eq!(second[0].pet.id, 3);
    assert_eq!(second[0].breakdown.species, 50.0);
    assert_eq!(second[0].breakdown.breed, 20.0);
}

#[test]
fn test_dislike_streak_reopens_the_catalog() {
    let learner = PreferenceLearner::with_default_params();

    let mut profile = Profile::new();
    let beagle = create_pet(1, Species::Dog, "Beagle", 3, 25);
    profile = learner.apply_rating(&profile, &beagle, 5.0);
    assert_eq!(profile.preferred_species(), Some(Species::Dog));

    // three straight dog dislikes forget the species preference
    for id in 10..13 {
        let dog = create_pet(id, Species::Dog, "Labrador", 4, 50);
        profile = learner.apply_rating(&profile, &dog, 2.0);
    }

    assert_eq!(profile.preferred_species(), None);
    assert_eq!(profile.species_dislike_count(), 0);

    // with the preference gone, every species scores the neutral bonus again
    let ranker = Ranker::with_default_weights();
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let ranked = ranker.rank_with(&profile, catalog(), &mut rng);
    for entry in &ranked {
        assert_eq!(entry.breakdown.species, 25.0);
    }
}

#[test]
fn test_interrupted_streak_keeps_the_preference() {
    let learner = PreferenceLearner::with_default_params();

    let mut profile = Profile::new();
    profile = learner.apply_rating(&profile, &create_pet(1, Species::Dog, "Beagle", 3, 25), 5.0);

    profile = learner.apply_rating(&profile, &create_pet(2, Species::Dog, "Labrador", 4, 50), 1.0);
    profile = learner.apply_rating(&profile, &create_pet(3, Species::Cat, "Siamese", 2, 8), 1.0);
    profile = learner.apply_rating(&profile, &create_pet(4, Species::Dog, "Labrador", 4, 50), 1.0);
    profile = learner.apply_rating(&profile, &create_pet(5, Species::Dog, "Labrador", 4, 50), 1.0);

    // the cat dislike reset the streak, so four dog dislikes split 1 + 2
    // never reach the threshold of three
    assert_eq!(profile.preferred_species(), Some(Species::Dog));
    assert_eq!(profile.species_dislike_count(), 2);
}

#[test]
fn test_repeated_positive_ratings_pull_targets_toward_the_catalog() {
    let learner = PreferenceLearner::with_default_params();
    let favourite = create_pet(3, Species::Cat, "Siamese", 2, 8);

    let mut profile = Profile::new();
    profile.target_age = Some(12);
    profile.target_weight = Some(70);

    for _ in 0..60 {
        profile = learner.apply_rating(&profile, &favourite, 5.0);
    }

    // smoothing moves 10% of the remaining distance each step and integer
    // rounding pins it once within five of the pet's values
    let age = profile.target_age.unwrap() as i64;
    let weight = profile.target_weight.unwrap() as i64;
    assert!((age - 2).abs() <= 5, "age target stalled at {}", age);
    assert!((weight - 8).abs() <= 5, "weight target stalled at {}", weight);
}

#[test]
fn test_mismatched_species_can_still_surface_on_top() {
    // exploration keeps disliked species in play: with only species points in
    // the running, a dog can out-draw the flat neutral score of nothing else
    let ranker = Ranker::with_default_weights();
    let learner = PreferenceLearner::with_default_params();

    let profile = learner.apply_rating(
        &Profile::new(),
        &create_pet(3, Species::Cat, "Siamese", 2, 8),
        5.0,
    );

    let dog = create_pet(1, Species::Dog, "Beagle", 3, 25);
    let mut led_once = false;
    for seed in 0..200 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let ranked = ranker.rank_with(
            &profile,
            vec![dog.clone(), create_pet(7, Species::Cat, "Persian", 9, 12)],
            &mut rng,
        );
        if ranked[0].pet.id == 1 {
            led_once = true;
            break;
        }
    }

    // the cat scores 50 + 0 (age unset tolerance) + gender, the dog draws up
    // to 60; across 200 seeds the dog leads at least once
    assert!(led_once, "exploration never ranked the disliked species first");
}

#[test]
fn test_rank_returns_every_candidate_exactly_once() {
    let ranker = Ranker::with_default_weights();
    let mut rng = ChaCha8Rng::seed_from_u64(23);
    let ranked = ranker.rank_with(&Profile::new(), catalog(), &mut rng);

    let mut ids: Vec<i64> = ranked.iter().map(|r| r.pet.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}
