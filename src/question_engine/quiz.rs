//! Ad-hoc quizzes: generated in one pass, never stored.
//!
//! Unlike versioned tests, every question draws from one shared generator
//! and the result is shuffled so topics interleave.

use rand::seq::SliceRandom;

use crate::question_engine::{
    distributor::DistributionPlan,
    generator::generate_with_rng,
    models::{Difficulty, GeneratedProblem, Topic},
    rng,
};

/// `count` problems spread over `topics`; reproducible when `seed` is set.
pub fn generate_quiz(
    topics: &[Topic],
    difficulty: Difficulty,
    count: u32,
    seed: Option<u64>,
) -> Vec<GeneratedProblem> {
    let mut rng = match seed {
        Some(seed) => rng::seeded(seed),
        None       => rng::from_entropy(),
    };

    let mut problems: Vec<GeneratedProblem> = DistributionPlan::new(topics, count)
        .slots(difficulty)
        .iter()
        .map(|slot| generate_with_rng(slot.topic, difficulty, &mut rng))
        .collect();
    problems.shuffle(&mut rng);
    problems
}
