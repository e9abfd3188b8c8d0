use rand::Rng;
use crate::question_engine::{
    helpers::problem,
    models::{Difficulty, GeneratedProblem, Topic},
};

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty) -> GeneratedProblem {
    // Minuend is drawn from [subtrahend, max] so the difference is never negative.
    let (b_range, a_max) = match difficulty {
        Difficulty::Easy   => (1..=10i64, 20),
        Difficulty::Medium => (10..=50, 100),
        Difficulty::Hard   => (100..=500, 1000),
    };
    let b = rng.gen_range(b_range);
    let a = rng.gen_range(b..=a_max);
    let diff = a - b;

    let question = match difficulty {
        Difficulty::Easy   => format!("What is {a} - {b}?"),
        Difficulty::Medium => format!("Calculate {a} - {b}."),
        Difficulty::Hard   => format!("Subtract {b} from {a}."),
    };
    let solution = if difficulty == Difficulty::Hard {
        format!("Subtracting {b} from {a} means {a} - {b}.\n{a} - {b} = {diff}")
    } else {
        format!("{a} - {b} = {diff}")
    };

    problem(Topic::Subtraction, difficulty, "difference", question, diff.to_string(), solution)
}
