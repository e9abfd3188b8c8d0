use rand::Rng;
use crate::question_engine::{
    helpers::problem,
    models::{Difficulty, GeneratedProblem, Topic},
};

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty) -> GeneratedProblem {
    // Dividend is built as divisor × quotient so the division is always exact.
    let (b, q) = match difficulty {
        Difficulty::Easy   => (rng.gen_range(1..=10i64), rng.gen_range(1..=10i64)),
        Difficulty::Medium => (rng.gen_range(2..=12), rng.gen_range(5..=15)),
        Difficulty::Hard   => (rng.gen_range(5..=20), rng.gen_range(10..=30)),
    };
    let a = b * q;

    let question = match difficulty {
        Difficulty::Easy   => format!("What is {a} ÷ {b}?"),
        Difficulty::Medium => format!("Calculate {a} ÷ {b}."),
        Difficulty::Hard   => format!("Divide {a} by {b}."),
    };
    let solution = format!("{a} ÷ {b} = {q}\nCheck: {b} × {q} = {a}");

    problem(Topic::Division, difficulty, "quotient", question, q.to_string(), solution)
}
