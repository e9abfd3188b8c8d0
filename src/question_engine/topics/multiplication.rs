use rand::Rng;
use crate::question_engine::{
    helpers::problem,
    models::{Difficulty, GeneratedProblem, Topic},
};

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty) -> GeneratedProblem {
    let (a, b) = match difficulty {
        Difficulty::Easy   => (rng.gen_range(1..=10i64), rng.gen_range(1..=10i64)),
        Difficulty::Medium => (rng.gen_range(10..=20), rng.gen_range(1..=10)),
        Difficulty::Hard   => (rng.gen_range(11..=30), rng.gen_range(11..=20)),
    };
    let product = a * b;

    let (question, solution) = match difficulty {
        Difficulty::Easy => (
            format!("What is {a} × {b}?"),
            format!("{a} × {b} = {product}"),
        ),
        Difficulty::Medium => (
            format!("Calculate {a} × {b}."),
            format!("{a} × {b} = {product}"),
        ),
        Difficulty::Hard => {
            // Split the second factor into tens and units.
            let tens = b / 10 * 10;
            let units = b % 10;
            (
                format!("Find the product of {a} and {b}."),
                format!(
                    "{a} × {b} = {a} × {tens} + {a} × {units}\n= {} + {}\n= {product}",
                    a * tens,
                    a * units
                ),
            )
        }
    };

    problem(Topic::Multiplication, difficulty, "product", question, product.to_string(), solution)
}
