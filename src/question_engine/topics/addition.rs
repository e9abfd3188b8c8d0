use rand::Rng;
use crate::question_engine::{
    helpers::problem,
    models::{Difficulty, GeneratedProblem, Topic},
};

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty) -> GeneratedProblem {
    match difficulty {
        Difficulty::Easy => {
            let a = rng.gen_range(1..=20i64);
            let b = rng.gen_range(1..=20i64);
            let sum = a + b;
            problem(
                Topic::Addition, difficulty, "two_terms",
                format!("What is {a} + {b}?"),
                sum.to_string(),
                format!("{a} + {b} = {sum}"),
            )
        }
        Difficulty::Medium => {
            let a = rng.gen_range(10..=100i64);
            let b = rng.gen_range(10..=100i64);
            let sum = a + b;
            problem(
                Topic::Addition, difficulty, "two_terms",
                format!("Calculate {a} + {b}."),
                sum.to_string(),
                format!("{a} + {b} = {sum}"),
            )
        }
        Difficulty::Hard => {
            let a = rng.gen_range(100..=1000i64);
            let b = rng.gen_range(100..=1000i64);
            let c = rng.gen_range(10..=100i64);
            let sum = a + b + c;
            problem(
                Topic::Addition, difficulty, "three_terms",
                format!("Find the sum of {a}, {b}, and {c}."),
                sum.to_string(),
                format!("{a} + {b} = {}\n{} + {c} = {sum}", a + b, a + b),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question_engine::rng::seeded;

    #[test]
    fn answer_matches_question_operands() {
        for seed in 0..50 {
            let p = generate(&mut seeded(seed), Difficulty::Easy);
            let nums: Vec<i64> = p.question
                .trim_start_matches("What is ")
                .trim_end_matches('?')
                .split(" + ")
                .map(|s| s.parse().unwrap())
                .collect();
            assert_eq!(p.answer, (nums[0] + nums[1]).to_string());
        }
    }

    #[test]
    fn hard_has_three_addends() {
        let p = generate(&mut seeded(3), Difficulty::Hard);
        assert_eq!(p.variant, "addition:three_terms");
        assert!(p.question.starts_with("Find the sum of"));
        assert_eq!(p.solution.lines().count(), 2);
    }
}
