//! Decimal arithmetic. Operands are drawn as integer tenths or hundredths so
//! every sum, difference and product is computed exactly before rounding.

use rand::Rng;
use crate::question_engine::{
    arithmetic::{format_decimal, format_scaled, Fraction},
    helpers::{problem, steps},
    models::{Difficulty, GeneratedProblem, Topic},
    rng::RngDrawExt,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

/// Decimal places used in answers for each tier.
pub fn answer_places(difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Easy => 1,
        Difficulty::Medium | Difficulty::Hard => 2,
    }
}

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty) -> GeneratedProblem {
    let ops: &[Op] = match difficulty {
        Difficulty::Easy   => &[Op::Add, Op::Sub],
        Difficulty::Medium => &[Op::Add, Op::Sub, Op::Mul],
        Difficulty::Hard   => &[Op::Add, Op::Sub, Op::Mul, Op::Div],
    };
    let op = rng.pick(ops);
    let places = answer_places(difficulty);
    let lead = if difficulty == Difficulty::Easy { "What is" } else { "Calculate" };
    let end = if difficulty == Difficulty::Easy { "?" } else { "." };

    match op {
        Op::Add | Op::Sub => {
            // (units per 1.0, operand range in those units)
            let (scale_places, range) = match difficulty {
                Difficulty::Easy   => (1, 1..=100i64),
                Difficulty::Medium => (2, 10..=2000),
                Difficulty::Hard   => (2, 1000..=10000),
            };
            let mut a = rng.gen_range(range.clone());
            let mut b = rng.gen_range(range);
            let (sym, key, result) = if op == Op::Add {
                ("+", "add", a + b)
            } else {
                if a < b {
                    std::mem::swap(&mut a, &mut b);
                }
                ("-", "subtract", a - b)
            };
            let (a_s, b_s) = (format_scaled(a, scale_places), format_scaled(b, scale_places));
            let answer = format_scaled(result, scale_places);
            problem(
                Topic::Decimals, difficulty, key,
                format!("{lead} {a_s} {sym} {b_s}{end}"),
                answer.clone(),
                steps(&[
                    format!("Line up the decimal points and {} digit by digit.", if op == Op::Add { "add" } else { "subtract" }),
                    format!("{a_s} {sym} {b_s} = {answer}"),
                ]),
            )
        }
        Op::Mul => {
            // Medium: tenths × tenths. Hard: hundredths × hundredths, rounded.
            let (factor_places, range) = match difficulty {
                Difficulty::Hard => (2, 10..=1000i64),
                _                => (1, 1..=100i64),
            };
            let a = rng.gen_range(range.clone());
            let b = rng.gen_range(range);
            let (a_s, b_s) = (format_scaled(a, factor_places), format_scaled(b, factor_places));
            let exact_places = factor_places * 2;
            let exact = format_scaled(a * b, exact_places);
            let answer = format_decimal(Fraction::new(a * b, 10i64.pow(exact_places)), places);
            let mut lines = vec![
                format!("Multiply ignoring the decimal points: {a} × {b} = {}", a * b),
                format!("The factors have {exact_places} decimal places in total, so {a_s} × {b_s} = {exact}"),
            ];
            if exact_places > places {
                lines.push(format!("Rounded to {places} decimal places: {answer}"));
            }
            problem(
                Topic::Decimals, difficulty, "multiply",
                format!("{lead} {a_s} × {b_s}{end}"),
                answer,
                steps(&lines),
            )
        }
        Op::Div => {
            // Dividend = divisor × quotient, both in tenths → dividend in hundredths.
            let b = rng.gen_range(5..=50i64);
            let q = rng.gen_range(10..=100i64);
            let a = b * q;
            let (a_s, b_s) = (format_scaled(a, 2), format_scaled(b, 1));
            let answer = format_decimal(Fraction::new(q, 10), places);
            problem(
                Topic::Decimals, difficulty, "divide",
                format!("{lead} {a_s} ÷ {b_s}{end}"),
                answer.clone(),
                steps(&[
                    format!("Multiply both numbers by 10 to make the divisor whole: {} ÷ {b}", format_scaled(a, 1)),
                    format!("{a_s} ÷ {b_s} = {answer}"),
                    format!("Check: {b_s} × {answer} = {a_s}"),
                ]),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question_engine::rng::seeded;

    fn decimal_places(s: &str) -> usize {
        s.split_once('.').map(|(_, frac)| frac.len()).unwrap_or(0)
    }

    #[test]
    fn answers_use_tier_place_count() {
        for difficulty in Difficulty::ALL {
            for seed in 0..200 {
                let p = generate(&mut seeded(seed), difficulty);
                assert_eq!(
                    decimal_places(&p.answer),
                    answer_places(difficulty) as usize,
                    "{} at {difficulty:?}", p.answer
                );
            }
        }
    }

    #[test]
    fn differences_are_never_negative() {
        for difficulty in Difficulty::ALL {
            for seed in 0..300 {
                let p = generate(&mut seeded(seed), difficulty);
                assert!(!p.answer.starts_with('-'), "{p:?}");
            }
        }
    }

    #[test]
    fn division_checks_out() {
        let mut seen = false;
        for seed in 0..200 {
            let p = generate(&mut seeded(seed), Difficulty::Hard);
            if p.variant != "decimals:divide" {
                continue;
            }
            seen = true;
            let expr = p.question.trim_start_matches("Calculate ").trim_end_matches('.');
            let (a, b) = expr.split_once(" ÷ ").unwrap();
            let a: f64 = a.parse().unwrap();
            let b: f64 = b.parse().unwrap();
            let q: f64 = p.answer.parse().unwrap();
            assert!((a / b - q).abs() < 1e-9, "{}", p.question);
        }
        assert!(seen);
    }
}
