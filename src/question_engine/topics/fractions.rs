use rand::Rng;
use crate::question_engine::{
    arithmetic::{lcm, Fraction},
    helpers::{problem, steps},
    models::{Difficulty, GeneratedProblem, Topic},
    rng::RngDrawExt,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    fn key(self) -> &'static str {
        match self {
            Operation::Add      => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide   => "divide",
        }
    }
}

/// `n/d` exactly as written, before any reduction.
fn raw(n: i64, d: i64) -> String {
    format!("{n}/{d}")
}

/// Appends `= <reduced>` when reduction changes the written form.
fn reduction_step(n: i64, d: i64) -> Option<String> {
    let reduced = Fraction::new(n, d);
    (reduced.numer() != n || reduced.denom() != d).then(|| format!("= {reduced}"))
}

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty) -> GeneratedProblem {
    match difficulty {
        Difficulty::Easy => easy(rng),
        Difficulty::Medium => {
            let a = rng.gen_range(1..=5i64);
            let b = rng.gen_range(2..=10i64);
            let c = rng.gen_range(1..=5i64);
            let op = rng.pick(&[Operation::Add, Operation::Subtract, Operation::Multiply]);
            // Add/subtract use unlike denominators so the LCD step is meaningful.
            let d = if op == Operation::Multiply {
                rng.gen_range(2..=10i64)
            } else {
                let d = rng.gen_range(2..=9i64);
                if d >= b { d + 1 } else { d }
            };
            binary(difficulty, op, a, b, c, d)
        }
        Difficulty::Hard => {
            let a = rng.gen_range(1..=12i64);
            let b = rng.gen_range(2..=20i64);
            let c = rng.gen_range(1..=12i64);
            let d = rng.gen_range(2..=20i64);
            let op = rng.pick(&[
                Operation::Add, Operation::Subtract, Operation::Multiply, Operation::Divide,
            ]);
            binary(difficulty, op, a, b, c, d)
        }
    }
}

fn easy<R: Rng>(rng: &mut R) -> GeneratedProblem {
    let a = rng.gen_range(1..=5i64);
    let b = rng.gen_range(a + 1..=10);
    let c = rng.gen_range(1..=5i64);

    if rng.coin() {
        let sum = a + c;
        let mut lines = vec![format!("{} + {} = {}", raw(a, b), raw(c, b), raw(sum, b))];
        lines.extend(reduction_step(sum, b));
        problem(
            Topic::Fractions, Difficulty::Easy, "same_denominator_add",
            format!("Add the fractions: {} + {}", raw(a, b), raw(c, b)),
            Fraction::new(sum, b).to_string(),
            steps(&lines),
        )
    } else {
        let (n, d) = (a * 2, b * 2);
        let reduced = Fraction::new(n, d);
        let g = n / reduced.numer();
        problem(
            Topic::Fractions, Difficulty::Easy, "simplify",
            format!("What is the simplified form of {}?", raw(n, d)),
            reduced.to_string(),
            steps(&[
                format!("The greatest common divisor of {n} and {d} is {g}."),
                format!("{} = ({n} ÷ {g})/({d} ÷ {g}) = {reduced}", raw(n, d)),
            ]),
        )
    }
}

fn binary(difficulty: Difficulty, op: Operation, a: i64, b: i64, c: i64, d: i64) -> GeneratedProblem {
    let (lhs, rhs) = (raw(a, b), raw(c, d));
    let (question, result_n, result_d, mut lines) = match op {
        Operation::Add | Operation::Subtract => {
            let lcd = lcm(b, d);
            let a_new = a * (lcd / b);
            let c_new = c * (lcd / d);
            let (verb, sym, result) = if op == Operation::Add {
                ("Add", "+", a_new + c_new)
            } else {
                ("Subtract", "-", a_new - c_new)
            };
            (
                format!("{verb} the fractions: {lhs} {sym} {rhs}"),
                result,
                lcd,
                vec![
                    format!("The least common denominator of {b} and {d} is {lcd}."),
                    format!("{lhs} = {}, {rhs} = {}", raw(a_new, lcd), raw(c_new, lcd)),
                    format!(
                        "{lhs} {sym} {rhs} = {} {sym} {} = {}",
                        raw(a_new, lcd), raw(c_new, lcd), raw(result, lcd)
                    ),
                ],
            )
        }
        Operation::Multiply => (
            format!("Multiply the fractions: {lhs} × {rhs}"),
            a * c,
            b * d,
            vec![format!("{lhs} × {rhs} = ({a} × {c})/({b} × {d}) = {}", raw(a * c, b * d))],
        ),
        Operation::Divide => (
            format!("Divide the fractions: {lhs} ÷ {rhs}"),
            a * d,
            b * c,
            vec![
                format!("Dividing by {rhs} is multiplying by its reciprocal {}.", raw(d, c)),
                format!("{lhs} ÷ {rhs} = {lhs} × {} = {}", raw(d, c), raw(a * d, b * c)),
            ],
        ),
    };
    lines.extend(reduction_step(result_n, result_d));

    problem(
        Topic::Fractions, difficulty, op.key(),
        question,
        Fraction::new(result_n, result_d).to_string(),
        steps(&lines),
    )
}
