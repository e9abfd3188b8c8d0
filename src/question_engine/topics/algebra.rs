use rand::Rng;
use tracing::debug;
use crate::question_engine::{
    arithmetic::{format_rounded, join_values, paren, perfect_sqrt, polynomial, Fraction},
    helpers::{problem, steps},
    models::{Difficulty, GeneratedProblem, Topic},
    rng::RngDrawExt,
};

/// Draws allowed before a quadratic is forced to have real roots.
pub const MAX_QUADRATIC_DRAWS: usize = 64;

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty) -> GeneratedProblem {
    match difficulty {
        Difficulty::Easy => {
            let a = rng.gen_range(1..=5i64);
            let b = rng.gen_range(1..=10i64);
            let c = rng.gen_range(1..=20i64);
            one_step_linear(a, b, c)
        }
        Difficulty::Medium => {
            if rng.coin() {
                let a = rng.gen_range(2..=8i64);
                let b = rng.gen_range(1..=15i64);
                let c = rng.gen_range(1..a);
                let d = rng.gen_range(1..=20i64);
                two_sided_linear(a, b, c, d)
            } else {
                let nonzero: Vec<i64> = (-5..=5).filter(|&v| v != 0).collect();
                let r1 = rng.pick(&nonzero);
                let rest: Vec<i64> = nonzero.into_iter().filter(|&v| v != r1).collect();
                let r2 = rng.pick(&rest);
                factorable_quadratic(r1, r2)
            }
        }
        Difficulty::Hard => match rng.gen_range(0..3) {
            0 => {
                let q = first_real_quadratic(|| Quadratic {
                    a: rng.gen_range(1..=5),
                    b: rng.gen_range(-10..=10),
                    c: rng.gen_range(-10..=10),
                });
                general_quadratic(q)
            }
            1 => {
                let x = rng.gen_range(-5..=5i64);
                let y = rng.gen_range(-5..=5i64);
                let a1 = rng.gen_range(1..=5i64);
                let b1 = rng.gen_range(1..=5i64);
                let a2 = {
                    let v = rng.gen_range(1..=4i64);
                    if v >= a1 { v + 1 } else { v }
                };
                // Any b2 except the one making the second equation a multiple of the first.
                let choices: Vec<i64> = (1..=5).filter(|&v| v * a1 != b1 * a2).collect();
                let b2 = rng.pick(&choices);
                linear_system(x, y, (a1, b1), (a2, b2))
            }
            _ => {
                let older = rng.gen_range(20..=40i64);
                let younger = rng.gen_range(5..=15i64);
                let years = rng.gen_range(5..=10i64);
                age_problem(older, younger, years)
            }
        },
    }
}

fn solve_step(coef: i64, rhs: i64) -> (Fraction, String) {
    let x = Fraction::new(rhs, coef);
    let line = if coef == 1 {
        format!("x = {rhs}")
    } else {
        format!("x = {rhs} ÷ {coef} = {x}")
    };
    (x, line)
}

/// `ax + b = c`
fn one_step_linear(a: i64, b: i64, c: i64) -> GeneratedProblem {
    let lhs = polynomial(&[(a, "x"), (b, "")]);
    let ax = polynomial(&[(a, "x")]);
    let equation = format!("{lhs} = {c}");
    let (x, last) = solve_step(a, c - b);
    problem(
        Topic::Algebra, Difficulty::Easy, "linear",
        format!("Solve for x: {equation}"),
        x.to_string(),
        steps(&[
            equation,
            format!("{ax} = {c} - {b}"),
            format!("{ax} = {}", c - b),
            last,
        ]),
    )
}

/// `ax + b = cx + d` with a > c.
fn two_sided_linear(a: i64, b: i64, c: i64, d: i64) -> GeneratedProblem {
    let equation = format!(
        "{} = {}",
        polynomial(&[(a, "x"), (b, "")]),
        polynomial(&[(c, "x"), (d, "")])
    );
    let k = polynomial(&[(a - c, "x")]);
    let (x, last) = solve_step(a - c, d - b);
    problem(
        Topic::Algebra, Difficulty::Medium, "linear_both_sides",
        format!("Solve for x: {equation}"),
        x.to_string(),
        steps(&[
            equation,
            format!("{} - {} = {d} - {b}", polynomial(&[(a, "x")]), polynomial(&[(c, "x")])),
            format!("{k} = {}", d - b),
            last,
        ]),
    )
}

fn factor(root: i64) -> String {
    format!("({})", polynomial(&[(1, "x"), (-root, "")]))
}

/// Monic quadratic with distinct integer roots `r1`, `r2`.
fn factorable_quadratic(r1: i64, r2: i64) -> GeneratedProblem {
    let equation = format!("{} = 0", polynomial(&[(1, "x²"), (-(r1 + r2), "x"), (r1 * r2, "")]));
    let (lo, hi) = (r1.min(r2), r1.max(r2));
    problem(
        Topic::Algebra, Difficulty::Medium, "factor_quadratic",
        format!("Find the roots of the quadratic equation: {equation}"),
        join_values(&[lo.to_string(), hi.to_string()]),
        steps(&[
            equation,
            format!("Look for two numbers with product {} and sum {}: {r1} and {r2}", r1 * r2, r1 + r2),
            format!("{}{} = 0", factor(r1), factor(r2)),
            format!("x = {lo} or x = {hi}"),
        ]),
    )
}

/// `ax² + bx + c = 0` with integer coefficients, `a > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quadratic {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

impl Quadratic {
    pub fn discriminant(self) -> i64 {
        self.b * self.b - 4 * self.a * self.c
    }
}

/// Keep drawing until the discriminant is non-negative.
///
/// After [`MAX_QUADRATIC_DRAWS`] failures the last draw is made real by
/// flipping `c` to be non-positive (with `a > 0` that forces `b² - 4ac >= 0`).
pub fn first_real_quadratic<F: FnMut() -> Quadratic>(mut draw: F) -> Quadratic {
    let mut last = draw();
    for attempt in 1..MAX_QUADRATIC_DRAWS {
        if last.discriminant() >= 0 {
            return last;
        }
        debug!(attempt, discriminant = last.discriminant(), "discarding quadratic with complex roots");
        last = draw();
    }
    if last.discriminant() >= 0 {
        last
    } else {
        Quadratic { c: -last.c.abs(), ..last }
    }
}

fn general_quadratic(q: Quadratic) -> GeneratedProblem {
    let Quadratic { a, b, c } = q;
    let disc = q.discriminant();
    debug_assert!(disc >= 0);
    let equation = format!("{} = 0", polynomial(&[(a, "x²"), (b, "x"), (c, "")]));

    let mut lines = vec![
        equation.clone(),
        format!("a = {a}, b = {b}, c = {c}"),
        format!("Discriminant = b² - 4ac = {}² - 4 × {a} × {} = {disc}", paren(b), paren(c)),
    ];

    let (variant, answer) = match perfect_sqrt(disc) {
        Some(s) => {
            let lo = Fraction::new(-b - s, 2 * a);
            let hi = Fraction::new(-b + s, 2 * a);
            lines.push(format!("√{disc} = {s}"));
            lines.push(format!("x = ({} ± {s}) / {}", -b, 2 * a));
            if s == 0 {
                lines.push(format!("x = {lo} (double root)"));
                ("quadratic_rational", lo.to_string())
            } else {
                lines.push(format!("x₁ = ({} - {s}) / {} = {lo}", -b, 2 * a));
                lines.push(format!("x₂ = ({} + {s}) / {} = {hi}", -b, 2 * a));
                ("quadratic_rational", join_values(&[lo.to_string(), hi.to_string()]))
            }
        }
        None => {
            let root = (disc as f64).sqrt();
            let lo = (-b as f64 - root) / (2 * a) as f64;
            let hi = (-b as f64 + root) / (2 * a) as f64;
            let (lo, hi) = (format_rounded(lo, 2), format_rounded(hi, 2));
            lines.push(format!("x = ({} ± √{disc}) / {}", -b, 2 * a));
            lines.push(format!("√{disc} ≈ {}", format_rounded(root, 4)));
            lines.push(format!("x₁ ≈ {lo}"));
            lines.push(format!("x₂ ≈ {hi}"));
            ("quadratic_irrational", join_values(&[lo, hi]))
        }
    };

    problem(
        Topic::Algebra, Difficulty::Hard, variant,
        format!("Solve the quadratic equation: {equation} (Round irrational roots to two decimal places)"),
        answer,
        steps(&lines),
    )
}

fn linear_system(x: i64, y: i64, (a1, b1): (i64, i64), (a2, b2): (i64, i64)) -> GeneratedProblem {
    let c1 = a1 * x + b1 * y;
    let c2 = a2 * x + b2 * y;
    let eq1 = format!("{} = {c1}", polynomial(&[(a1, "x"), (b1, "y")]));
    let eq2 = format!("{} = {c2}", polynomial(&[(a2, "x"), (b2, "y")]));
    let y_coef = b1 * a2 - b2 * a1;
    let y_rhs = c1 * a2 - c2 * a1;

    problem(
        Topic::Algebra, Difficulty::Hard, "linear_system",
        format!("Solve the system of equations:\n{eq1}\n{eq2}"),
        format!("x = {x}, y = {y}"),
        steps(&[
            format!("Multiply the first equation by {a2} and the second by {a1}:"),
            format!("{} = {}", polynomial(&[(a1 * a2, "x"), (b1 * a2, "y")]), c1 * a2),
            format!("{} = {}", polynomial(&[(a1 * a2, "x"), (b2 * a1, "y")]), c2 * a1),
            format!("Subtract to eliminate x: {} = {y_rhs}", polynomial(&[(y_coef, "y")])),
            format!("y = {y_rhs} ÷ {} = {y}", paren(y_coef)),
            format!(
                "Substitute into the first equation: {} = {c1} - {} = {}",
                polynomial(&[(a1, "x")]),
                paren(b1 * y),
                c1 - b1 * y
            ),
            solve_step(a1, c1 - b1 * y).1,
        ]),
    )
}

fn age_problem(older: i64, younger: i64, years: i64) -> GeneratedProblem {
    let diff = older - younger;
    let sum_later = older + younger + 2 * years;
    let sum_now = sum_later - 2 * years;
    problem(
        Topic::Algebra, Difficulty::Hard, "age_word_problem",
        format!(
            "One person is {diff} years older than another. In {years} years, the sum of \
             their ages will be {sum_later}. Find their current ages (youngest first)."
        ),
        join_values(&[younger.to_string(), older.to_string()]),
        steps(&[
            "Let x be the age of the older person and y the age of the younger person.".to_string(),
            format!("x - y = {diff}"),
            format!("(x + {years}) + (y + {years}) = {sum_later}, so x + y = {sum_now}"),
            format!("Adding the equations: 2x = {}, so x = {older}", sum_now + diff),
            format!("y = {older} - {diff} = {younger}"),
        ]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question_engine::rng::seeded;

    #[test]
    fn negative_discriminant_is_redrawn() {
        // First draw: x² + 2x + 2 (discriminant -4), second: x² - 3x + 2.
        let mut draws = vec![
            Quadratic { a: 1, b: -3, c: 2 },
            Quadratic { a: 1, b: 2, c: 2 },
        ];
        let q = first_real_quadratic(|| draws.pop().unwrap());
        assert_eq!(q, Quadratic { a: 1, b: -3, c: 2 });
        let p = general_quadratic(q);
        assert_eq!(p.answer, "1, 2");
    }

    #[test]
    fn retry_is_bounded() {
        let mut calls = 0;
        let q = first_real_quadratic(|| {
            calls += 1;
            Quadratic { a: 1, b: 0, c: 5 }
        });
        assert_eq!(calls, MAX_QUADRATIC_DRAWS);
        assert!(q.discriminant() >= 0);
    }

    #[test]
    fn hard_quadratics_always_have_real_roots() {
        for seed in 0..500 {
            let p = generate(&mut seeded(seed), Difficulty::Hard);
            if p.variant.starts_with("algebra:quadratic") {
                assert!(!p.answer.contains('i'), "{p:?}");
                let disc = p.solution.lines().nth(2).unwrap();
                let value: i64 = disc.rsplit(' ').next().unwrap().parse().unwrap();
                assert!(value >= 0);
            }
        }
    }

    #[test]
    fn rational_roots_are_ascending_fractions() {
        // 2x² + x - 1 = 0 → x = -1, 1/2
        let p = general_quadratic(Quadratic { a: 2, b: 1, c: -1 });
        assert_eq!(p.answer, "-1, 1/2");
        assert_eq!(p.variant, "algebra:quadratic_rational");
    }

    #[test]
    fn irrational_roots_are_rounded() {
        // x² - 2 = 0 → ±1.41
        let p = general_quadratic(Quadratic { a: 1, b: 0, c: -2 });
        assert_eq!(p.answer, "-1.41, 1.41");
        assert_eq!(p.variant, "algebra:quadratic_irrational");
    }

    #[test]
    fn factorable_quadratic_renders_signs() {
        let p = factorable_quadratic(3, -2);
        assert_eq!(p.question, "Find the roots of the quadratic equation: x² - x - 6 = 0");
        assert_eq!(p.answer, "-2, 3");
        assert!(p.solution.contains("(x - 3)(x + 2) = 0"));
    }

    #[test]
    fn linear_answers_are_exact_fractions() {
        assert_eq!(one_step_linear(3, 2, 11).answer, "3");
        assert_eq!(one_step_linear(3, 1, 8).answer, "7/3");
        assert_eq!(one_step_linear(2, 9, 4).answer, "-5/2");
        assert_eq!(two_sided_linear(5, 3, 2, 9).answer, "2");
    }

    #[test]
    fn system_solution_satisfies_both_equations() {
        for seed in 0..300 {
            let p = generate(&mut seeded(seed), Difficulty::Hard);
            if p.variant != "algebra:linear_system" {
                continue;
            }
            let (xs, ys) = p.answer.split_once(", ").unwrap();
            let x: i64 = xs.trim_start_matches("x = ").parse().unwrap();
            let y: i64 = ys.trim_start_matches("y = ").parse().unwrap();
            assert!(p.solution.ends_with(&format!("= {x}")));
            assert!(p.solution.contains(&format!("= {y}\n")));
        }
    }

    #[test]
    fn ages_are_listed_youngest_first() {
        let p = age_problem(34, 9, 6);
        assert_eq!(p.answer, "9, 34");
        assert!(p.question.contains("25 years older"));
        assert!(p.question.contains("will be 55"));
    }
}
