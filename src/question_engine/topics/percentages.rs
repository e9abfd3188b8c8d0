use rand::Rng;
use crate::question_engine::{
    arithmetic::{format_exact, Fraction},
    helpers::{problem, steps},
    models::{Difficulty, GeneratedProblem, Topic},
    rng::RngDrawExt,
};

/// Integral results render as integers, everything else with two places.
const PLACES: u32 = 2;

fn render(value: Fraction) -> String {
    format_exact(value, PLACES)
}

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty) -> GeneratedProblem {
    match difficulty {
        Difficulty::Easy => {
            let percentage = rng.pick(&[10i64, 20, 25, 50, 75]);
            let number = rng.gen_range(10..=100i64) * 4;
            percent_of(percentage, number)
        }
        Difficulty::Medium => {
            if rng.coin() {
                let percentage = rng.pick(&[10i64, 20, 25, 40, 50, 60, 75]);
                // Whole must be a multiple of 100/gcd(p, 100) so the part is whole too.
                let step = Fraction::new(100, percentage).numer();
                let k = rng.gen_range((10 + step - 1) / step..=100 / step);
                what_percent(percentage, step * k)
            } else {
                let percentage = rng.pick(&[10i64, 20, 25, 30, 40, 50, 60, 75]);
                let part = rng.gen_range(10..=200i64);
                find_whole(percentage, part)
            }
        }
        Difficulty::Hard => {
            if rng.coin() {
                let original = rng.gen_range(50..=500i64);
                let percentage = rng.gen_range(5..=50i64);
                let increase = rng.coin();
                change(original, percentage, increase)
            } else {
                let original = rng.gen_range(100..=500i64);
                let up = rng.gen_range(10..=30i64);
                let down = rng.gen_range(10..=30i64);
                up_then_down(original, up, down)
            }
        }
    }
}

/// "What is p% of n?"
pub fn percent_of(percentage: i64, number: i64) -> GeneratedProblem {
    let value = Fraction::new(percentage * number, 100);
    problem(
        Topic::Percentages, Difficulty::Easy, "percent_of",
        format!("What is {percentage}% of {number}?"),
        render(value),
        steps(&[
            format!("{percentage}% means {percentage}/100."),
            format!(
                "{percentage}% of {number} = {percentage}/100 × {number} = {}/100 = {}",
                percentage * number,
                render(value)
            ),
        ]),
    )
}

fn what_percent(percentage: i64, whole: i64) -> GeneratedProblem {
    let part = whole * percentage / 100;
    problem(
        Topic::Percentages, Difficulty::Medium, "what_percent",
        format!("{part} is what percentage of {whole}?"),
        percentage.to_string(),
        steps(&[
            "Percentage = part ÷ whole × 100".to_string(),
            format!(
                "{part} ÷ {whole} × 100 = {} × 100 = {percentage}%",
                render(Fraction::new(part, whole))
            ),
        ]),
    )
}

fn find_whole(percentage: i64, part: i64) -> GeneratedProblem {
    let whole = Fraction::new(part * 100, percentage);
    problem(
        Topic::Percentages, Difficulty::Medium, "find_whole",
        format!("If {percentage}% of a number is {part}, what is the original number?"),
        render(whole),
        steps(&[
            "Let x be the original number.".to_string(),
            format!("{percentage}% of x = {part}"),
            format!("{percentage}/100 × x = {part}"),
            format!("x = {part} × 100/{percentage} = {}/{percentage} = {}", part * 100, render(whole)),
        ]),
    )
}

fn change(original: i64, percentage: i64, increase: bool) -> GeneratedProblem {
    let (word, sym, factor) = if increase {
        ("increased", "+", 100 + percentage)
    } else {
        ("decreased", "-", 100 - percentage)
    };
    let value = Fraction::new(original * factor, 100);
    problem(
        Topic::Percentages, Difficulty::Hard, if increase { "increase" } else { "decrease" },
        format!("If {original} is {word} by {percentage}%, what is the new value?"),
        render(value),
        steps(&[
            format!(
                "New value = {original} × (1 {sym} {percentage}/100) = {original} × {}",
                format_exact(Fraction::new(factor, 100), 2)
            ),
            format!("= {}", render(value)),
        ]),
    )
}

fn up_then_down(original: i64, up: i64, down: i64) -> GeneratedProblem {
    let after_up = Fraction::new(original * (100 + up), 100);
    let after_down = after_up * Fraction::new(100 - down, 100);
    problem(
        Topic::Percentages, Difficulty::Hard, "increase_then_decrease",
        format!(
            "A value of {original} is increased by {up}% and then decreased by {down}%. \
             What is the final value?"
        ),
        render(after_down),
        steps(&[
            format!(
                "First increase: {original} × (1 + {up}/100) = {original} × {} = {}",
                format_exact(Fraction::new(100 + up, 100), 2),
                render(after_up)
            ),
            format!(
                "Then decrease: {} × (1 - {down}/100) = {} × {} = {}",
                render(after_up),
                render(after_up),
                format_exact(Fraction::new(100 - down, 100), 2),
                render(after_down)
            ),
            "The two changes do not cancel out because the decrease applies to the larger value.".to_string(),
        ]),
    )
}
