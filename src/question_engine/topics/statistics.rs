use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;
use crate::question_engine::{
    arithmetic::{format_decimal, format_exact, format_rounded, format_scaled, paren, Fraction},
    deck::{CardEvent, Deck, Rank, Suit},
    helpers::{list_str, problem, steps, sum_str},
    models::{Difficulty, GeneratedProblem, Topic},
    rng::RngDrawExt,
};

/// Standard normal CDF at z = k/2 for k in ±{1,2,3,4}, in ten-thousandths.
const Z_TABLE: [(i64, i64); 8] = [
    (-4, 228),
    (-3, 668),
    (-2, 1587),
    (-1, 3085),
    (1, 6915),
    (2, 8413),
    (3, 9332),
    (4, 9772),
];

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty) -> GeneratedProblem {
    match difficulty {
        Difficulty::Easy => {
            let size = rng.size(5..=8);
            match rng.gen_range(0..3) {
                0 => mean(rng, size),
                1 => median(rng, size),
                _ => mode(rng, size),
            }
        }
        Difficulty::Medium => match rng.gen_range(0..3) {
            0 => range(rng),
            1 => {
                let size = rng.size(4..=6);
                let centre = rng.gen_range(5..=15i64);
                let data = zero_sum_dataset(rng, centre, size, 5);
                variance(&data, centre)
            }
            _ => match rng.gen_range(0..3) {
                0 => dice(rng),
                1 => single_card(rng),
                _ => marbles(rng),
            },
        },
        Difficulty::Hard => match rng.gen_range(0..3) {
            0 => {
                let size = rng.size(5..=7);
                let centre = rng.gen_range(10..=20i64);
                let data = zero_sum_dataset(rng, centre, size, 6);
                standard_deviation(&data, centre)
            }
            1 => {
                let mu = rng.gen_range(60..=80i64);
                let sigma = rng.gen_range(5..=15i64);
                let z_halves = rng.pick(&Z_TABLE.map(|(k, _)| k));
                normal_distribution(mu, sigma, z_halves, rng.coin())
            }
            _ => {
                if rng.coin() {
                    let events = [CardEvent::Heart, CardEvent::FaceCard, CardEvent::Red];
                    let first = rng.pick(&events);
                    let second = rng.pick(&events);
                    conditional_cards(first, second)
                } else {
                    let prevalence = rng.gen_range(1..=10i64);
                    let sensitivity = rng.gen_range(85..=99i64);
                    let specificity = rng.gen_range(90..=99i64);
                    bayes(prevalence, sensitivity, specificity)
                }
            }
        },
    }
}

/// Dataset centred on `centre` whose deviations sum to exactly zero: the
/// last deviation is the negated sum of the others.
pub fn zero_sum_dataset<R: Rng>(rng: &mut R, centre: i64, size: usize, spread: i64) -> Vec<i64> {
    let mut deviations: Vec<i64> = (0..size - 1).map(|_| rng.gen_range(-spread..=spread)).collect();
    let last = -deviations.iter().sum::<i64>();
    deviations.push(last);
    deviations.into_iter().map(|d| centre + d).collect()
}

// ---------------------------------------------------------------------------
// Easy: central tendency
// ---------------------------------------------------------------------------

fn mean<R: Rng>(rng: &mut R, size: usize) -> GeneratedProblem {
    let target = rng.gen_range(5..=15i64);
    let mut data: Vec<i64> = (0..size - 1).map(|_| rng.gen_range(target - 5..=target + 5)).collect();
    // Last value makes the total exactly target × size.
    let last = target * size as i64 - data.iter().sum::<i64>();
    data.push(last);
    data.shuffle(rng);

    let total: i64 = data.iter().sum();
    problem(
        Topic::Statistics, Difficulty::Easy, "mean",
        format!("What is the mean (average) of the following numbers: {}?", list_str(&data)),
        target.to_string(),
        steps(&[
            "Mean = (sum of all values) ÷ (number of values)".to_string(),
            format!("Sum = {} = {total}", sum_str(&data)),
            format!("Mean = {total} ÷ {size} = {target}"),
        ]),
    )
}

fn median<R: Rng>(rng: &mut R, size: usize) -> GeneratedProblem {
    let base = rng.gen_range(5..=20i64);
    let spread = rng.gen_range(1..=10i64);
    let mut data: Vec<i64> = (0..size).map(|_| base + rng.gen_range(-spread..=spread)).collect();
    let mut sorted = data.clone();
    sorted.sort_unstable();
    data.shuffle(rng);

    let mid = size / 2;
    let (value, last_line) = if size % 2 == 0 {
        let v = Fraction::new(sorted[mid - 1] + sorted[mid], 2);
        (
            v,
            format!(
                "For an even number of values, the median is the average of the two middle values.\n\
                 Median = ({} + {}) ÷ 2 = {}",
                sorted[mid - 1], sorted[mid], format_exact(v, 1)
            ),
        )
    } else {
        let v = Fraction::integer(sorted[mid]);
        (
            v,
            format!("For an odd number of values, the median is the middle value.\nMedian = {}", sorted[mid]),
        )
    };

    problem(
        Topic::Statistics, Difficulty::Easy, "median",
        format!("What is the median of the following numbers: {}?", list_str(&data)),
        format_exact(value, 1),
        steps(&[
            format!("First, arrange the numbers in ascending order: {}", list_str(&sorted)),
            last_line,
        ]),
    )
}

fn mode<R: Rng>(rng: &mut R, size: usize) -> GeneratedProblem {
    // Distinct values drawn without replacement; the mode is the only repeat.
    let mut pool: Vec<i64> = (1..=20).collect();
    pool.shuffle(rng);
    let mode_value = pool[size - 2];
    let mut data: Vec<i64> = pool[..size - 2].to_vec();
    data.extend([mode_value, mode_value]);
    data.shuffle(rng);

    let mut freq: BTreeMap<i64, usize> = BTreeMap::new();
    for &v in &data {
        *freq.entry(v).or_default() += 1;
    }
    let mut lines = vec![
        "The mode is the value that appears most frequently.".to_string(),
        "Counting the frequencies:".to_string(),
    ];
    lines.extend(freq.iter().map(|(v, n)| format!("{v} appears {n} time(s)")));
    lines.push(format!("Therefore, {mode_value} is the mode with {} occurrences.", freq[&mode_value]));

    problem(
        Topic::Statistics, Difficulty::Easy, "mode",
        format!("What is the mode of the following numbers: {}?", list_str(&data)),
        mode_value.to_string(),
        steps(&lines),
    )
}

// ---------------------------------------------------------------------------
// Medium: spread and simple probability
// ---------------------------------------------------------------------------

fn range<R: Rng>(rng: &mut R) -> GeneratedProblem {
    let size = rng.size(6..=10);
    let min = rng.gen_range(1..=20i64);
    let max = min + rng.gen_range(15..=30i64);
    let mut data: Vec<i64> = (0..size - 2).map(|_| rng.gen_range(min + 1..=max - 1)).collect();
    data.extend([min, max]);
    data.shuffle(rng);

    problem(
        Topic::Statistics, Difficulty::Medium, "range",
        format!("What is the range of the following dataset: {}?", list_str(&data)),
        (max - min).to_string(),
        steps(&[
            format!("Maximum value = {max}, minimum value = {min}"),
            format!("Range = maximum - minimum = {max} - {min} = {}", max - min),
        ]),
    )
}

/// Shared steps 1 and 2 for variance and standard deviation.
fn deviation_steps(data: &[i64], centre: i64) -> (Vec<String>, i64) {
    let mut lines = vec![
        format!(
            "Step 1: Find the mean: ({}) ÷ {} = {centre}",
            sum_str(data),
            data.len()
        ),
        String::new(),
        "Step 2: Find the squared deviations from the mean:".to_string(),
    ];
    let mut total = 0;
    for (i, &x) in data.iter().enumerate() {
        let d = x - centre;
        total += d * d;
        lines.push(format!("(x{} - mean)² = ({x} - {centre})² = {}² = {}", i + 1, paren(d), d * d));
    }
    (lines, total)
}

fn squared_list(data: &[i64], centre: i64) -> String {
    data.iter().map(|x| ((x - centre) * (x - centre)).to_string()).collect::<Vec<_>>().join(" + ")
}

/// Population variance of a dataset whose mean is exactly `centre`.
pub fn variance(data: &[i64], centre: i64) -> GeneratedProblem {
    let (mut lines, total) = deviation_steps(data, centre);
    let n = data.len() as i64;
    let value = Fraction::new(total, n);
    lines.push(String::new());
    lines.push(format!(
        "Step 3: Find the average of the squared deviations:\nVariance = ({}) ÷ {n} = {total} ÷ {n} = {}",
        squared_list(data, centre),
        format_decimal(value, 2)
    ));
    problem(
        Topic::Statistics, Difficulty::Medium, "variance",
        format!(
            "What is the variance of the following dataset: {}? (Round to two decimal places)",
            list_str(data)
        ),
        format_decimal(value, 2),
        steps(&lines),
    )
}

pub fn standard_deviation(data: &[i64], centre: i64) -> GeneratedProblem {
    let (mut lines, total) = deviation_steps(data, centre);
    let n = data.len() as i64;
    let var = Fraction::new(total, n);
    let sd = format_rounded(var.to_f64().sqrt(), 2);
    lines.push(String::new());
    lines.push(format!(
        "Step 3: Find the average of the squared deviations (variance):\nVariance = ({}) ÷ {n} = {total} ÷ {n} = {}",
        squared_list(data, centre),
        format_decimal(var, 4)
    ));
    lines.push(String::new());
    lines.push(format!(
        "Step 4: Take the square root of the variance:\nStandard deviation = √{} = {sd}",
        format_decimal(var, 4)
    ));
    problem(
        Topic::Statistics, Difficulty::Hard, "std_dev",
        format!(
            "What is the standard deviation of the following dataset: {}? (Round to two decimal places)",
            list_str(data)
        ),
        sd,
        steps(&lines),
    )
}

fn dice<R: Rng>(rng: &mut R) -> GeneratedProblem {
    const ALL_FACES: &str = "Total possible outcomes: 1, 2, 3, 4, 5, 6 (6 outcomes)";

    if rng.coin() {
        let target = rng.gen_range(2..=12i64);
        let pairs: Vec<(i64, i64)> = (1..=6)
            .flat_map(|i| (1..=6).map(move |j| (i, j)))
            .filter(|(i, j)| i + j == target)
            .collect();
        let favourable = pairs.len() as i64;
        let listing = pairs.iter().map(|(i, j)| format!("({i}, {j})")).collect::<Vec<_>>().join(" ");
        let p = Fraction::new(favourable, 36);
        return problem(
            Topic::Statistics, Difficulty::Medium, "probability_two_dice",
            format!("What is the probability of rolling a sum of {target} when rolling two standard six-sided dice?"),
            p.to_string(),
            steps(&[
                "When rolling two dice, there are 6 × 6 = 36 possible outcomes.".to_string(),
                format!("Favorable outcomes (sum = {target}): {listing}"),
                format!("Total favorable outcomes: {favourable}"),
                format!("Probability = {favourable}/36 = {p}"),
            ]),
        );
    }

    let (question, faces): (String, Vec<i64>) = match rng.gen_range(0..4) {
        0 => (
            "What is the probability of rolling an even number on a standard six-sided die?".to_string(),
            vec![2, 4, 6],
        ),
        1 => (
            "What is the probability of rolling an odd number on a standard six-sided die?".to_string(),
            vec![1, 3, 5],
        ),
        2 => {
            let value = rng.gen_range(1..=6i64);
            (
                format!("What is the probability of rolling a {value} on a standard six-sided die?"),
                vec![value],
            )
        }
        _ => {
            let lower = rng.gen_range(1..=3i64);
            let upper = rng.gen_range(lower + 1..=6);
            (
                format!(
                    "What is the probability of rolling a number between {lower} and {upper} \
                     (inclusive) on a standard six-sided die?"
                ),
                (lower..=upper).collect(),
            )
        }
    };
    let favourable = faces.len() as i64;
    let p = Fraction::new(favourable, 6);
    let noun = if favourable == 1 { "outcome" } else { "outcomes" };
    problem(
        Topic::Statistics, Difficulty::Medium, "probability_die",
        question,
        p.to_string(),
        steps(&[
            format!("Favorable outcomes: {} ({favourable} {noun})", list_str(&faces)),
            ALL_FACES.to_string(),
            format!("Probability = {favourable}/6 = {p}"),
        ]),
    )
}

fn single_card<R: Rng>(rng: &mut R) -> GeneratedProblem {
    let event = match rng.gen_range(0..3) {
        0 => CardEvent::OfSuit(rng.pick(&Suit::ALL)),
        1 => CardEvent::FaceCard,
        _ => CardEvent::OfRank(Rank(rng.gen_range(1..=10))),
    };
    let deck = Deck::standard();
    let count = deck.count(event) as i64;
    let total = deck.len() as i64;
    let p = Fraction::new(count, total);
    problem(
        Topic::Statistics, Difficulty::Medium, "probability_card",
        format!(
            "What is the probability of drawing {} from a standard deck of 52 cards?",
            event.describe()
        ),
        p.to_string(),
        steps(&[
            format!("A standard deck has {count} {}.", event.plural()),
            format!("Total number of cards = {total}"),
            format!("Probability = {count}/{total} = {p}"),
        ]),
    )
}

fn marbles<R: Rng>(rng: &mut R) -> GeneratedProblem {
    let red = rng.gen_range(2..=8i64);
    let blue = rng.gen_range(2..=8i64);
    let green = rng.gen_range(2..=8i64);
    let total = red + blue + green;
    let (colour, favourable) = rng.pick(&[("red", red), ("blue", blue), ("green", green)]);
    let p = Fraction::new(favourable, total);
    problem(
        Topic::Statistics, Difficulty::Medium, "probability_marbles",
        format!(
            "A bag contains {red} red marbles, {blue} blue marbles, and {green} green marbles. \
             If you draw one marble at random, what is the probability of drawing a {colour} marble?"
        ),
        p.to_string(),
        steps(&[
            format!("Number of {colour} marbles = {favourable}"),
            format!("Total number of marbles = {red} + {blue} + {green} = {total}"),
            format!("Probability = {favourable}/{total} = {p}"),
        ]),
    )
}

// ---------------------------------------------------------------------------
// Hard: distributions and conditional probability
// ---------------------------------------------------------------------------

/// P(X < x) or P(X > x) for x = μ + (z_halves / 2)σ, read from the z-table.
pub fn normal_distribution(mu: i64, sigma: i64, z_halves: i64, above: bool) -> GeneratedProblem {
    let cdf = Z_TABLE
        .iter()
        .find(|(k, _)| *k == z_halves)
        .map(|&(_, p)| p)
        .unwrap_or(5000);
    let z = format_exact(Fraction::new(z_halves, 2), 1);
    let x = format_exact(Fraction::new(2 * mu + z_halves * sigma, 2), 1);
    let cdf_s = format_scaled(cdf, 4);

    let (word, prob, last) = if above {
        let p = format_scaled(10_000 - cdf, 4);
        (
            "greater",
            p.clone(),
            format!("P(Z > {z}) = 1 - P(Z < {z}) = 1 - {cdf_s} = {p}"),
        )
    } else {
        ("less", cdf_s.clone(), format!("P(Z < {z}) = {cdf_s}"))
    };

    problem(
        Topic::Statistics, Difficulty::Hard, "normal_distribution",
        format!(
            "In a normal distribution with mean {mu} and standard deviation {sigma}, what is the \
             probability of a value being {word} than {x}? (Round to four decimal places)"
        ),
        prob,
        steps(&[
            "Step 1: Find the Z-score:".to_string(),
            format!("Z = (x - μ) ÷ σ = ({x} - {mu}) ÷ {sigma} = {z}"),
            String::new(),
            "Step 2: Find the probability using the standard normal table:".to_string(),
            last,
        ]),
    )
}

/// Two cards drawn without replacement, counted over every ordered pair.
pub fn conditional_cards(first: CardEvent, second: CardEvent) -> GeneratedProblem {
    let counts = Deck::standard().count_draws(first, second);
    let p = Fraction::new(counts.both as i64, counts.given as i64);
    let first_desc = first.describe();
    let second_desc = if first == second {
        format!("another {}", second.describe().trim_start_matches("a "))
    } else {
        second.describe()
    };
    problem(
        Topic::Statistics, Difficulty::Hard, "conditional_cards",
        format!(
            "You draw two cards from a standard deck of 52 cards without replacement. If the first \
             card is {first_desc}, what is the probability that the second card is {second_desc}?"
        ),
        p.to_string(),
        steps(&[
            format!(
                "There are {} {}, so there are {} × 51 = {} ordered draws whose first card is {first_desc}.",
                counts.first, first.plural(), counts.first, counts.given
            ),
            format!("Of these, {} have a second card that is {}.", counts.both, second.describe()),
            format!("Probability = {}/{} = {p}", counts.both, counts.given),
        ]),
    )
}

/// Positive predictive value via Bayes' rule; inputs are whole percentages.
pub fn bayes(prevalence: i64, sensitivity: i64, specificity: i64) -> GeneratedProblem {
    let pct = |v: i64| format_decimal(Fraction::new(v, 100), 4);
    let true_pos = sensitivity * prevalence;
    let false_pos = (100 - specificity) * (100 - prevalence);
    let p_positive = Fraction::new(true_pos + false_pos, 10_000);
    let ppv = Fraction::new(true_pos, true_pos + false_pos);

    problem(
        Topic::Statistics, Difficulty::Hard, "bayes",
        format!(
            "A disease affects {prevalence}% of the population. A test for this disease has a \
             sensitivity of {sensitivity}% (probability of a positive test if the person has the \
             disease) and a specificity of {specificity}% (probability of a negative test if the \
             person does not have the disease). If a person tests positive, what is the probability \
             that they actually have the disease? (Round to four decimal places)"
        ),
        format_decimal(ppv, 4),
        steps(&[
            "Using Bayes' theorem:".to_string(),
            "P(Disease|Positive) = [P(Positive|Disease) × P(Disease)] ÷ P(Positive)".to_string(),
            String::new(),
            format!("P(Disease) = {}", pct(prevalence)),
            format!("P(No Disease) = 1 - {} = {}", pct(prevalence), pct(100 - prevalence)),
            format!("P(Positive|Disease) = {} (sensitivity)", pct(sensitivity)),
            format!(
                "P(Positive|No Disease) = 1 - {} = {} (1 - specificity)",
                pct(specificity),
                pct(100 - specificity)
            ),
            String::new(),
            "P(Positive) = P(Positive|Disease) × P(Disease) + P(Positive|No Disease) × P(No Disease)".to_string(),
            format!(
                "P(Positive) = {} × {} + {} × {} = {}",
                pct(sensitivity), pct(prevalence), pct(100 - specificity), pct(100 - prevalence),
                format_decimal(p_positive, 4)
            ),
            String::new(),
            format!(
                "P(Disease|Positive) = ({} × {}) ÷ {} = {}",
                pct(sensitivity), pct(prevalence), format_decimal(p_positive, 4), format_decimal(ppv, 4)
            ),
        ]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question_engine::rng::seeded;

    #[test]
    fn zero_sum_dataset_has_exact_mean() {
        for seed in 0..200 {
            let mut rng = seeded(seed);
            let data = zero_sum_dataset(&mut rng, 12, 6, 5);
            assert_eq!(data.len(), 6);
            assert_eq!(data.iter().sum::<i64>(), 12 * 6);
        }
    }

    #[test]
    fn variance_of_known_dataset() {
        // deviations -2, 0, 2 → squares 4, 0, 4 → 8/3
        let p = variance(&[8, 10, 12], 10);
        assert_eq!(p.answer, "2.67");
        assert!(p.solution.contains("8 ÷ 3 = 2.67"));
    }

    #[test]
    fn standard_deviation_of_known_dataset() {
        // deviations -3, -1, 1, 3 → 20/4 = 5 → √5 ≈ 2.24
        let p = standard_deviation(&[12, 14, 16, 18], 15);
        assert_eq!(p.answer, "2.24");
        assert!(p.solution.contains("√5.0000"));
    }

    #[test]
    fn normal_table_lookup() {
        let below = normal_distribution(70, 10, 2, false);
        assert_eq!(below.answer, "0.8413");
        assert!(below.question.contains("less than 80"));
        let above = normal_distribution(70, 10, -3, true);
        assert_eq!(above.answer, "0.9332");
        assert!(above.question.contains("greater than 55"));
        let half = normal_distribution(60, 5, 1, true);
        assert!(half.question.contains("greater than 62.5"));
        assert_eq!(half.answer, "0.3085");
    }

    #[test]
    fn conditional_cards_counts_overlap() {
        assert_eq!(conditional_cards(CardEvent::Heart, CardEvent::Heart).answer, "4/17");
        assert_eq!(conditional_cards(CardEvent::Red, CardEvent::Heart).answer, "25/102");
        // (3 × 12 + 9 × 13) / (12 × 51) = 153/612 = 1/4
        assert_eq!(conditional_cards(CardEvent::FaceCard, CardEvent::Heart).answer, "1/4");
        let same = conditional_cards(CardEvent::Red, CardEvent::Red);
        assert!(same.question.contains("another red card"));
    }

    #[test]
    fn bayes_positive_predictive_value() {
        // 0.99 × 0.01 / (0.99 × 0.01 + 0.05 × 0.99) = 1/6
        let p = bayes(1, 99, 95);
        assert_eq!(p.answer, "0.1667");
        assert!(p.solution.contains("P(Positive) = 0.9900 × 0.0100 + 0.0500 × 0.9900 = 0.0594"));
    }

    #[test]
    fn mode_is_unique() {
        for seed in 0..300 {
            let p = generate(&mut seeded(seed), Difficulty::Easy);
            if p.variant != "statistics:mode" {
                continue;
            }
            let list = p.question.split(": ").nth(1).unwrap().trim_end_matches('?');
            let values: Vec<i64> = list.split(", ").map(|v| v.parse().unwrap()).collect();
            let mode: i64 = p.answer.parse().unwrap();
            assert_eq!(values.iter().filter(|&&v| v == mode).count(), 2);
            for v in &values {
                if *v != mode {
                    assert_eq!(values.iter().filter(|&&w| w == *v).count(), 1);
                }
            }
        }
    }

    #[test]
    fn probability_answers_are_reduced() {
        use crate::question_engine::arithmetic::gcd;
        for difficulty in [Difficulty::Medium, Difficulty::Hard] {
            for seed in 0..400 {
                let p = generate(&mut seeded(seed), difficulty);
                if let Some((n, d)) = p.answer.split_once('/') {
                    let n: i64 = n.parse().unwrap();
                    let d: i64 = d.parse().unwrap();
                    assert!(d > 0);
                    assert_eq!(gcd(n, d), 1, "{}", p.answer);
                }
            }
        }
    }
}
