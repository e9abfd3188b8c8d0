use rand::Rng;
use crate::question_engine::{
    arithmetic::{format_decimal, format_exact, format_rounded, paren, perfect_sqrt, Fraction},
    helpers::{problem, steps},
    models::{Difficulty, GeneratedProblem, Topic},
    rng::RngDrawExt,
};

const PI_TEXT: &str = "3.14159";

/// π ≈ 3.14159, as stated in the question text, held as an exact rational.
fn pi() -> Fraction {
    Fraction::new(314_159, 100_000)
}

/// Primitive Pythagorean triples scaled to produce the right-triangle questions.
pub const PYTHAGOREAN_TRIPLES: [(i64, i64, i64); 4] = [(3, 4, 5), (5, 12, 13), (8, 15, 17), (7, 24, 25)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unknown {
    LegA,
    LegB,
    Hypotenuse,
}

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty) -> GeneratedProblem {
    match difficulty {
        Difficulty::Easy => match rng.gen_range(0..3) {
            0 => {
                let length = rng.gen_range(3..=15i64);
                let width = rng.gen_range(2..=10i64);
                rectangle(length, width, rng.coin())
            }
            1 => {
                let side = rng.gen_range(2..=15i64);
                square(side, rng.coin())
            }
            _ => {
                let base = rng.gen_range(3..=15i64);
                let height = rng.gen_range(2..=10i64);
                triangle_area(base, height)
            }
        },
        Difficulty::Medium => match rng.gen_range(0..3) {
            0 => {
                let radius = rng.gen_range(2..=12i64);
                circle(radius, rng.coin())
            }
            1 => {
                let base1 = rng.gen_range(5..=15i64);
                let base2 = rng.gen_range(5..=15i64);
                let height = rng.gen_range(3..=10i64);
                trapezoid(base1, base2, height)
            }
            _ => {
                let triple = rng.pick(&PYTHAGOREAN_TRIPLES);
                let scale = rng.gen_range(1..=3i64);
                let unknown = rng.pick(&[Unknown::LegA, Unknown::LegB, Unknown::Hypotenuse]);
                pythagorean(triple, scale, unknown)
            }
        },
        Difficulty::Hard => match rng.gen_range(0..3) {
            0 => match rng.gen_range(0..3) {
                0 => cube(rng.gen_range(5..=15)),
                1 => {
                    let radius = rng.gen_range(5..=12i64);
                    let height = rng.gen_range(5..=20i64);
                    cylinder(radius, height)
                }
                _ => sphere(rng.gen_range(5..=15)),
            },
            1 => {
                let scale = rng.gen_range(2..=5i64);
                let side = rng.gen_range(3..=10i64);
                let other = rng.gen_range(4..=12i64);
                similar_triangles(scale, side, other)
            }
            _ => {
                let distance = rng.coin();
                let p1 = (rng.gen_range(-20..=20i64), rng.gen_range(-20..=20i64));
                let p2 = (rng.gen_range(-20..=20i64), rng.gen_range(-20..=20i64));
                if distance {
                    distance_between(p1, p2)
                } else {
                    midpoint(p1, p2)
                }
            }
        },
    }
}

fn rectangle(length: i64, width: i64, area: bool) -> GeneratedProblem {
    let dims = format!("length {length} units and width {width} units");
    if area {
        let value = length * width;
        problem(
            Topic::Geometry, Difficulty::Easy, "rectangle_area",
            format!("What is the area of a rectangle with {dims}?"),
            value.to_string(),
            format!("Area of a rectangle = length × width = {length} × {width} = {value} square units"),
        )
    } else {
        let value = 2 * (length + width);
        problem(
            Topic::Geometry, Difficulty::Easy, "rectangle_perimeter",
            format!("What is the perimeter of a rectangle with {dims}?"),
            value.to_string(),
            steps(&[
                "Perimeter of a rectangle = 2 × (length + width)".to_string(),
                format!("= 2 × ({length} + {width}) = 2 × {} = {value} units", length + width),
            ]),
        )
    }
}

fn square(side: i64, area: bool) -> GeneratedProblem {
    if area {
        let value = side * side;
        problem(
            Topic::Geometry, Difficulty::Easy, "square_area",
            format!("What is the area of a square with side length {side} units?"),
            value.to_string(),
            format!("Area of a square = side² = {side}² = {value} square units"),
        )
    } else {
        let value = 4 * side;
        problem(
            Topic::Geometry, Difficulty::Easy, "square_perimeter",
            format!("What is the perimeter of a square with side length {side} units?"),
            value.to_string(),
            format!("Perimeter of a square = 4 × side = 4 × {side} = {value} units"),
        )
    }
}

fn triangle_area(base: i64, height: i64) -> GeneratedProblem {
    let value = format_exact(Fraction::new(base * height, 2), 1);
    problem(
        Topic::Geometry, Difficulty::Easy, "triangle_area",
        format!("What is the area of a triangle with base {base} units and height {height} units?"),
        value.clone(),
        steps(&[
            "Area of a triangle = ½ × base × height".to_string(),
            format!("= ½ × {base} × {height} = {} ÷ 2 = {value} square units", base * height),
        ]),
    )
}

fn circle(radius: i64, area: bool) -> GeneratedProblem {
    if area {
        let value = format_decimal(pi() * Fraction::integer(radius * radius), 2);
        problem(
            Topic::Geometry, Difficulty::Medium, "circle_area",
            format!("What is the area of a circle with radius {radius} units? (Use π ≈ {PI_TEXT})"),
            value.clone(),
            steps(&[
                "Area of a circle = πr²".to_string(),
                format!("= {PI_TEXT} × {radius}² = {PI_TEXT} × {} = {value} square units", radius * radius),
            ]),
        )
    } else {
        let value = format_decimal(pi() * Fraction::integer(2 * radius), 2);
        problem(
            Topic::Geometry, Difficulty::Medium, "circle_circumference",
            format!("What is the circumference of a circle with radius {radius} units? (Use π ≈ {PI_TEXT})"),
            value.clone(),
            steps(&[
                "Circumference of a circle = 2πr".to_string(),
                format!("= 2 × {PI_TEXT} × {radius} = {value} units"),
            ]),
        )
    }
}

fn trapezoid(base1: i64, base2: i64, height: i64) -> GeneratedProblem {
    let value = format_exact(Fraction::new((base1 + base2) * height, 2), 1);
    problem(
        Topic::Geometry, Difficulty::Medium, "trapezoid_area",
        format!(
            "What is the area of a trapezoid with parallel sides of lengths {base1} units and \
             {base2} units, and height {height} units?"
        ),
        value.clone(),
        steps(&[
            "Area of a trapezoid = ½ × (sum of parallel sides) × height".to_string(),
            format!("= ½ × ({base1} + {base2}) × {height}"),
            format!("= ½ × {} × {height} = {value} square units", base1 + base2),
        ]),
    )
}

/// Right triangle built from a scaled integer triple; the unknown side is
/// always a whole number.
pub fn pythagorean(triple: (i64, i64, i64), scale: i64, unknown: Unknown) -> GeneratedProblem {
    let (a, b, c) = (triple.0 * scale, triple.1 * scale, triple.2 * scale);
    let (question, answer, lines) = match unknown {
        Unknown::Hypotenuse => (
            format!("In a right triangle with legs of lengths {a} units and {b} units, what is the length of the hypotenuse?"),
            c,
            vec![
                format!("{a}² + {b}² = c²"),
                format!("{} + {} = c²", a * a, b * b),
                format!("c² = {}", a * a + b * b),
                format!("c = √{} = {c} units", a * a + b * b),
            ],
        ),
        Unknown::LegA | Unknown::LegB => {
            let (known, missing) = if unknown == Unknown::LegA { (b, a) } else { (a, b) };
            (
                format!(
                    "In a right triangle, if one leg is {known} units and the hypotenuse is {c} units, \
                     what is the length of the other leg?"
                ),
                missing,
                vec![
                    format!("x² + {known}² = {c}²"),
                    format!("x² = {} - {}", c * c, known * known),
                    format!("x² = {}", c * c - known * known),
                    format!("x = √{} = {missing} units", c * c - known * known),
                ],
            )
        }
    };
    debug_assert_eq!(perfect_sqrt(answer * answer), Some(answer));

    let mut solution = vec!["Using the Pythagorean theorem: a² + b² = c²".to_string()];
    solution.extend(lines);
    let variant = if unknown == Unknown::Hypotenuse { "pythagorean_hypotenuse" } else { "pythagorean_leg" };
    problem(Topic::Geometry, Difficulty::Medium, variant, question, answer.to_string(), steps(&solution))
}

fn cube(side: i64) -> GeneratedProblem {
    let value = side.pow(3);
    problem(
        Topic::Geometry, Difficulty::Hard, "cube_volume",
        format!("What is the volume of a cube with side length {side} units?"),
        value.to_string(),
        format!("Volume of a cube = side³ = {side}³ = {value} cubic units"),
    )
}

fn cylinder(radius: i64, height: i64) -> GeneratedProblem {
    let value = format_decimal(pi() * Fraction::integer(radius * radius * height), 2);
    problem(
        Topic::Geometry, Difficulty::Hard, "cylinder_volume",
        format!(
            "What is the volume of a cylinder with radius {radius} units and height {height} units? \
             (Use π ≈ {PI_TEXT})"
        ),
        value.clone(),
        steps(&[
            "Volume of a cylinder = πr²h".to_string(),
            format!("= {PI_TEXT} × {radius}² × {height}"),
            format!("= {PI_TEXT} × {} × {height} = {value} cubic units", radius * radius),
        ]),
    )
}

fn sphere(radius: i64) -> GeneratedProblem {
    let cubed = radius.pow(3);
    let value = format_decimal(Fraction::new(4, 3) * pi() * Fraction::integer(cubed), 2);
    problem(
        Topic::Geometry, Difficulty::Hard, "sphere_volume",
        format!("What is the volume of a sphere with radius {radius} units? (Use π ≈ {PI_TEXT})"),
        value.clone(),
        steps(&[
            "Volume of a sphere = (4/3)πr³".to_string(),
            format!("= (4/3) × {PI_TEXT} × {radius}³"),
            format!("= (4/3) × {PI_TEXT} × {cubed} = {value} cubic units"),
        ]),
    )
}

fn similar_triangles(scale: i64, side: i64, other: i64) -> GeneratedProblem {
    let big_side = side * scale;
    let big_other = other * scale;
    problem(
        Topic::Geometry, Difficulty::Hard, "similar_triangles",
        format!(
            "Two triangles are similar. In the smaller triangle, one side is {side} units and another \
             side is {other} units. In the larger triangle, the side corresponding to the {side}-unit \
             side is {big_side} units. What is the length of the side corresponding to the \
             {other}-unit side?"
        ),
        big_other.to_string(),
        steps(&[
            "For similar triangles, the ratio of corresponding sides is constant.".to_string(),
            format!("Ratio = {big_side}/{side} = {scale}"),
            format!("Unknown side = {other} × {scale} = {big_other} units"),
        ]),
    )
}

fn point(p: (i64, i64)) -> String {
    format!("({}, {})", p.0, p.1)
}

fn distance_between(p1: (i64, i64), p2: (i64, i64)) -> GeneratedProblem {
    let dx = p2.0 - p1.0;
    let dy = p2.1 - p1.1;
    let sq = dx * dx + dy * dy;
    let value = match perfect_sqrt(sq) {
        Some(root) => format_decimal(Fraction::integer(root), 2),
        None => format_rounded((sq as f64).sqrt(), 2),
    };
    problem(
        Topic::Geometry, Difficulty::Hard, "distance",
        format!(
            "What is the distance between the points {} and {}? (Round to two decimal places)",
            point(p1), point(p2)
        ),
        value.clone(),
        steps(&[
            "Distance = √[(x₂ - x₁)² + (y₂ - y₁)²]".to_string(),
            format!("= √[({} - {})² + ({} - {})²]", p2.0, paren(p1.0), p2.1, paren(p1.1)),
            format!("= √[{} + {}] = √{sq}", dx * dx, dy * dy),
            format!("= {value} units"),
        ]),
    )
}

fn midpoint(p1: (i64, i64), p2: (i64, i64)) -> GeneratedProblem {
    let mx = format_exact(Fraction::new(p1.0 + p2.0, 2), 1);
    let my = format_exact(Fraction::new(p1.1 + p2.1, 2), 1);
    let answer = format!("({mx}, {my})");
    problem(
        Topic::Geometry, Difficulty::Hard, "midpoint",
        format!(
            "What is the midpoint of the line segment connecting the points {} and {}?",
            point(p1), point(p2)
        ),
        answer.clone(),
        steps(&[
            "Midpoint = ((x₁ + x₂)/2, (y₁ + y₂)/2)".to_string(),
            format!("= (({} + {})/2, ({} + {})/2)", p1.0, paren(p2.0), p1.1, paren(p2.1)),
            format!("= ({}/2, {}/2) = {answer}", p1.0 + p2.0, p1.1 + p2.1),
        ]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question_engine::rng::seeded;

    #[test]
    fn pythagorean_answers_are_whole() {
        for seed in 0..300 {
            let p = generate(&mut seeded(seed), Difficulty::Medium);
            if p.variant.starts_with("geometry:pythagorean") {
                let side: i64 = p.answer.parse().unwrap();
                assert!(side > 0);
            }
        }
    }

    #[test]
    fn pythagorean_solves_each_side() {
        assert_eq!(pythagorean((3, 4, 5), 2, Unknown::Hypotenuse).answer, "10");
        assert_eq!(pythagorean((5, 12, 13), 1, Unknown::LegA).answer, "5");
        let p = pythagorean((8, 15, 17), 3, Unknown::LegB);
        assert_eq!(p.answer, "45");
        assert!(p.question.contains("one leg is 24 units and the hypotenuse is 51 units"));
    }

    #[test]
    fn circle_values_use_stated_pi() {
        // 3.14159 × 4 = 12.56636
        assert_eq!(circle(2, true).answer, "12.57");
        // 2 × 3.14159 × 5 = 31.4159
        assert_eq!(circle(5, false).answer, "31.42");
        // 4/3 × 3.14159 × 27 = 113.09724
        assert_eq!(sphere(3).answer, "113.10");
    }

    #[test]
    fn half_unit_results() {
        assert_eq!(triangle_area(5, 3).answer, "7.5");
        assert_eq!(triangle_area(4, 3).answer, "6");
        assert_eq!(midpoint((1, -2), (4, 6)).answer, "(2.5, 2)");
    }

    #[test]
    fn distance_rendering() {
        assert_eq!(distance_between((0, 0), (3, 4)).answer, "5.00");
        assert_eq!(distance_between((0, 0), (1, 1)).answer, "1.41");
    }
}
