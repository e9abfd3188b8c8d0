//! Topic generators, one module per topic.
//!
//! Every module exposes the same entry point:
//!
//! ```ignore
//! pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty) -> GeneratedProblem
//! ```
//!
//! The generator dispatches to these via the table in `generator.rs`.

pub mod addition;
pub mod subtraction;
pub mod multiplication;
pub mod division;
/// Same-denominator, LCD and cross-multiplication problems.
pub mod fractions;
/// Operands are integer tenths/hundredths; see `decimals::answer_places`.
pub mod decimals;
pub mod percentages;
/// Linear equations, quadratics, 2×2 systems, age problems.
pub mod algebra;
/// Area, perimeter, volume, Pythagorean triples, coordinates.
pub mod geometry;
/// Central tendency, spread, probability, Bayes.
pub mod statistics;
