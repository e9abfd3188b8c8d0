//! # math_quiz_gen
//!
//! A fully offline, deterministic math question generator.
//!
//! The library produces practice problems across ten topics (addition through
//! statistics) and three difficulty tiers. Each problem carries a question,
//! an exact canonical answer, and a multi-line worked solution.
//!
//! ## How it works
//!
//! 1. [`distribute`] spreads a question count across the selected topics and
//!    returns ordered [`TemplateSlot`]s.
//! 2. The caller stores the slots and binds each to a durable `template_id`.
//! 3. [`materialize`] produces one concrete question per slot for a version
//!    number. The seed is `template_id * 1000 + version`, so every version can
//!    be regenerated at any time without storing its questions.
//!
//! ## Key features
//!
//! - **Deterministic**: the same seed always yields the same question,
//!   answer, and solution text.
//! - **Exact answers**: fractions are always reduced, decimals are rounded
//!   half away from zero from exact rationals, integral results never carry a
//!   decimal point.
//! - **Variant keys**: each problem includes a `variant` such as
//!   `"fractions:divide"` identifying the sub-variant drawn, stable across seeds.
//!
//! ## Quick start
//!
//! ```rust
//! use math_quiz_gen::{
//!     distribute, generate_question, materialize, Difficulty, QuestionRequest, Topic,
//! };
//!
//! // One question, reproducible from its seed:
//! let p = generate_question(QuestionRequest::new(Topic::Fractions).difficulty(Difficulty::Hard).seed(42));
//! println!("Q: {}\nA: {}", p.question, p.answer);
//!
//! // A two-topic template, materialized as version 1:
//! let slots: Vec<_> = distribute(&[Topic::Addition, Topic::Subtraction], Difficulty::Easy, 5)
//!     .into_iter()
//!     .enumerate()
//!     .map(|(i, slot)| slot.with_template_id(100 + i as u64))
//!     .collect();
//! let version_1 = materialize(&slots, 1).unwrap();
//! assert_eq!(version_1.len(), 5);
//! for q in &version_1 {
//!     println!("{}. {}  [{}]", q.order, q.question_text, q.answer);
//! }
//! ```

pub mod question_engine;

// Convenience re-exports so callers can use `math_quiz_gen::materialize`
// directly without reaching into `question_engine::`.
pub use question_engine::{
    distribute, generate_from_tags, generate_question, generate_quiz, generate_seeded,
    generate_with_rng, materialize, materialize_versions, reduce_fraction, version_seed,
    Difficulty, DistributionPlan, Error, Fraction, GeneratedProblem, GeneratedQuestion,
    QuestionRequest, QuestionRng, Result, TemplateSlot, TestBlueprint, Topic, VersionSet,
};
