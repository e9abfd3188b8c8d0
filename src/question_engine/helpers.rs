//! Shared builder functions used by every topic generator.
//!
//! Topic files focus on drawing operands and deriving the answer; these
//! helpers assemble the pieces into a [`GeneratedProblem`].

use crate::question_engine::models::{Difficulty, GeneratedProblem, Topic};

/// Assemble the final [`GeneratedProblem`].
///
/// `variant` is the sub-variant name without the topic prefix; the prefix is
/// added here so every key reads `"<topic>:<variant>"`.
pub fn problem(
    topic: Topic,
    difficulty: Difficulty,
    variant: &str,
    question: impl Into<String>,
    answer: impl Into<String>,
    solution: impl Into<String>,
) -> GeneratedProblem {
    GeneratedProblem {
        topic,
        difficulty,
        variant: format!("{}:{}", topic.tag(), variant),
        question: question.into(),
        answer: answer.into(),
        solution: solution.into(),
    }
}

/// Join derivation steps into a multi-line solution.
pub fn steps<S: AsRef<str>>(lines: &[S]) -> String {
    lines.iter().map(|l| l.as_ref()).collect::<Vec<_>>().join("\n")
}

/// Comma-separated dataset listing, e.g. `"3, 7, 7, 12"`.
pub fn list_str(values: &[i64]) -> String {
    values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
}

/// Sum expression, e.g. `"3 + 7 + 12"`.
pub fn sum_str(values: &[i64]) -> String {
    values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" + ")
}
