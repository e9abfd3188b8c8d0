use tracing::warn;

use crate::question_engine::{
    error::Result,
    models::{Difficulty, GeneratedProblem, QuestionRequest, Topic},
    rng::{self, QuestionRng},
    topics,
};

/// Signature shared by every topic generator once monomorphised for [`QuestionRng`].
pub type GenerateFn = fn(&mut QuestionRng, Difficulty) -> GeneratedProblem;

/// Dispatch table indexed by `Topic as usize`; order matches [`Topic::ALL`].
const GENERATORS: [GenerateFn; 10] = [
    topics::addition::generate::<QuestionRng>,
    topics::subtraction::generate::<QuestionRng>,
    topics::multiplication::generate::<QuestionRng>,
    topics::division::generate::<QuestionRng>,
    topics::fractions::generate::<QuestionRng>,
    topics::decimals::generate::<QuestionRng>,
    topics::percentages::generate::<QuestionRng>,
    topics::algebra::generate::<QuestionRng>,
    topics::geometry::generate::<QuestionRng>,
    topics::statistics::generate::<QuestionRng>,
];

/// Look up the generator for `topic`.
pub fn generator_for(topic: Topic) -> GenerateFn {
    GENERATORS[topic as usize]
}

/// Generate one problem, drawing from a caller-owned randomness source.
pub fn generate_with_rng(topic: Topic, difficulty: Difficulty, rng: &mut QuestionRng) -> GeneratedProblem {
    generator_for(topic)(rng, difficulty)
}

/// Generate one problem from a fresh generator seeded with `seed`.
pub fn generate_seeded(topic: Topic, difficulty: Difficulty, seed: u64) -> GeneratedProblem {
    let mut rng = rng::seeded(seed);
    generate_with_rng(topic, difficulty, &mut rng)
}

/// Core entry point: seeded when `request.seed` is set, entropy otherwise.
pub fn generate_question(request: QuestionRequest) -> GeneratedProblem {
    let mut rng = match request.seed {
        Some(seed) => rng::seeded(seed),
        None       => rng::from_entropy(),
    };
    generate_with_rng(request.topic, request.difficulty, &mut rng)
}

/// String boundary used by callers holding stored tags.
///
/// An unknown topic tag falls back to addition and logs a warning; an
/// unknown difficulty tag is an error.
pub fn generate_from_tags(topic_tag: &str, difficulty_tag: &str, seed: u64) -> Result<GeneratedProblem> {
    let difficulty: Difficulty = difficulty_tag.parse()?;
    let topic = resolve_topic(topic_tag);
    Ok(generate_seeded(topic, difficulty, seed))
}

/// Topic for a stored tag, substituting [`Topic::DEFAULT`] for unknown tags.
pub fn resolve_topic(tag: &str) -> Topic {
    Topic::from_tag(tag).unwrap_or_else(|| {
        warn!(tag, fallback = %Topic::DEFAULT, "unknown topic tag, falling back");
        Topic::DEFAULT
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question_engine::error::Error;

    #[test]
    fn table_matches_topic_order() {
        for topic in Topic::ALL {
            let p = generate_seeded(topic, Difficulty::Medium, 11);
            assert_eq!(p.topic, topic, "dispatch mismatch for {topic:?}");
            assert!(p.variant.starts_with(topic.tag()));
        }
    }

    #[test]
    fn request_with_seed_is_reproducible() {
        let req = QuestionRequest::new(Topic::Algebra).difficulty(Difficulty::Hard).seed(99);
        let a = generate_question(req.clone());
        let b = generate_question(req);
        assert_eq!(a, b);
    }

    #[test]
    fn entropy_request_still_produces_a_problem() {
        let p = generate_question(QuestionRequest::new(Topic::Geometry));
        assert!(!p.question.is_empty());
        assert!(!p.answer.is_empty());
    }

    #[test]
    fn unknown_topic_falls_back_to_addition() {
        let p = generate_from_tags("calculus", "easy", 5).unwrap();
        assert_eq!(p.topic, Topic::Addition);
        assert_eq!(p, generate_seeded(Topic::Addition, Difficulty::Easy, 5));
    }

    #[test]
    fn tags_are_case_insensitive() {
        let p = generate_from_tags(" Fractions ", "HARD", 5).unwrap();
        assert_eq!(p.topic, Topic::Fractions);
        assert_eq!(p.difficulty, Difficulty::Hard);
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        let err = generate_from_tags("addition", "expert", 5).unwrap_err();
        assert!(matches!(err, Error::InvalidDifficulty(ref s) if s == "expert"));
    }
}
