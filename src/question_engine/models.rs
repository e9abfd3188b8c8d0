use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::question_engine::error::Error;

// ---------------------------------------------------------------------------
// Topic / difficulty tags
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Fractions,
    Decimals,
    Percentages,
    Algebra,
    Geometry,
    Statistics,
}

impl Topic {
    /// Every topic in canonical order. The discriminant doubles as the index
    /// into the generator dispatch table.
    pub const ALL: [Topic; 10] = [
        Topic::Addition,
        Topic::Subtraction,
        Topic::Multiplication,
        Topic::Division,
        Topic::Fractions,
        Topic::Decimals,
        Topic::Percentages,
        Topic::Algebra,
        Topic::Geometry,
        Topic::Statistics,
    ];

    /// Topic used when a caller supplies no topics at all, and when a stored
    /// tag is not recognised.
    pub const DEFAULT: Topic = Topic::Addition;

    /// Lowercase storage tag (e.g. `"fractions"`).
    pub fn tag(self) -> &'static str {
        match self {
            Topic::Addition       => "addition",
            Topic::Subtraction    => "subtraction",
            Topic::Multiplication => "multiplication",
            Topic::Division       => "division",
            Topic::Fractions      => "fractions",
            Topic::Decimals       => "decimals",
            Topic::Percentages    => "percentages",
            Topic::Algebra        => "algebra",
            Topic::Geometry       => "geometry",
            Topic::Statistics     => "statistics",
        }
    }

    /// Look up a storage tag. Matching is case-insensitive and ignores
    /// surrounding whitespace.
    pub fn from_tag(tag: &str) -> Option<Topic> {
        let tag = tag.trim();
        Topic::ALL
            .into_iter()
            .find(|t| t.tag().eq_ignore_ascii_case(tag))
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Topic::Addition       => "Addition",
            Topic::Subtraction    => "Subtraction",
            Topic::Multiplication => "Multiplication",
            Topic::Division       => "Division",
            Topic::Fractions      => "Fractions",
            Topic::Decimals       => "Decimals",
            Topic::Percentages    => "Percentages",
            Topic::Algebra        => "Basic Algebra",
            Topic::Geometry       => "Basic Geometry",
            Topic::Statistics     => "Basic Statistics",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn tag(self) -> &'static str {
        match self {
            Difficulty::Easy   => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard   => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy   => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard   => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| Error::InvalidDifficulty(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Template slots and generated content
// ---------------------------------------------------------------------------

/// One ordered position in a test template.
///
/// Slots come out of the distributor without an id; the persistence layer
/// assigns `template_id` once the slot is stored and it never changes after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSlot {
    pub topic: Topic,
    pub difficulty: Difficulty,
    /// 1-based, contiguous within one template.
    pub order: u32,
    pub template_id: Option<u64>,
}

impl TemplateSlot {
    pub fn new(topic: Topic, difficulty: Difficulty, order: u32) -> Self {
        TemplateSlot { topic, difficulty, order, template_id: None }
    }

    /// Same slot, bound to its durable identity.
    pub fn with_template_id(self, template_id: u64) -> Self {
        TemplateSlot { template_id: Some(template_id), ..self }
    }
}

/// Output of a single topic generator call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedProblem {
    pub topic: Topic,
    pub difficulty: Difficulty,
    /// Identifies the sub-variant drawn (e.g. `"fractions:divide"`).
    /// Stable across seeds that land on the same branch.
    pub variant: String,
    pub question: String,
    /// Canonical answer string; see `arithmetic` for the rendering rules.
    pub answer: String,
    /// Multi-line worked derivation.
    pub solution: String,
}

/// A problem bound to one slot of one version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQuestion {
    pub template_id: u64,
    pub order: u32,
    pub variant: String,
    pub question_text: String,
    pub answer: String,
    pub solution_text: String,
}

/// Every question of one test version, in slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSet {
    pub version_number: u32,
    pub questions: Vec<GeneratedQuestion>,
}

// ---------------------------------------------------------------------------
// Single-question request
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub topic: Topic,
    #[serde(default = "default_difficulty")]
    pub difficulty: Difficulty,
    /// `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_difficulty() -> Difficulty {
    Difficulty::Easy
}

impl QuestionRequest {
    /// Minimal request: easy difficulty, entropy seed.
    pub fn new(topic: Topic) -> Self {
        QuestionRequest { topic, difficulty: default_difficulty(), seed: None }
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_tags_round_trip() {
        for topic in Topic::ALL {
            assert_eq!(Topic::from_tag(topic.tag()), Some(topic));
        }
        assert_eq!(Topic::from_tag("  Geometry "), Some(Topic::Geometry));
        assert_eq!(Topic::from_tag("trigonometry"), None);
    }

    #[test]
    fn topic_discriminants_match_canonical_order() {
        for (i, topic) in Topic::ALL.into_iter().enumerate() {
            assert_eq!(topic as usize, i);
        }
    }

    #[test]
    fn difficulty_parses_known_tags_only() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        let err = "expert".parse::<Difficulty>().unwrap_err();
        assert!(matches!(err, Error::InvalidDifficulty(ref s) if s == "expert"));
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        let slot = TemplateSlot::new(Topic::Fractions, Difficulty::Medium, 3).with_template_id(9);
        let json = serde_json::to_string(&slot).unwrap();
        assert!(json.contains("\"fractions\""));
        assert!(json.contains("\"medium\""));
        let back: TemplateSlot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, slot);
    }

    #[test]
    fn request_json_defaults() {
        let req = QuestionRequest::from_json(r#"{"topic":"algebra"}"#).unwrap();
        assert_eq!(req, QuestionRequest::new(Topic::Algebra));
        let req = QuestionRequest::from_json(r#"{"topic":"algebra","difficulty":"hard","seed":5}"#).unwrap();
        assert_eq!(req.difficulty, Difficulty::Hard);
        assert_eq!(req.seed, Some(5));
        assert!(QuestionRequest::from_json(r#"{"topic":"algebra","difficulty":"insane"}"#).is_err());
    }
}
