//! Test blueprint: the configuration unit behind one multi-version test.

use serde::{Deserialize, Serialize};

use crate::question_engine::{
    distributor::distribute,
    error::{Error, Result},
    models::{Difficulty, TemplateSlot, Topic},
};

pub const MAX_QUESTIONS: u32 = 50;
pub const MAX_VERSIONS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestBlueprint {
    pub title: String,
    /// May be empty; the distributor then substitutes the default topic.
    #[serde(default)]
    pub topics: Vec<Topic>,
    pub difficulty: Difficulty,
    pub num_questions: u32,
    #[serde(default = "default_versions")]
    pub num_versions: u32,
}

fn default_versions() -> u32 {
    1
}

impl TestBlueprint {
    /// Decode and validate a blueprint from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let blueprint: TestBlueprint = serde_json::from_str(json)?;
        blueprint.validate()?;
        Ok(blueprint)
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::InvalidBlueprint("title must not be empty".into()));
        }
        if !(1..=MAX_QUESTIONS).contains(&self.num_questions) {
            return Err(Error::InvalidBlueprint(format!(
                "num_questions must be between 1 and {MAX_QUESTIONS}, got {}",
                self.num_questions
            )));
        }
        if !(1..=MAX_VERSIONS).contains(&self.num_versions) {
            return Err(Error::InvalidBlueprint(format!(
                "num_versions must be between 1 and {MAX_VERSIONS}, got {}",
                self.num_versions
            )));
        }
        Ok(())
    }

    /// Template slots for this blueprint, without ids.
    pub fn plan(&self) -> Vec<TemplateSlot> {
        distribute(&self.topics, self.difficulty, self.num_questions)
    }

    pub fn version_numbers(&self) -> std::ops::RangeInclusive<u32> {
        1..=self.num_versions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "title": "Unit 3 review",
        "topics": ["fractions", "decimals", "percentages"],
        "difficulty": "medium",
        "num_questions": 10
    }"#;

    #[test]
    fn decodes_with_default_versions() {
        let bp = TestBlueprint::from_json(JSON).unwrap();
        assert_eq!(bp.num_versions, 1);
        assert_eq!(bp.topics, [Topic::Fractions, Topic::Decimals, Topic::Percentages]);
        assert_eq!(bp.version_numbers().collect::<Vec<_>>(), [1]);
    }

    #[test]
    fn plan_distributes_questions() {
        let bp = TestBlueprint::from_json(JSON).unwrap();
        let slots = bp.plan();
        assert_eq!(slots.len(), 10);
        assert_eq!(slots.iter().filter(|s| s.topic == Topic::Fractions).count(), 4);
        assert!(slots.iter().all(|s| s.difficulty == Difficulty::Medium));
    }

    #[test]
    fn bounds_are_enforced() {
        let mut bp = TestBlueprint::from_json(JSON).unwrap();
        bp.num_questions = 0;
        assert!(matches!(bp.validate(), Err(Error::InvalidBlueprint(_))));
        bp.num_questions = 51;
        assert!(bp.validate().is_err());
        bp.num_questions = 50;
        bp.num_versions = 101;
        assert!(bp.validate().is_err());
        bp.num_versions = 100;
        assert!(bp.validate().is_ok());
        bp.title = "   ".into();
        assert!(bp.validate().is_err());
    }

    #[test]
    fn unknown_tags_fail_to_decode() {
        let bad = JSON.replace("medium", "expert");
        assert!(matches!(TestBlueprint::from_json(&bad), Err(Error::Serialization(_))));
    }
}
