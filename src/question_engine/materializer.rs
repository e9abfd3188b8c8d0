//! Version Materializer: turns stored template slots into concrete questions.
//!
//! Every (template_id, version) pair maps to one seed,
//! `template_id * 1000 + version`, so any version can be regenerated without
//! storage. Seeds from different templates collide once `version >= 1000`;
//! such versions are still produced but logged at warn level.

use tracing::{debug, warn};

use crate::question_engine::{
    error::{Error, Result},
    generator::generate_seeded,
    models::{GeneratedQuestion, TemplateSlot, VersionSet},
};

/// Multiplier separating template ids in seed space.
pub const SEED_STRIDE: u64 = 1000;

/// `template_id * 1000 + version`, checked for overflow.
pub fn version_seed(template_id: u64, version: u32) -> Result<u64> {
    template_id
        .checked_mul(SEED_STRIDE)
        .and_then(|s| s.checked_add(u64::from(version)))
        .ok_or(Error::SeedOverflow { template_id, version })
}

/// Generate one question per slot for `version_number`, preserving slot order.
///
/// Every slot must already carry a `template_id`; versions start at 1.
pub fn materialize(slots: &[TemplateSlot], version_number: u32) -> Result<Vec<GeneratedQuestion>> {
    if version_number == 0 {
        return Err(Error::InvalidVersion(version_number));
    }
    if u64::from(version_number) >= SEED_STRIDE {
        warn!(version_number, "version number may collide with another template's seeds");
    }

    slots
        .iter()
        .map(|slot| {
            let template_id = slot
                .template_id
                .ok_or(Error::MissingTemplateId { order: slot.order })?;
            let seed = version_seed(template_id, version_number)?;
            debug!(template_id, version_number, seed, topic = %slot.topic, "materializing slot");

            let p = generate_seeded(slot.topic, slot.difficulty, seed);
            Ok(GeneratedQuestion {
                template_id,
                order: slot.order,
                variant: p.variant,
                question_text: p.question,
                answer: p.answer,
                solution_text: p.solution,
            })
        })
        .collect()
}

/// Materialize versions `1..=version_count` in one pass.
pub fn materialize_versions(slots: &[TemplateSlot], version_count: u32) -> Result<Vec<VersionSet>> {
    (1..=version_count)
        .map(|version_number| {
            Ok(VersionSet {
                version_number,
                questions: materialize(slots, version_number)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question_engine::models::{Difficulty, Topic};

    fn slot(template_id: u64, topic: Topic, order: u32) -> TemplateSlot {
        TemplateSlot::new(topic, Difficulty::Easy, order).with_template_id(template_id)
    }

    #[test]
    fn seed_formula() {
        assert_eq!(version_seed(7, 3).unwrap(), 7003);
        assert_eq!(version_seed(0, 1).unwrap(), 1);
        assert!(matches!(
            version_seed(u64::MAX / 10, 1),
            Err(Error::SeedOverflow { version: 1, .. })
        ));
    }

    #[test]
    fn same_slot_and_version_is_identical() {
        let slots = [slot(7, Topic::Addition, 1)];
        let a = materialize(&slots, 3).unwrap();
        let b = materialize(&slots, 3).unwrap();
        assert_eq!(a, b);
        let expected = generate_seeded(Topic::Addition, Difficulty::Easy, 7003);
        assert_eq!(a[0].question_text, expected.question);
        assert_eq!(a[0].answer, expected.answer);
        assert_eq!(a[0].template_id, 7);
        assert_eq!(a[0].order, 1);
    }

    #[test]
    fn output_follows_slot_order() {
        let slots = [slot(10, Topic::Geometry, 1), slot(11, Topic::Statistics, 2), slot(12, Topic::Algebra, 3)];
        let qs = materialize(&slots, 1).unwrap();
        let ids: Vec<u64> = qs.iter().map(|q| q.template_id).collect();
        assert_eq!(ids, [10, 11, 12]);
        assert!(qs[1].variant.starts_with("statistics:"));
    }

    #[test]
    fn missing_template_id_is_an_error() {
        let slots = [slot(1, Topic::Addition, 1), TemplateSlot::new(Topic::Division, Difficulty::Easy, 2)];
        let err = materialize(&slots, 1).unwrap_err();
        assert!(matches!(err, Error::MissingTemplateId { order: 2 }));
    }

    #[test]
    fn version_zero_is_rejected() {
        let err = materialize(&[slot(1, Topic::Addition, 1)], 0).unwrap_err();
        assert!(matches!(err, Error::InvalidVersion(0)));
    }

    #[test]
    fn many_versions_in_one_pass() {
        let slots = [slot(3, Topic::Multiplication, 1), slot(4, Topic::Fractions, 2)];
        let sets = materialize_versions(&slots, 3).unwrap();
        assert_eq!(sets.len(), 3);
        for (i, set) in sets.iter().enumerate() {
            assert_eq!(set.version_number, i as u32 + 1);
            assert_eq!(set.questions, materialize(&slots, set.version_number).unwrap());
        }
        assert!(materialize_versions(&slots, 0).unwrap().is_empty());
    }

    #[test]
    fn large_versions_still_materialize() {
        // 1 * 1000 + 1000 == 2 * 1000 + 0: the known collision range.
        let qs = materialize(&[slot(1, Topic::Addition, 1)], 1000).unwrap();
        assert_eq!(qs.len(), 1);
    }
}
