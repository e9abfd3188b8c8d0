//! Template Distributor: spreads a question count across topics.
//!
//! Counts are assigned round-robin in caller order, so per-topic counts
//! differ by at most one and earlier topics receive the remainder.

use tracing::{debug, warn};

use crate::question_engine::models::{Difficulty, TemplateSlot, Topic};

/// Per-topic question counts, in the caller's topic order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionPlan {
    counts: Vec<(Topic, u32)>,
    used_default_topic: bool,
}

impl DistributionPlan {
    /// Plan `total_count` questions over `topics`.
    ///
    /// Duplicate topics keep their first position. An empty list is replaced
    /// by [`Topic::DEFAULT`].
    pub fn new(topics: &[Topic], total_count: u32) -> Self {
        let mut unique: Vec<Topic> = Vec::with_capacity(topics.len());
        for &t in topics {
            if !unique.contains(&t) {
                unique.push(t);
            }
        }
        let used_default_topic = unique.is_empty();
        if used_default_topic {
            warn!(fallback = %Topic::DEFAULT, "empty topic selection, using default topic");
            unique.push(Topic::DEFAULT);
        }

        // Closed form of walking the list one increment per topic until the
        // total is reached.
        let n = unique.len() as u32;
        let (base, remainder) = (total_count / n, total_count % n);
        let counts = unique
            .into_iter()
            .enumerate()
            .map(|(i, t)| (t, base + u32::from((i as u32) < remainder)))
            .collect();
        DistributionPlan { counts, used_default_topic }
    }

    pub fn counts(&self) -> &[(Topic, u32)] {
        &self.counts
    }

    /// True when the topic list was empty and [`Topic::DEFAULT`] was substituted.
    pub fn used_default_topic(&self) -> bool {
        self.used_default_topic
    }

    pub fn count_for(&self, topic: Topic) -> u32 {
        self.counts
            .iter()
            .find(|(t, _)| *t == topic)
            .map_or(0, |&(_, c)| c)
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&(_, c)| c).sum()
    }

    /// Emit slots topic by topic with `order` running 1..=total.
    pub fn slots(&self, difficulty: Difficulty) -> Vec<TemplateSlot> {
        let mut slots = Vec::with_capacity(self.total() as usize);
        for &(topic, count) in &self.counts {
            for _ in 0..count {
                let order = slots.len() as u32 + 1;
                slots.push(TemplateSlot::new(topic, difficulty, order));
            }
        }
        slots
    }
}

/// Lay out `total_count` template slots for `topics` at a fixed difficulty.
///
/// Slots carry no `template_id`; the caller assigns one after storing them.
pub fn distribute(topics: &[Topic], difficulty: Difficulty, total_count: u32) -> Vec<TemplateSlot> {
    let plan = DistributionPlan::new(topics, total_count);
    debug!(?plan, %difficulty, "distributed template slots");
    plan.slots(difficulty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remainder_goes_to_earlier_topics() {
        let slots = distribute(&[Topic::Addition, Topic::Subtraction], Difficulty::Easy, 5);
        let topics: Vec<Topic> = slots.iter().map(|s| s.topic).collect();
        assert_eq!(
            topics,
            [Topic::Addition, Topic::Addition, Topic::Addition, Topic::Subtraction, Topic::Subtraction]
        );
        let orders: Vec<u32> = slots.iter().map(|s| s.order).collect();
        assert_eq!(orders, [1, 2, 3, 4, 5]);
        assert!(slots.iter().all(|s| s.difficulty == Difficulty::Easy && s.template_id.is_none()));
    }

    #[test]
    fn plan_counts() {
        let plan = DistributionPlan::new(&[Topic::Algebra, Topic::Geometry, Topic::Statistics], 10);
        assert_eq!(
            plan.counts(),
            &[(Topic::Algebra, 4), (Topic::Geometry, 3), (Topic::Statistics, 3)]
        );
        assert_eq!(plan.total(), 10);
        assert_eq!(plan.count_for(Topic::Addition), 0);
    }

    #[test]
    fn more_topics_than_questions() {
        let plan = DistributionPlan::new(&[Topic::Decimals, Topic::Fractions, Topic::Division], 2);
        assert_eq!(plan.count_for(Topic::Decimals), 1);
        assert_eq!(plan.count_for(Topic::Fractions), 1);
        assert_eq!(plan.count_for(Topic::Division), 0);
        assert_eq!(plan.slots(Difficulty::Hard).len(), 2);
    }

    #[test]
    fn empty_topics_use_default() {
        let slots = distribute(&[], Difficulty::Medium, 3);
        assert_eq!(slots.len(), 3);
        assert!(slots.iter().all(|s| s.topic == Topic::DEFAULT));
    }

    #[test]
    fn default_substitution_is_reported() {
        let plan = DistributionPlan::new(&[], 4);
        assert!(plan.used_default_topic());
        assert_eq!(plan.counts(), &[(Topic::DEFAULT, 4)]);
        assert!(!DistributionPlan::new(&[Topic::Addition], 4).used_default_topic());
    }

    #[test]
    fn duplicate_topics_are_merged() {
        let plan = DistributionPlan::new(&[Topic::Geometry, Topic::Algebra, Topic::Geometry], 5);
        assert_eq!(plan.counts(), &[(Topic::Geometry, 3), (Topic::Algebra, 2)]);
    }

    #[test]
    fn zero_total_gives_no_slots() {
        assert!(distribute(&[Topic::Addition], Difficulty::Easy, 0).is_empty());
    }
}
