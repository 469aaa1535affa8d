//! Property tests for the engine's core invariants
//!
//! Power floor, population cap, token filtering, and log capping must hold
//! for arbitrary populations and inputs, not just the handcrafted cases in
//! the unit tests.

use proptest::prelude::*;

use shadow_swarm::entity::{Entity, MIN_POWER};
use shadow_swarm::soldiers::{cleaner, evaluator, processor};
use shadow_swarm::store::{ActivityLog, LogLevel};

fn arb_entities(max: usize) -> impl Strategy<Value = Vec<Entity>> {
    prop::collection::vec((0.1f64..10.0, 0u32..100), 0..max).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (power, activations))| {
                Entity::new(format!("entity {i}"), power, "primary", activations)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_evaluator_preserves_count_and_power_floor(entities in arb_entities(40)) {
        let evaluated = evaluator::evaluate_population(&entities, usize::MAX);

        prop_assert_eq!(evaluated.len(), entities.len());
        for (before, after) in entities.iter().zip(&evaluated) {
            prop_assert!(after.power >= MIN_POWER);
            prop_assert_eq!(after.activation_count, before.activation_count + 1);
            prop_assert_eq!(after.id, before.id);
        }
    }

    #[test]
    fn prop_cleaner_never_exceeds_cap(
        entities in arb_entities(60),
        max in 1usize..80,
    ) {
        match cleaner::prune(&entities, max) {
            Some(result) => {
                prop_assert!(entities.len() > max);
                prop_assert_eq!(result.kept.len(), max);
                prop_assert_eq!(result.destroyed, entities.len() - max);

                // Survivors come out strongest first.
                for pair in result.kept.windows(2) {
                    prop_assert!(pair[0].power >= pair[1].power);
                }

                // Nothing destroyed was stronger than any survivor.
                let weakest_kept = result.kept.last().map(|e| e.power).unwrap_or(f64::MAX);
                let mut ordered = entities.clone();
                ordered.sort_by(|a, b| b.power.total_cmp(&a.power));
                for dropped in &ordered[max..] {
                    prop_assert!(dropped.power <= weakest_kept);
                }
            }
            None => prop_assert!(entities.len() <= max),
        }
    }

    #[test]
    fn prop_tokenizer_keeps_only_long_tokens(text in "[a-z ]{0,80}") {
        let entities = processor::tokenize_document(&text);

        let expected = text
            .split_whitespace()
            .filter(|t| t.chars().count() > 2)
            .count();
        prop_assert_eq!(entities.len(), expected);

        for entity in &entities {
            prop_assert!(entity.content.chars().count() > 2);
            prop_assert!((entity.power - 0.8).abs() < f64::EPSILON);
            prop_assert_eq!(&entity.entity_type, "processed_doc");
            prop_assert_eq!(entity.activation_count, 1);
        }
    }

    #[test]
    fn prop_activity_log_is_capped_newest_first(
        messages in prop::collection::vec("[a-z]{1,12}", 0..300),
    ) {
        let log = ActivityLog::new();
        for message in &messages {
            log.append(LogLevel::Info, message.clone());
        }

        prop_assert!(log.len() <= 100);
        if let Some(last) = messages.last() {
            prop_assert_eq!(&log.entries()[0].message, last);
        }
    }
}
