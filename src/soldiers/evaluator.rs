//! Evaluator soldier ("Judge of Nothingness")
//!
//! Rescores every entity in one full-collection rewrite. Power first grows
//! with accumulated activations, then is scaled by a relevance score in
//! (0, 1], with the global floor applied last.

use rayon::prelude::*;
use std::time::SystemTime;

use crate::entity::{Entity, MIN_POWER};

/// One evaluator pass: rewrite of the whole population
///
/// Every entity gets one activation, a recomputed power, and a refreshed
/// `last_activity`. Runs the rewrite through rayon once the population
/// reaches `parallel_threshold`; below that, thread overhead isn't worth it.
pub fn evaluate_population(entities: &[Entity], parallel_threshold: usize) -> Vec<Entity> {
    let now = SystemTime::now();

    if entities.len() >= parallel_threshold {
        entities.par_iter().map(|e| evaluate(e, now)).collect()
    } else {
        entities.iter().map(|e| evaluate(e, now)).collect()
    }
}

fn evaluate(entity: &Entity, now: SystemTime) -> Entity {
    let activation_count = entity.activation_count + 1;
    let grown = entity.power * (1.0 + f64::from(activation_count) * 0.01);
    let power = (grown * relevance_score(entity, activation_count)).max(MIN_POWER);

    Entity {
        power,
        activation_count,
        last_activity: now,
        ..entity.clone()
    }
}

/// Relevance in (0, 1]: base 0.3, plus word count / 50, plus capped
/// activation credit
fn relevance_score(entity: &Entity, activation_count: u32) -> f64 {
    let content_factor = entity.word_count() as f64 / 50.0;
    let activity_factor = (f64::from(activation_count) * 0.01).min(1.0);
    (0.3 + content_factor + activity_factor).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pass_scoring() {
        // power 1.0, activation 0, three words:
        // activation -> 1, grown = 1.01, relevance = 0.3 + 3/50 + 0.01 = 0.37
        let entity = Entity::new("a b c", 1.0, "primary", 0);
        let evaluated = evaluate_population(&[entity], usize::MAX);

        assert_eq!(evaluated.len(), 1);
        assert_eq!(evaluated[0].activation_count, 1);
        assert!((evaluated[0].power - 1.01 * 0.37).abs() < 1e-9);
        assert!((evaluated[0].power - 0.3737).abs() < 1e-9);
    }

    #[test]
    fn test_empty_population_yields_empty() {
        assert!(evaluate_population(&[], usize::MAX).is_empty());
    }

    #[test]
    fn test_power_floor_holds_under_repeated_passes() {
        let mut population = vec![Entity::new("x", 0.1, "primary", 0)];
        for _ in 0..200 {
            population = evaluate_population(&population, usize::MAX);
            assert!(population[0].power >= MIN_POWER);
        }
        assert_eq!(population[0].activation_count, 200);
    }

    #[test]
    fn test_relevance_is_capped_at_one() {
        // 60 words pushes content_factor past the cap on its own.
        let long_content = vec!["word"; 60].join(" ");
        let entity = Entity::new(long_content, 2.0, "processed_doc", 150);
        let evaluated = evaluate_population(&[entity], usize::MAX);

        // relevance capped at 1.0, so power = 2.0 * (1 + 151 * 0.01)
        assert!((evaluated[0].power - 2.0 * 2.51).abs() < 1e-9);
    }

    #[test]
    fn test_parallel_and_serial_rewrites_agree() {
        let population: Vec<Entity> = (0..64)
            .map(|i| Entity::new(format!("entity number {i}"), 0.5 + i as f64 * 0.1, "primary", i))
            .collect();

        let serial = evaluate_population(&population, usize::MAX);
        let parallel = evaluate_population(&population, 1);

        assert_eq!(serial.len(), parallel.len());
        for (s, p) in serial.iter().zip(&parallel) {
            assert_eq!(s.id, p.id);
            assert_eq!(s.activation_count, p.activation_count);
            assert!((s.power - p.power).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_pass_preserves_identity_and_order() {
        let population: Vec<Entity> = (0..5)
            .map(|i| Entity::new(format!("e{i}"), 1.0, "secondary", 0))
            .collect();
        let evaluated = evaluate_population(&population, usize::MAX);

        for (before, after) in population.iter().zip(&evaluated) {
            assert_eq!(before.id, after.id);
            assert_eq!(before.content, after.content);
            assert_eq!(before.creation_time, after.creation_time);
        }
    }
}
