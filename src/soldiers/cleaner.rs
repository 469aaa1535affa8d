//! Cleaner soldier ("The Unchained")
//!
//! Prunes the population back to the cap, keeping the strongest. The cap is
//! soft between ticks: the generator refuses to grow past it, but the
//! document processor may overshoot until the next cleanup pass.

use crate::entity::Entity;

/// Result of one pruning pass
#[derive(Debug)]
pub struct PruneResult {
    /// The surviving population, strongest first
    pub kept: Vec<Entity>,
    pub destroyed: usize,
}

/// One cleaner pass over a population snapshot
///
/// Returns `None` when the population is already within the cap. Otherwise
/// sorts by power descending and keeps the top `max_entities`. The sort is
/// stable, so entities with equal power survive in snapshot order.
pub fn prune(entities: &[Entity], max_entities: usize) -> Option<PruneResult> {
    if entities.len() <= max_entities {
        return None;
    }

    let mut sorted = entities.to_vec();
    sorted.sort_by(|a, b| b.power.total_cmp(&a.power));

    let destroyed = sorted.len() - max_entities;
    sorted.truncate(max_entities);

    Some(PruneResult {
        kept: sorted,
        destroyed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(content: &str, power: f64) -> Entity {
        Entity::new(content, power, "primary", 0)
    }

    #[test]
    fn test_population_within_cap_is_noop() {
        let population = vec![entity("a", 1.0), entity("b", 0.5)];
        assert!(prune(&population, 2).is_none());
        assert!(prune(&population, 10).is_none());
        assert!(prune(&[], 1).is_none());
    }

    #[test]
    fn test_keeps_strongest_two_of_three() {
        let population = vec![entity("a", 1.0), entity("b", 0.5), entity("c", 0.2)];
        let result = prune(&population, 2).unwrap();

        assert_eq!(result.destroyed, 1);
        assert_eq!(result.kept.len(), 2);
        assert_eq!(result.kept[0].content, "a");
        assert_eq!(result.kept[1].content, "b");
    }

    #[test]
    fn test_equal_powers_survive_in_snapshot_order() {
        let population = vec![
            entity("first", 0.5),
            entity("second", 0.5),
            entity("third", 0.5),
        ];
        let result = prune(&population, 2).unwrap();

        assert_eq!(result.kept[0].content, "first");
        assert_eq!(result.kept[1].content, "second");
    }

    #[test]
    fn test_large_overshoot_pruned_in_one_pass() {
        let population: Vec<Entity> = (0..120)
            .map(|i| entity(&format!("e{i}"), i as f64))
            .collect();
        let result = prune(&population, 50).unwrap();

        assert_eq!(result.kept.len(), 50);
        assert_eq!(result.destroyed, 70);
        // Strongest first: powers 119 down to 70.
        assert!((result.kept[0].power - 119.0).abs() < f64::EPSILON);
        assert!((result.kept[49].power - 70.0).abs() < f64::EPSILON);
    }
}
