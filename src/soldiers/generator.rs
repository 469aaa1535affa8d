//! Generator soldier ("Chaos Originator")
//!
//! Spawns new entities by mutating sampled parents. Child power is parent
//! power scaled by a mutation rate in [0.05, 0.20), so children are
//! typically far weaker than their parents: dilution on reproduction is the
//! intended selection pressure, not decay gone wrong.

use rand::Rng;

use crate::core::config::SimulationConfig;
use crate::entity::{Entity, MIN_POWER};

/// Flavor labels appended to a child's lineage string
const MUTATION_LABELS: [&str; 3] = ["genetic drift", "self-evolution", "cosmic fission"];

/// One generator pass over a population snapshot
///
/// Returns the children to append. Empty when the pass is a no-op: nothing
/// to sample from, or the population is already at/above the cap. Samples
/// up to `sample_size` parents uniformly with replacement; each sampled
/// parent produces exactly one child.
pub fn spawn_children(
    parents: &[Entity],
    config: &SimulationConfig,
    rng: &mut impl Rng,
) -> Vec<Entity> {
    if parents.is_empty() || parents.len() >= config.max_entities {
        return Vec::new();
    }

    let sample_size = config.sample_size.min(parents.len());
    let mut children = Vec::with_capacity(sample_size);

    for _ in 0..sample_size {
        let parent = &parents[rng.gen_range(0..parents.len())];
        children.push(mutate(parent, rng));
    }

    children
}

/// Produce one mutated child of the given parent
fn mutate(parent: &Entity, rng: &mut impl Rng) -> Entity {
    let mutation_rate: f64 = rng.gen_range(0.05..0.20);
    let power = (parent.power * rng.gen_range(0.8..1.2) * mutation_rate).max(MIN_POWER);

    let label = MUTATION_LABELS[rng.gen_range(0..MUTATION_LABELS.len())];
    let content = format!("{} ← {}", parent.content, label);
    let entity_type = format!("child_{}", parent.entity_type);

    Entity::new(content, power, entity_type, 0)
}
