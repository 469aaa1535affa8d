//! Entity data model
//!
//! An entity is one unit of simulated population: a text content, a
//! floating-point power score, and lineage metadata. Entities are created by
//! the generator (mutated children), the document processor (tokenized
//! words), or startup seeding, and are destroyed only by the cleaner.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use uuid::Uuid;

/// Floor for entity power
///
/// Enforced everywhere power is assigned or recomputed, so repeated
/// multiplicative shrinkage can never collapse power to zero or negative.
pub const MIN_POWER: f64 = 0.1;

/// Unique identifier for entities, assigned at creation and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One unit of simulated population data
///
/// `entity_type` is a plain string because child types compound without
/// bound (`child_child_primary`, ...) as generations stack. That unbounded
/// string growth is an accepted property of the simulation, not a bug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    /// A single token, or a composed lineage string (`"parent ← label"`)
    pub content: String,
    /// Fitness score, always >= `MIN_POWER`
    pub power: f64,
    pub entity_type: String,
    pub creation_time: SystemTime,
    /// Refreshed on every evaluation touch
    pub last_activity: SystemTime,
    /// Incremented once per evaluator pass, never decremented
    pub activation_count: u32,
}

impl Entity {
    /// Create a new entity with both timestamps set to now
    ///
    /// The power floor is applied here so no creation path can produce an
    /// entity below `MIN_POWER`.
    pub fn new(
        content: impl Into<String>,
        power: f64,
        entity_type: impl Into<String>,
        activation_count: u32,
    ) -> Self {
        let now = SystemTime::now();
        Self {
            id: EntityId::new(),
            content: content.into(),
            power: power.max(MIN_POWER),
            entity_type: entity_type.into(),
            creation_time: now,
            last_activity: now,
            activation_count,
        }
    }

    /// Number of whitespace-separated words in the content
    ///
    /// This is the entire "parsing" the simulation does; lineage arrows
    /// count as words just like real tokens.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}
