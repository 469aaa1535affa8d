//! Derived system statistics
//!
//! The counters are monotonic running tallies bumped by whichever process
//! creates or destroys entities; `average_power` is recomputed fresh from
//! the current population on every change, never adjusted incrementally, so
//! it self-corrects even if a counter missed a mutation. `total_created -
//! total_destroyed` is therefore an approximation of the live population,
//! not a conservation law.

use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::entity::Entity;

/// Derived, non-authoritative statistics over the simulation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SystemStats {
    pub total_created: u64,
    pub total_destroyed: u64,
    pub documents_processed: u64,
    /// Arithmetic mean power of the current population; 0.0 when empty
    pub average_power: f64,
}

/// Recomputes derived statistics whenever the population changes
#[derive(Debug, Default)]
pub struct StatsAggregator {
    inner: Mutex<SystemStats>,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SystemStats> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn record_created(&self, count: u64) {
        self.lock().total_created += count;
    }

    pub fn record_destroyed(&self, count: u64) {
        self.lock().total_destroyed += count;
    }

    pub fn record_document_processed(&self) {
        self.lock().documents_processed += 1;
    }

    /// Recompute `average_power` from the new population
    ///
    /// Triggered after every install, never on its own timer. Idempotent for
    /// an unchanged population and leaves the monotonic counters alone.
    pub fn on_population_changed(&self, entities: &[Entity]) {
        let average = if entities.is_empty() {
            0.0
        } else {
            entities.iter().map(|e| e.power).sum::<f64>() / entities.len() as f64
        };
        self.lock().average_power = average;
    }

    pub fn stats(&self) -> SystemStats {
        *self.lock()
    }
}
