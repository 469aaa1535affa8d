//! The four soldier processes and their identity records
//!
//! Each soldier is an independently scheduled periodic process with a fixed
//! identity. The pass logic lives in the submodules as pure functions over
//! a population snapshot; the engine glues them to the shared state. A
//! soldier's record is mutated only by its own process and is read-only to
//! everyone else.

pub mod cleaner;
pub mod evaluator;
pub mod generator;
pub mod processor;

use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::SystemTime;

/// The four fixed soldier identities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoldierName {
    /// Spawns mutated children from sampled parents
    ChaosOriginator,
    /// Rescores every entity's power each pass
    JudgeOfNothingness,
    /// Prunes the population back to the cap
    TheUnchained,
    /// Tokenizes queued documents into entities
    MasterOfShadow,
}

impl SoldierName {
    pub const ALL: [Self; 4] = [
        Self::ChaosOriginator,
        Self::JudgeOfNothingness,
        Self::TheUnchained,
        Self::MasterOfShadow,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::ChaosOriginator => "Chaos Originator",
            Self::JudgeOfNothingness => "Judge of Nothingness",
            Self::TheUnchained => "The Unchained",
            Self::MasterOfShadow => "Master of Shadow",
        }
    }
}

impl std::fmt::Display for SoldierName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Identity record of one soldier process
///
/// `operations` counts only ticks that did useful work; no-op ticks (empty
/// store, empty queue, population at cap) leave it unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Soldier {
    pub name: SoldierName,
    pub operations: u64,
    pub last_operation: SystemTime,
    pub active: bool,
}

impl Soldier {
    fn new(name: SoldierName) -> Self {
        Self {
            name,
            operations: 0,
            last_operation: SystemTime::now(),
            active: true,
        }
    }
}

/// Registry of the four soldier records
///
/// A soldier never replaces its own identity; the registry only bumps
/// counters and flips the active flag.
#[derive(Debug)]
pub struct SoldierRegistry {
    inner: Mutex<Vec<Soldier>>,
}

impl SoldierRegistry {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(SoldierName::ALL.map(Soldier::new).to_vec()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Soldier>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record one useful tick for the named soldier
    pub fn record_operation(&self, name: SoldierName) {
        let mut soldiers = self.lock();
        if let Some(soldier) = soldiers.iter_mut().find(|s| s.name == name) {
            soldier.operations += 1;
            soldier.last_operation = SystemTime::now();
        }
    }

    /// Flip the active flag for every soldier (used at shutdown)
    pub fn set_all_active(&self, active: bool) {
        for soldier in self.lock().iter_mut() {
            soldier.active = active;
        }
    }

    /// Clone of all four records
    pub fn soldiers(&self) -> Vec<Soldier> {
        self.lock().clone()
    }

    pub fn operations(&self, name: SoldierName) -> u64 {
        self.lock()
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.operations)
            .unwrap_or(0)
    }
}

impl Default for SoldierRegistry {
    fn default() -> Self {
        Self::new()
    }
}
