//! Shadow Swarm - Self-Running Entity Population Simulation
//!
//! A population of lightweight entities is continuously generated, scored,
//! pruned, and fed by queued text documents. Four independent periodic
//! processes ("soldiers") mutate the shared population under concurrent
//! timers:
//!
//! - Generator ("Chaos Originator"): spawns diluted children from sampled
//!   parents
//! - Evaluator ("Judge of Nothingness"): rescores every entity each pass
//! - Cleaner ("The Unchained"): prunes the population back to the cap
//! - Processor ("Master of Shadow"): tokenizes queued documents into
//!   entities
//!
//! Every tick is one atomic read-compute-install cycle against the shared
//! [`store::EntityStore`]; statistics are recomputed on every population
//! change. The presentation layer is external: it submits raw text via
//! [`engine::ShadowEngine::submit_text`] and renders immutable
//! [`engine::Snapshot`]s.

pub mod core;
pub mod engine;
pub mod entity;
pub mod soldiers;
pub mod stats;
pub mod store;

pub use crate::core::config::SimulationConfig;
pub use crate::core::error::{Result, ShadowError};
pub use crate::engine::{ShadowEngine, Snapshot};
pub use crate::entity::{Entity, EntityId, MIN_POWER};
