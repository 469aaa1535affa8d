//! Shared mutable state: entity store, document queue, activity log
//!
//! These are the only resources shared between the concurrent soldier
//! processes. Each exposes a coarse exclusive-access surface so every
//! soldier tick is one atomic read-compute-install cycle, never a
//! half-visible mutation.

pub mod entities;
pub mod log;
pub mod queue;

pub use entities::EntityStore;
pub use log::{ActivityLog, LogEntry, LogLevel};
pub use queue::DocumentQueue;
