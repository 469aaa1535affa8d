//! Capped activity log of human-readable simulation events
//!
//! This is the domain-visible log rendered by the presentation layer, kept
//! separate from `tracing` diagnostics. It is a ring, not a durable log:
//! only the most recent entries survive.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::SystemTime;

/// Default retained entry count
pub const DEFAULT_LOG_CAPACITY: usize = 100;

/// Severity of an activity log entry
///
/// `Error` is reserved for the scheduler boundary; no soldier pass emits it
/// under normal operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Debug => "DEBUG",
        };
        write!(f, "{name}")
    }
}

/// One human-readable event emitted by a simulation process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: SystemTime,
    pub level: LogLevel,
    pub message: String,
}

/// Append-only capped ring of log entries, newest first
///
/// Each append prepends the new entry and truncates to the capacity; older
/// entries are silently discarded.
#[derive(Debug)]
pub struct ActivityLog {
    inner: Mutex<VecDeque<LogEntry>>,
    capacity: usize,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<LogEntry>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn append(&self, level: LogLevel, message: impl Into<String>) {
        let entry = LogEntry {
            timestamp: SystemTime::now(),
            level,
            message: message.into(),
        };
        let mut entries = self.lock();
        entries.push_front(entry);
        entries.truncate(self.capacity);
    }

    /// Clone of all retained entries, newest first
    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}
