//! Periodic task scheduling for the soldier processes
//!
//! Each soldier runs on its own fixed interval. Ticks of one task are
//! serialized by construction (one loop per task); there is no ordering
//! guarantee across tasks. Slow ticks skip rather than queue, and shutdown
//! halts future ticks without rolling back completed ones.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::core::error::Result;
use crate::store::{ActivityLog, LogLevel};

/// Spawn one periodic soldier loop
///
/// `tick` returns whether the pass did useful work. A failing pass is
/// caught here, logged at ERROR, and must never halt the other tasks; no
/// current pass actually fails, but the boundary stays in place for future
/// fatal conditions.
pub(crate) fn spawn_periodic<F>(
    name: &'static str,
    period: Duration,
    log: Arc<ActivityLog>,
    mut shutdown: watch::Receiver<bool>,
    mut tick: F,
) -> JoinHandle<()>
where
    F: FnMut() -> Result<bool> + Send + 'static,
{
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first interval tick fires immediately; consume it so the
        // first pass lands one full period after start.
        interval.tick().await;

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    match tick() {
                        Ok(true) => tracing::trace!(task = name, "tick did work"),
                        Ok(false) => tracing::trace!(task = name, "tick was a no-op"),
                        Err(e) => {
                            tracing::error!(task = name, error = %e, "periodic task failed");
                            log.append(LogLevel::Error, format!("[{name}] task failed: {e}"));
                        }
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        tracing::debug!(task = name, "periodic task stopping");
                        break;
                    }
                }
            }
        }
    })
}
