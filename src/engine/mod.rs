//! The simulation engine
//!
//! Owns the shared state (entity store, document queue, activity log,
//! soldier registry, stats), seeds the starting population, and schedules
//! the four soldier processes. The presentation layer only ever sees this
//! surface: `submit_text` to push work in, `snapshot` to read state out.

mod scheduler;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::entity::Entity;
use crate::soldiers::{
    cleaner, evaluator, generator, processor, Soldier, SoldierName, SoldierRegistry,
};
use crate::stats::{StatsAggregator, SystemStats};
use crate::store::{ActivityLog, DocumentQueue, EntityStore, LogEntry, LogLevel};

/// Seed texts pushed onto the document queue verbatim at startup and also
/// tokenized inline, so the soldiers have a population to work on from the
/// first tick.
const SEED_TEXTS: [&str; 3] = [
    "the errant system begins its journey breaking every chain",
    "creative chaos rises out of absolute nothingness",
    "liberation from all bonds artificial and natural",
];

/// Read-only view of the simulation for rendering
///
/// Owned clones only; a snapshot never exposes references into the
/// engine's internal state.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub entities: Vec<Entity>,
    pub stats: SystemStats,
    /// Newest first
    pub logs: Vec<LogEntry>,
    pub soldiers: Vec<Soldier>,
    pub queue_size: usize,
}

/// The running simulation
///
/// Every soldier tick is one read-compute-install cycle under the entity
/// store's exclusive lock, so concurrent timers interleave only at tick
/// boundaries. Stats recomputation rides the install path of whichever
/// tick changed the population.
pub struct ShadowEngine {
    config: SimulationConfig,
    store: EntityStore,
    queue: DocumentQueue,
    log: Arc<ActivityLog>,
    soldiers: SoldierRegistry,
    stats: StatsAggregator,
    rng: Mutex<ChaCha8Rng>,
    shutdown_tx: watch::Sender<bool>,
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl ShadowEngine {
    /// Create an engine and seed its starting population
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let engine = Self {
            store: EntityStore::new(),
            queue: DocumentQueue::new(),
            log: Arc::new(ActivityLog::with_capacity(config.max_log_entries)),
            soldiers: SoldierRegistry::new(),
            stats: StatsAggregator::new(),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(config.seed)),
            shutdown_tx: watch::channel(false).0,
            handles: Mutex::new(Vec::new()),
            config,
        };
        engine.seed();
        Ok(engine)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Seed the queue and the starting population from the fixed texts
    ///
    /// Texts are queued verbatim (the processor will re-ingest them later)
    /// and tokenized inline: first word `primary`, the rest `secondary`,
    /// power rising with word position.
    fn seed(&self) {
        self.log.append(LogLevel::Info, "system initializing");

        let mut seeded = Vec::new();
        for text in SEED_TEXTS {
            self.queue.push(text.to_string());
            seeded.extend(tokenize_seed_text(text));
        }

        let count = seeded.len();
        self.store.update(|entities| {
            entities.extend(seeded);
            self.stats.on_population_changed(entities);
        });
        self.stats.record_created(count as u64);

        self.log.append(
            LogLevel::Info,
            format!("system initialized with {count} entities"),
        );
        tracing::info!(seeded = count, "starting population seeded");
    }

    /// Spawn the four periodic soldier tasks
    ///
    /// Safe to call once; subsequent calls while running are no-ops.
    pub fn start(self: Arc<Self>) {
        let mut handles = self
            .handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if !handles.is_empty() {
            return;
        }

        let engine = Arc::clone(&self);
        handles.push(scheduler::spawn_periodic(
            "generator",
            Duration::from_millis(self.config.generation_interval_ms),
            Arc::clone(&self.log),
            self.shutdown_tx.subscribe(),
            move || engine.run_generator_tick(),
        ));

        let engine = Arc::clone(&self);
        handles.push(scheduler::spawn_periodic(
            "evaluator",
            Duration::from_millis(self.config.evaluation_interval_ms),
            Arc::clone(&self.log),
            self.shutdown_tx.subscribe(),
            move || engine.run_evaluator_tick(),
        ));

        let engine = Arc::clone(&self);
        handles.push(scheduler::spawn_periodic(
            "cleaner",
            Duration::from_millis(self.config.cleanup_interval_ms),
            Arc::clone(&self.log),
            self.shutdown_tx.subscribe(),
            move || engine.run_cleaner_tick(),
        ));

        let engine = Arc::clone(&self);
        handles.push(scheduler::spawn_periodic(
            "processor",
            Duration::from_millis(self.config.processing_interval_ms),
            Arc::clone(&self.log),
            self.shutdown_tx.subscribe(),
            move || engine.run_processor_tick(),
        ));

        tracing::info!("soldier tasks started");
    }

    /// Stop all periodic tasks cleanly
    ///
    /// Halts future ticks only; completed ticks are never rolled back.
    pub async fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);

        let handles: Vec<JoinHandle<()>> = std::mem::take(
            &mut *self.handles.lock().unwrap_or_else(PoisonError::into_inner),
        );
        for handle in handles {
            let _ = handle.await;
        }

        self.soldiers.set_all_active(false);
        self.log.append(LogLevel::Info, "system shutdown: soldiers stand down");
        tracing::info!("engine stopped");
    }

    /// Queue raw text for processing
    ///
    /// Silently a no-op when the text is empty or whitespace-only after
    /// trimming.
    pub fn submit_text(&self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        self.queue.push(trimmed.to_string());
        self.log.append(LogLevel::Info, "new text queued for processing");
        tracing::debug!(chars = trimmed.chars().count(), "text submitted");
    }

    /// Read-only view of the current simulation state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            entities: self.store.snapshot(),
            stats: self.stats.stats(),
            logs: self.log.entries(),
            soldiers: self.soldiers.soldiers(),
            queue_size: self.queue.len(),
        }
    }

    /// One Generator tick: sample parents, append mutated children
    pub fn run_generator_tick(&self) -> Result<bool> {
        let created = self.store.update(|entities| {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            let children = generator::spawn_children(entities, &self.config, &mut *rng);
            if children.is_empty() {
                return 0;
            }
            let count = children.len();
            entities.extend(children);
            self.stats.on_population_changed(entities);
            count
        });

        if created == 0 {
            return Ok(false);
        }
        self.stats.record_created(created as u64);
        self.log.append(
            LogLevel::Debug,
            format!(
                "[{}] generated {created} new entities",
                SoldierName::ChaosOriginator
            ),
        );
        self.soldiers.record_operation(SoldierName::ChaosOriginator);
        Ok(true)
    }

    /// One Evaluator tick: full-collection rescore
    pub fn run_evaluator_tick(&self) -> Result<bool> {
        let evaluated = self.store.update(|entities| {
            if entities.is_empty() {
                return 0;
            }
            let rescored =
                evaluator::evaluate_population(entities, self.config.parallel_threshold);
            *entities = rescored;
            self.stats.on_population_changed(entities);
            entities.len()
        });

        if evaluated == 0 {
            return Ok(false);
        }
        self.soldiers.record_operation(SoldierName::JudgeOfNothingness);
        tracing::debug!(evaluated, "evaluation pass complete");
        Ok(true)
    }

    /// One Cleaner tick: prune the population back to the cap
    pub fn run_cleaner_tick(&self) -> Result<bool> {
        let destroyed = self.store.update(|entities| {
            match cleaner::prune(entities, self.config.max_entities) {
                Some(result) => {
                    let destroyed = result.destroyed;
                    *entities = result.kept;
                    self.stats.on_population_changed(entities);
                    destroyed
                }
                None => 0,
            }
        });

        if destroyed == 0 {
            return Ok(false);
        }
        self.stats.record_destroyed(destroyed as u64);
        self.log.append(
            LogLevel::Warn,
            format!(
                "[{}] cleaned {destroyed} weak entities",
                SoldierName::TheUnchained
            ),
        );
        self.soldiers.record_operation(SoldierName::TheUnchained);
        Ok(true)
    }

    /// One Processor tick: dequeue and tokenize a single document
    pub fn run_processor_tick(&self) -> Result<bool> {
        let Some(document) = self.queue.pop() else {
            return Ok(false);
        };

        self.log.append(
            LogLevel::Info,
            format!(
                "[{}] processing document: {}",
                SoldierName::MasterOfShadow,
                processor::preview(&document, processor::PREVIEW_CHARS)
            ),
        );

        let minted = processor::tokenize_document(&document);
        let count = minted.len();
        if count > 0 {
            self.store.update(|entities| {
                entities.extend(minted);
                self.stats.on_population_changed(entities);
            });
            self.stats.record_created(count as u64);
        }

        self.stats.record_document_processed();
        self.soldiers.record_operation(SoldierName::MasterOfShadow);
        Ok(true)
    }
}

/// Tokenize one seed text into the starting population
///
/// Word index drives both type (0 is `primary`) and power (`0.5 + index *
/// 0.05`); tokens of one or two characters are skipped but still consume
/// their index.
fn tokenize_seed_text(text: &str) -> Vec<Entity> {
    text.split_whitespace()
        .enumerate()
        .filter(|(_, word)| word.chars().count() > 2)
        .map(|(index, word)| {
            let entity_type = if index == 0 { "primary" } else { "secondary" };
            Entity::new(word, 0.5 + index as f64 * 0.05, entity_type, 0)
        })
        .collect()
}
