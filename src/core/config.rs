//! Simulation configuration with documented constants
//!
//! All tunable values are collected here with explanations of their purpose
//! and how they interact with each other.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{Result, ShadowError};

/// Configuration for the simulation engine
///
/// These values have been tuned to produce a population that grows, churns,
/// and prunes at a watchable pace. Changing them affects pacing, not
/// correctness: every invariant (power floor, population cap, log cap) holds
/// for any valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // === SOLDIER TICK PERIODS ===
    /// Generator tick period in milliseconds
    ///
    /// Every tick spawns up to `sample_size` diluted children, so this is
    /// the main driver of population growth between cleanup passes.
    pub generation_interval_ms: u64,

    /// Evaluator tick period in milliseconds
    ///
    /// Every tick rewrites the whole population, so each entity gains one
    /// activation per period. Slower than generation so new entities get
    /// scored a few generations after birth.
    pub evaluation_interval_ms: u64,

    /// Cleaner tick period in milliseconds
    ///
    /// The population may transiently exceed `max_entities` between cleanup
    /// ticks; this period bounds how long the overshoot lasts.
    pub cleanup_interval_ms: u64,

    /// Document processor tick period in milliseconds
    ///
    /// One queued document is consumed per tick, so the queue drains at
    /// most one document per period regardless of submission rate.
    pub processing_interval_ms: u64,

    // === POPULATION ===
    /// Population cap enforced by the Cleaner
    ///
    /// Soft cap: the Generator refuses to grow past it, but the document
    /// processor may push the population over until the next cleanup tick.
    pub max_entities: usize,

    /// Parents sampled (with replacement) per Generator tick
    ///
    /// Each sampled parent produces exactly one child, so this is also the
    /// maximum number of children per tick.
    pub sample_size: usize,

    // === LOGGING ===
    /// Maximum retained activity log entries
    ///
    /// The activity log is a ring: appends past this cap silently evict the
    /// oldest entries.
    pub max_log_entries: usize,

    // === RANDOMNESS ===
    /// Seed for the engine's ChaCha8 random source
    ///
    /// Fixed seed means reproducible sampling and mutation draws, which the
    /// determinism tests rely on.
    pub seed: u64,

    // === PARALLELIZATION ===
    /// Minimum population before the Evaluator rewrite runs in parallel
    ///
    /// Below this threshold, thread overhead exceeds benefits. At 1000, we
    /// only parallelize when there are enough entities to justify the
    /// synchronization cost.
    pub parallel_threshold: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            // Tick periods (processing < generation < evaluation < cleanup)
            generation_interval_ms: 3000,
            evaluation_interval_ms: 5000,
            cleanup_interval_ms: 10_000,
            processing_interval_ms: 2000,

            // Population
            max_entities: 50,
            sample_size: 5,

            // Logging
            max_log_entries: 100,

            // Randomness
            seed: 12345,

            // Parallelization
            parallel_threshold: 1000,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a TOML file
    ///
    /// Missing keys fall back to their defaults; the result is validated
    /// before being returned.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.generation_interval_ms == 0
            || self.evaluation_interval_ms == 0
            || self.cleanup_interval_ms == 0
            || self.processing_interval_ms == 0
        {
            return Err(ShadowError::InvalidConfig(
                "tick intervals must be positive".into(),
            ));
        }

        if self.max_entities == 0 {
            return Err(ShadowError::InvalidConfig(
                "max_entities must be at least 1".into(),
            ));
        }

        if self.sample_size == 0 {
            return Err(ShadowError::InvalidConfig(
                "sample_size must be at least 1".into(),
            ));
        }

        if self.max_log_entries == 0 {
            return Err(ShadowError::InvalidConfig(
                "max_log_entries must be at least 1".into(),
            ));
        }

        Ok(())
    }
}
