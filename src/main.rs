//! Shadow Swarm - Entry Point
//!
//! Starts the simulation engine with its four soldier tasks and provides a
//! small interactive loop for observing the population, submitting text,
//! and exporting snapshots.

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;

use shadow_swarm::core::config::SimulationConfig;
use shadow_swarm::core::error::Result;
use shadow_swarm::engine::{ShadowEngine, Snapshot};

#[derive(Parser)]
#[command(name = "shadow-swarm")]
#[command(about = "Self-running entity population simulation")]
struct Args {
    /// Path to a TOML configuration file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured RNG seed
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Initialize tracing for diagnostics; the domain activity log is
    // separate and shown via the `logs` command.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("shadow_swarm=info")),
        )
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_path(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    tracing::info!(
        seed = config.seed,
        max_entities = config.max_entities,
        "shadow-swarm starting"
    );

    // The engine's soldier tasks need a running runtime; the interactive
    // loop itself stays synchronous on the main thread.
    let rt = Runtime::new()?;
    let _guard = rt.enter();

    let engine = Arc::new(ShadowEngine::new(config)?);
    engine.clone().start();

    println!("\n=== SHADOW SWARM ===");
    println!("A self-running entity population simulation");
    println!();
    println!("Commands:");
    println!("  status / s       - Show population and soldier status");
    println!("  logs             - Show recent activity log entries");
    println!("  submit <text>    - Queue text for processing");
    println!("  export           - Print the current snapshot as JSON");
    println!("  quit / q         - Exit");
    println!();

    loop {
        display_status(&engine.snapshot());

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            // EOF
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        match input {
            "quit" | "q" => break,
            // Status is reprinted at the top of every loop.
            "status" | "s" => {}
            "logs" => display_logs(&engine.snapshot()),
            "export" => {
                let json = serde_json::to_string_pretty(&engine.snapshot())?;
                println!("{json}");
            }
            other => {
                if let Some(text) = other.strip_prefix("submit ") {
                    engine.submit_text(text);
                    println!("Queued.");
                } else {
                    println!("Unknown command: {other}");
                }
            }
        }
    }

    rt.block_on(engine.shutdown());
    println!("Goodbye.");
    Ok(())
}

fn display_status(snapshot: &Snapshot) {
    println!(
        "--- entities: {} | queue: {} | avg power: {:.3} | created: {} | destroyed: {} | docs: {} ---",
        snapshot.entities.len(),
        snapshot.queue_size,
        snapshot.stats.average_power,
        snapshot.stats.total_created,
        snapshot.stats.total_destroyed,
        snapshot.stats.documents_processed,
    );
    for soldier in &snapshot.soldiers {
        println!(
            "  {:<22} ops: {:<6} active: {}",
            soldier.name.title(),
            soldier.operations,
            soldier.active,
        );
    }
}

fn display_logs(snapshot: &Snapshot) {
    for entry in snapshot.logs.iter().take(20) {
        println!("  [{}] {}", entry.level, entry.message);
    }
}
