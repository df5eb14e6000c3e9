//! Maze discovery against a known navigation URL.
//!
//! Demonstrates:
//! - Building an `ExplorerConfig` from environment knobs
//! - Running the worker pool to completion
//! - Reading the aggregated run report and the best solve
//!
//! Usage:
//!   MAZE_URL=ws://localhost:8000/ws/maze/0 cargo run --example discover
//!   MAZE_URL=... MAZE_VARIANT=compact cargo run --example discover -- --debug

mod common;

// ============================================================================
// Imports
// ============================================================================

use anyhow::{Context, Result};
use common::Args;
use maze_explorer::WorkerPool;

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    let args = Args::parse();
    common::init_logging(args.debug);

    if let Err(e) = run().await {
        eprintln!("\n[ERROR] {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    println!("=== Maze Discovery ===\n");

    let url = std::env::var("MAZE_URL").context("MAZE_URL is not set")?;
    let config = common::config_from_env(&url)?;

    println!("[1] Launching {} sessions ({} permits)...", config.sessions, config.permits);
    println!("    URL:     {url}");
    println!("    Variant: {}", config.variant);
    println!("    Entry:   {}\n", config.entry);

    let report = WorkerPool::new(config).run().await;

    // ========================================================================
    // Report
    // ========================================================================

    println!("[2] Run complete ({} sessions)", report.total());
    println!("    Exit found:         {}", report.exit_found);
    println!("    Frontier exhausted: {}", report.frontier_exhausted);
    println!("    Idle timeout:       {}", report.idle_timeout);
    println!("    Failed:             {}\n", report.failed);

    match report.best {
        Some(solved) => {
            println!("=== Solved ===");
            println!("    Exit:     {}", solved.exit);
            println!("    Distance: {}", solved.distance);
            println!("    Visited:  {} vertices", solved.visited);
            let path: Vec<String> = solved.path.iter().map(ToString::to_string).collect();
            println!("    Path:     {}", path.join(" -> "));
        }
        None => println!("=== No exit found ==="),
    }

    Ok(())
}
