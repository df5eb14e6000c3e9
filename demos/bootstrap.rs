//! Full challenge bootstrap through the administrative API.
//!
//! Demonstrates:
//! - Registering a group and listing the available mazes
//! - Starting the challenge to obtain the navigation URL
//! - Running discovery against the issued URL
//!
//! Usage:
//!   ADMIN_URL=http://localhost:8000 GROUP_NAME=rustaceans cargo run --example bootstrap
//!   ADMIN_URL=... cargo run --example bootstrap -- --debug

mod common;

// ============================================================================
// Imports
// ============================================================================

use anyhow::{Context, Result};
use common::Args;
use maze_explorer::{AdminClient, WorkerPool};

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
    println!("=== Challenge Bootstrap ===\n");

    let admin_url = std::env::var("ADMIN_URL").context("ADMIN_URL is not set")?;
    let group_name =
        std::env::var("GROUP_NAME").unwrap_or_else(|_| "maze-explorer-demo".to_string());
    let admin = AdminClient::new(admin_url);

    // ========================================================================
    // Register Group
    // ========================================================================

    println!("[1] Registering group '{group_name}'...");
    let group = admin.create_group(&group_name).await?;
    println!("    ✓ Group: {group}\n");

    // ========================================================================
    // List Mazes
    // ========================================================================

    println!("[2] Listing mazes...");
    let mazes = admin.list_mazes(group).await?;
    for maze in &mazes {
        println!(
            "    Maze {} (entry {}, difficulty {})",
            maze.id, maze.entry, maze.difficulty
        );
    }
    let first = mazes.first().context("no mazes available")?;
    println!("    ✓ {} maze(s)\n", mazes.len());

    // ========================================================================
    // Start Challenge
    // ========================================================================

    println!("[3] Starting challenge...");
    let url = admin.start_challenge(group).await?;
    println!("    ✓ Navigation URL: {url}\n");

    // ========================================================================
    // Discover
    // ========================================================================

    println!("[4] Discovering maze {}...", first.id);
    let config = common::config_from_env(&url)?.with_entry(first.entry);
    let report = WorkerPool::new(config).run().await;

    println!("    Exit found:         {}", report.exit_found);
    println!("    Frontier exhausted: {}", report.frontier_exhausted);
    println!("    Idle timeout:       {}", report.idle_timeout);
    println!("    Failed:             {}\n", report.failed);

    match report.best {
        Some(solved) => {
            println!("=== Solved ===");
            println!("    Exit:     {}", solved.exit);
            println!("    Distance: {}", solved.distance);
            let path: Vec<String> = solved.path.iter().map(ToString::to_string).collect();
            println!("    Path:     {}", path.join(" -> "));
        }
        None => println!("=== No exit found ==="),
    }

    Ok(())
}
