//! Process-wide registry example
//!
//! Demonstrates initializing the global registry once and fetching loggers
//! by name or by type from anywhere in the program.
//!
//! Run with: cargo run --example global_registry

use named_logger::prelude::*;
use named_logger::{error, info, registry};
use std::thread;

struct Worker;

fn main() -> Result<()> {
    println!("=== Named Logger - Global Registry Example ===\n");

    registry::init(RegistryConfig::default().with_log_directory("demo-logs"))?;

    let main_logger = registry::get("Main")?;
    info!(main_logger, "Spawning {} workers", 3)?;

    let handles: Vec<_> = (0..3)
        .map(|n| {
            thread::Builder::new()
                .name(format!("worker-{}", n))
                .spawn(move || -> Result<()> {
                    let logger = registry::get_by_type::<Worker>()?;
                    info!(logger, "Worker {} running", n)
                })
        })
        .collect::<std::io::Result<_>>()?;

    for handle in handles {
        if let Ok(Err(e)) = handle.join() {
            error!(main_logger, "Worker failed: {}", e)?;
        }
    }

    info!(main_logger, "Loggers in use: {}", registry::global()?.names().join(", "))?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
