//! File logging example
//!
//! Demonstrates a registry writing to the console, `latest.log` and a
//! per-start log file simultaneously.
//!
//! Run with: cargo run --example file_logging

use named_logger::prelude::*;
use named_logger::{info, warning};

struct Database;

fn main() -> Result<()> {
    println!("=== Named Logger - File Logging Example ===\n");

    let config = RegistryConfig::default().with_log_directory("demo-logs");
    let registry = Registry::new(config)?;

    let app = registry.get("Application");
    let db = registry.get_by_type::<Database>();

    println!("1. Logging to console and both files:");
    info!(app, "Application started")?;
    info!(db, "Connecting to {}", "postgres://localhost")?;
    warning!(db, "Slow query took {} ms", 1250)?;

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        info!(app, "Processing item {}/5", i)?;
    }

    println!("\n3. Reporting an unrecoverable condition with its call stack:");
    app.fatal_with_trace("Cache directory {} is not writable", &[Value::from(&"/tmp/cache")])?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'demo-logs/latest.log' for the full log output");

    Ok(())
}
