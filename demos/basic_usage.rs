//! Basic logger usage example
//!
//! Demonstrates a console-only logger with colored severities and
//! argument substitution.
//!
//! Run with: cargo run --example basic_usage

use named_logger::prelude::*;
use named_logger::{debug, error, fatal, info, warning};

fn main() -> Result<()> {
    println!("=== Named Logger - Basic Usage Example ===\n");

    let logger = Logger::builder("BasicUsage")
        .sink(shared(Colorized::new(ConsoleSink::stdout())))
        .build();

    println!("1. Logging at every severity (none are filtered):");
    debug!(logger, "This is a debug message")?;
    info!(logger, "This is an info message")?;
    warning!(logger, "This is a warning message")?;
    error!(logger, "This is an error message")?;
    fatal!(logger, "This is a fatal message")?;

    println!("\n2. Substitution values:");
    info!(logger, "Listening on {}:{}", "0.0.0.0", 8080)?;
    info!(logger, "Only one value for {} and {}", "first")?;
    info!(logger, "Extra values {} are ignored", 1, 2, 3)?;
    let session: Option<&String> = None;
    warning!(logger, "Session '{}' is empty", Value::from(session))?;

    println!("\n3. Custom line format:");
    let custom = Logger::builder("Custom")
        .format("%time% %severity% <%name%> %message%")
        .sink(shared(ConsoleSink::stdout()))
        .build();
    info!(custom, "Formatted with a per-logger template")?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
