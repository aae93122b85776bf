//! # Named Logger
//!
//! A small synchronous logging facade: named loggers that format messages
//! and write them to several sinks at once.
//!
//! ## Features
//!
//! - **Named Loggers**: one shared instance per name, from a registry
//! - **Multiple Sinks**: console with severity colors, `latest.log`, and a
//!   per-start log file
//! - **Thread Safe**: whole lines are written under a per-sink lock
//! - **Synchronous**: every call returns after all sinks have flushed
//!
//! ## Example
//!
//! ```
//! use named_logger::prelude::*;
//! use named_logger::info;
//!
//! let registry = Registry::with_sinks(DEFAULT_FORMAT, vec![shared(ConsoleSink::stdout())]);
//! let logger = registry.get("Core");
//! info!(logger, "listening on port {}", 8080)?;
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub use crate::core::registry;

pub mod prelude {
    pub use crate::core::{
        shared, LineFormat, LogMessage, Logger, LoggerBuilder, LoggerError, Registry,
        RegistryConfig, Result, Severity, SharedSink, Sink, ThreadIdentity, Value, DEFAULT_FORMAT,
    };
    pub use crate::sinks::{Colorized, ConsoleSink, FileSink};
}

pub use crate::core::{
    shared, LineFormat, LogMessage, Logger, LoggerBuilder, LoggerError, Registry, RegistryConfig,
    Result, Severity, SharedSink, Sink, ThreadIdentity, Value, DEFAULT_FORMAT,
};
pub use sinks::{Colorized, ConsoleSink, FileSink};
