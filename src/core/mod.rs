//! Core logger types and traits

pub mod config;
pub mod error;
pub mod line_format;
pub mod log_message;
pub mod logger;
pub mod registry;
pub mod severity;
pub mod sink;
pub mod template;
pub mod thread_identity;

pub use config::RegistryConfig;
pub use error::{LoggerError, Result};
pub use line_format::{LineFormat, DEFAULT_FORMAT};
pub use log_message::LogMessage;
pub use logger::{Logger, LoggerBuilder};
pub use registry::Registry;
pub use severity::Severity;
pub use sink::{shared, SharedSink, Sink};
pub use template::{substitute, Value, PLACEHOLDER};
pub use thread_identity::ThreadIdentity;
