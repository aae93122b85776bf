//! Logging macros that build the substitution value list.
//!
//! Each argument after the template is borrowed and wrapped in a
//! [`Value`](crate::Value), then substituted into the `{}` markers left to
//! right. The macros evaluate to the logger's `Result<()>`.
//!
//! # Examples
//!
//! ```
//! use named_logger::prelude::*;
//! use named_logger::{info, warning};
//!
//! let logger = Logger::builder("Server").sink(shared(ConsoleSink::stdout())).build();
//!
//! // Basic logging
//! info!(logger, "Server started")?;
//!
//! // With substitution values
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port)?;
//!
//! // A null value renders as nothing
//! warning!(logger, "User '{}' has no session", Value::NULL)?;
//! # Ok::<(), LoggerError>(())
//! ```

/// Log a message at an explicit severity.
///
/// # Examples
///
/// ```
/// # use named_logger::prelude::*;
/// # let logger = Logger::builder("Core").build();
/// use named_logger::log;
/// log!(logger, Severity::Info, "Simple message")?;
/// log!(logger, Severity::Error, "Error code: {}", 500)?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.log($severity, $template, &[$($crate::Value::from(&$arg)),*])
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Debug, $template $(, $arg)*)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Info, $template $(, $arg)*)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use named_logger::prelude::*;
/// # let logger = Logger::builder("Core").build();
/// use named_logger::warning;
/// warning!(logger, "Retry attempt {} of {}", 3, 5)?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Warning, $template $(, $arg)*)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Error, $template $(, $arg)*)
    };
}

/// Log a fatal-level message.
///
/// This reports only; it does not stop the process.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Severity::Fatal, $template $(, $arg)*)
    };
}
