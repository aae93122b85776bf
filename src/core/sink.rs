//! Sink trait for log output destinations

use super::{error::Result, log_message::LogMessage};
use parking_lot::Mutex;
use std::sync::Arc;

/// A destination accepting one rendered line at a time.
///
/// `line` carries no terminator; the sink appends its own.
pub trait Sink: Send {
    fn write_line(&mut self, message: &LogMessage, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

/// A sink shared between loggers. The mutex serializes whole lines.
pub type SharedSink = Arc<Mutex<dyn Sink>>;

/// Wrap `sink` so it can be handed to several loggers.
pub fn shared<S: Sink + 'static>(sink: S) -> SharedSink {
    Arc::new(Mutex::new(sink))
}
