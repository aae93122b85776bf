//! Log message structure

use super::severity::Severity;
use super::thread_identity::ThreadIdentity;
use chrono::{DateTime, Local};

/// One log call, after argument substitution and before line layout.
#[derive(Debug, Clone)]
pub struct LogMessage {
    pub severity: Severity,
    pub logger_name: String,
    pub message: String,
    pub thread: ThreadIdentity,
    pub timestamp: DateTime<Local>,
}

impl LogMessage {
    /// Capture a message on the calling thread.
    pub fn new(severity: Severity, logger_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            logger_name: logger_name.into(),
            message: message.into(),
            thread: ThreadIdentity::current(),
            timestamp: Local::now(),
        }
    }

    pub fn with_thread(mut self, thread: ThreadIdentity) -> Self {
        self.thread = thread;
        self
    }
}
