//! Named logger: formats messages and dispatches them to its sinks

use super::{
    error::Result,
    line_format::LineFormat,
    log_message::LogMessage,
    severity::Severity,
    sink::SharedSink,
    template::{self, Value},
};
use std::backtrace::Backtrace;
use std::fmt;

/// A named formatter/dispatcher bound to a fixed list of sinks.
///
/// The sink list is captured when the logger is built and never changes.
/// Every call writes to every sink: severity selects the label and color,
/// it never filters.
pub struct Logger {
    name: String,
    format: LineFormat,
    sinks: Vec<SharedSink>,
}

impl Logger {
    /// Create a builder for a logger called `name`
    ///
    /// # Example
    ///
    /// ```
    /// use named_logger::prelude::*;
    ///
    /// let logger = Logger::builder("Core")
    ///     .format("%severity%: %message%")
    ///     .build();
    /// assert_eq!(logger.name(), "Core");
    /// assert_eq!(logger.sink_count(), 0);
    /// ```
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format(&self) -> &LineFormat {
        &self.format
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Substitute `values` into `template` and write the line to every sink.
    ///
    /// Returns after each sink has written and flushed the line. The first
    /// sink failure is returned and the remaining sinks are skipped.
    pub fn log(&self, severity: Severity, template: &str, values: &[Value<'_>]) -> Result<()> {
        let body = template::substitute(template, values);
        self.dispatch(LogMessage::new(severity, self.name.as_str(), body))
    }

    fn dispatch(&self, message: LogMessage) -> Result<()> {
        let line = self.format.render(&message);

        for sink in &self.sinks {
            let mut sink = sink.lock();
            sink.write_line(&message, &line)?;
            sink.flush()?;
        }
        Ok(())
    }

    #[inline]
    pub fn debug(&self, template: &str, values: &[Value<'_>]) -> Result<()> {
        self.log(Severity::Debug, template, values)
    }

    #[inline]
    pub fn info(&self, template: &str, values: &[Value<'_>]) -> Result<()> {
        self.log(Severity::Info, template, values)
    }

    #[inline]
    pub fn warning(&self, template: &str, values: &[Value<'_>]) -> Result<()> {
        self.log(Severity::Warning, template, values)
    }

    #[inline]
    pub fn error(&self, template: &str, values: &[Value<'_>]) -> Result<()> {
        self.log(Severity::Error, template, values)
    }

    #[inline]
    pub fn fatal(&self, template: &str, values: &[Value<'_>]) -> Result<()> {
        self.log(Severity::Fatal, template, values)
    }

    /// Log at Fatal with the current call stack appended to the body.
    ///
    /// This only reports; terminating the process is up to the caller.
    pub fn fatal_with_trace(&self, template: &str, values: &[Value<'_>]) -> Result<()> {
        let mut body = template::substitute(template, values);
        body.push('\n');
        body.push_str(&Backtrace::force_capture().to_string());
        self.dispatch(LogMessage::new(Severity::Fatal, self.name.as_str(), body))
    }

    pub fn flush(&self) -> Result<()> {
        for sink in &self.sinks {
            sink.lock().flush()?;
        }
        Ok(())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("format", &self.format)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

/// Builder for [`Logger`]
///
/// The builder is the per-instance override path: loggers obtained from a
/// registry share its format and default sinks, a built logger can use any.
pub struct LoggerBuilder {
    name: String,
    format: LineFormat,
    sinks: Vec<SharedSink>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            format: LineFormat::default(),
            sinks: Vec::new(),
        }
    }

    /// Set the line format template
    #[must_use]
    pub fn format(mut self, format: impl Into<LineFormat>) -> Self {
        self.format = format.into();
        self
    }

    /// Append a sink
    #[must_use]
    pub fn sink(mut self, sink: SharedSink) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Append several sinks, keeping their order
    #[must_use]
    pub fn sinks(mut self, sinks: impl IntoIterator<Item = SharedSink>) -> Self {
        self.sinks.extend(sinks);
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            name: self.name,
            format: self.format,
            sinks: self.sinks,
        }
    }
}
