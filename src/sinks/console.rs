//! Console sink implementation

use crate::core::{LogMessage, Result, Sink};
use std::io::{self, Write};

/// Writes lines to standard output, or to any injected writer.
///
/// Plain text only; wrap it in [`Colorized`](super::Colorized) for
/// severity colors.
pub struct ConsoleSink {
    writer: Box<dyn Write + Send>,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self {
            writer: Box::new(io::stdout()),
        }
    }

    /// Write to `writer` instead of the process's standard output
    ///
    /// # Example
    ///
    /// ```
    /// use named_logger::sinks::ConsoleSink;
    ///
    /// let sink = ConsoleSink::with_writer(std::io::stderr());
    /// ```
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Sink for ConsoleSink {
    fn write_line(&mut self, _message: &LogMessage, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
