//! Severity colorization as a sink decorator

use crate::core::{LogMessage, Result, Sink};
use colored::Colorize;

/// Wraps a sink and paints each line in its severity's color.
///
/// The color is set before the text and reset right after it, inside the
/// single `write_line` call, so a shared sink's lock covers the whole
/// set/write/reset sequence. Lines without a color pass through unchanged.
///
/// `colored` honours `NO_COLOR`/`CLICOLOR_FORCE`; use
/// `colored::control::set_override` to force a choice.
pub struct Colorized<S> {
    inner: S,
}

impl<S: Sink> Colorized<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Sink> Sink for Colorized<S> {
    fn write_line(&mut self, message: &LogMessage, line: &str) -> Result<()> {
        match message.severity.color() {
            Some(color) => {
                let painted = line.color(color).to_string();
                self.inner.write_line(message, &painted)
            }
            None => self.inner.write_line(message, line),
        }
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;

    #[derive(Default)]
    struct Lines(Vec<String>);

    impl Sink for Lines {
        fn write_line(&mut self, _message: &LogMessage, line: &str) -> Result<()> {
            self.0.push(line.to_string());
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "lines"
        }
    }

    fn paint(severity: Severity) -> String {
        colored::control::set_override(true);
        let mut sink = Colorized::new(Lines::default());
        sink.write_line(&LogMessage::new(severity, "Core", "x"), "text").unwrap();
        sink.into_inner().0.remove(0)
    }

    #[test]
    fn test_color_wraps_line() {
        assert_eq!(paint(Severity::Warning), "\x1b[33mtext\x1b[0m");
        assert_eq!(paint(Severity::Error), "\x1b[91mtext\x1b[0m");
        assert_eq!(paint(Severity::Fatal), "\x1b[31mtext\x1b[0m");
        assert_eq!(paint(Severity::Debug), "\x1b[90mtext\x1b[0m");
    }

    #[test]
    fn test_info_uncolored() {
        assert_eq!(paint(Severity::Info), "text");
    }

    #[test]
    fn test_name_delegates() {
        let sink = Colorized::new(Lines::default());
        assert_eq!(sink.name(), "lines");
    }
}
