//! Line layout for rendered log output
//!
//! A line format is a template containing named placeholders:
//!
//! - `%severity%`: severity label (`Info`, `Warning`, ...)
//! - `%thread%`: thread name and id, or `Thread <id>` for unnamed threads
//! - `%name%`: logger name
//! - `%message%`: message body after argument substitution
//! - `%time%`: local wall-clock time, `HH:MM:SS`
//!
//! Anything else, including unknown `%...%` sequences, is copied verbatim.

use super::log_message::LogMessage;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

/// Template used when none is configured.
pub const DEFAULT_FORMAT: &str = "[%severity%/%thread%] (%name%): %message%";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Severity,
    Thread,
    Name,
    Message,
    Time,
}

impl Token {
    const ALL: [(&'static str, Token); 5] = [
        ("%severity%", Token::Severity),
        ("%thread%", Token::Thread),
        ("%name%", Token::Name),
        ("%message%", Token::Message),
        ("%time%", Token::Time),
    ];

    fn match_at(s: &str) -> Option<(&'static str, Token)> {
        Self::ALL.into_iter().find(|(text, _)| s.starts_with(*text))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineFormat(String);

impl LineFormat {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render `message` into a single line, without terminator.
    ///
    /// # Examples
    ///
    /// ```
    /// use named_logger::core::{LineFormat, LogMessage, Severity, ThreadIdentity};
    ///
    /// let message = LogMessage::new(Severity::Info, "Core", "started")
    ///     .with_thread(ThreadIdentity { id: 1, name: None });
    /// let line = LineFormat::default().render(&message);
    /// assert_eq!(line, "[Info/Thread 1] (Core): started");
    /// ```
    #[must_use]
    pub fn render(&self, message: &LogMessage) -> String {
        let mut out = String::with_capacity(self.0.len() + message.message.len() + 32);
        let mut rest = self.0.as_str();

        while let Some(idx) = rest.find('%') {
            out.push_str(&rest[..idx]);
            rest = &rest[idx..];

            match Token::match_at(rest) {
                Some((text, token)) => {
                    // Writing into a String cannot fail
                    let _ = Self::write_token(&mut out, token, message);
                    rest = &rest[text.len()..];
                }
                None => {
                    out.push('%');
                    rest = &rest[1..];
                }
            }
        }

        out.push_str(rest);
        out
    }

    fn write_token(out: &mut String, token: Token, message: &LogMessage) -> fmt::Result {
        match token {
            Token::Severity => out.write_str(message.severity.as_str()),
            Token::Thread => write!(out, "{}", message.thread),
            Token::Name => out.write_str(&message.logger_name),
            Token::Message => out.write_str(&message.message),
            Token::Time => write!(out, "{}", message.timestamp.format("%H:%M:%S")),
        }
    }
}

impl Default for LineFormat {
    fn default() -> Self {
        Self(DEFAULT_FORMAT.to_string())
    }
}

impl From<&str> for LineFormat {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

impl From<String> for LineFormat {
    fn from(template: String) -> Self {
        Self(template)
    }
}

impl fmt::Display for LineFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
