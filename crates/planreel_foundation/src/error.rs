//! Error types for the Planreel system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Errors are deliberately rare: the parse → timeline → replay pipeline
//! never aborts on malformed lines or unresolved semantics (those become
//! diagnostics). An [`Error`] means the caller handed us something that is
//! not a plan at all, or the runtime boundary failed (I/O, serialization).

use std::fmt;

use thiserror::Error;

/// Convenience result alias used across all Planreel crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Planreel operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an input-kind error: the text is a domain or problem
    /// definition rather than a plan.
    #[must_use]
    pub fn input_kind(marker: impl Into<String>, line: u32) -> Self {
        Self::new(ErrorKind::InputKind {
            marker: marker.into(),
            line,
        })
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Input content is a domain/problem definition, not a plan.
    ///
    /// Fatal before any parsing proceeds; there is no partial parse.
    #[error("input is not a plan: found definition marker '{marker}' at line {line}")]
    InputKind {
        /// The definition marker that was found.
        marker: String,
        /// 1-based line number where the marker was found.
        line: u32,
    },

    /// An I/O operation failed.
    #[error("io error: {0}")]
    Io(String),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or input label.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source label.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        Ok(())
    }
}
