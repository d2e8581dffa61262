//! Non-fatal diagnostic records and their ring buffer.
//!
//! The pipeline never aborts on malformed lines, unresolved semantics, or
//! replay-time inconsistencies. Each such event is recorded here instead,
//! in a bounded buffer that discards the oldest records when full.

use std::collections::VecDeque;
use std::fmt;

// =============================================================================
// Diagnostic Record
// =============================================================================

/// Severity of a diagnostic record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational: expected degradation (e.g. estimator fallback).
    Info,
    /// Warning: input or state did not match expectations.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warn"),
        }
    }
}

/// The kind of event a diagnostic records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A non-empty candidate line matched no dialect grammar.
    UnparsableLine,
    /// An action's type or entity roles could not be determined.
    UnresolvedRoles,
    /// Replay state contradicted an action's implied precondition and was
    /// force-corrected to the action's intent.
    InconsistentState,
    /// The estimator fell back to the static base table for an action name.
    EstimatorFallback,
    /// An entity had no placement evidence and was seeded at the default
    /// location.
    DefaultPlacement,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnparsableLine => write!(f, "unparsable-line"),
            Self::UnresolvedRoles => write!(f, "unresolved-roles"),
            Self::InconsistentState => write!(f, "inconsistent-state"),
            Self::EstimatorFallback => write!(f, "estimator-fallback"),
            Self::DefaultPlacement => write!(f, "default-placement"),
        }
    }
}

/// A single diagnostic record.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Severity of the record.
    pub severity: Severity,
    /// What happened.
    pub kind: DiagnosticKind,
    /// 1-based source line number, where applicable.
    pub line: Option<u32>,
    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    /// Creates a warning diagnostic.
    #[must_use]
    pub fn warning(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            kind,
            line: None,
            message: message.into(),
        }
    }

    /// Creates an informational diagnostic.
    #[must_use]
    pub fn info(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            kind,
            line: None,
            message: message.into(),
        }
    }

    /// Attaches a source line number.
    #[must_use]
    pub fn at_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.kind)?;
        if let Some(line) = self.line {
            write!(f, " (line {line})")?;
        }
        write!(f, ": {}", self.message)
    }
}

// =============================================================================
// Diagnostic Buffer
// =============================================================================

/// A bounded buffer of diagnostic records.
///
/// Maintains a fixed maximum size, discarding oldest records when full.
#[derive(Clone, Debug)]
pub struct DiagnosticBuffer {
    /// The records, oldest first.
    records: VecDeque<Diagnostic>,
    /// Maximum number of records to store.
    max_size: usize,
    /// Total number of records ever pushed (including evicted ones).
    total: u64,
}

impl DiagnosticBuffer {
    /// Creates a new buffer with the given maximum size.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(max_size.min(1024)),
            max_size,
            total: 0,
        }
    }

    /// Creates a buffer with the default size (1000 records).
    #[must_use]
    pub fn default_size() -> Self {
        Self::new(1000)
    }

    /// Pushes a record, evicting the oldest if over capacity.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.total += 1;
        self.records.push_back(diagnostic);
        while self.records.len() > self.max_size {
            self.records.pop_front();
        }
    }

    /// Returns the number of records currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the buffer holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total number of records ever pushed, including evicted ones.
    #[must_use]
    pub fn total_recorded(&self) -> u64 {
        self.total
    }

    /// Clears all records.
    pub fn clear(&mut self) {
        self.records.clear();
        // total is cumulative across the buffer's lifetime
    }

    /// Returns an iterator over held records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.records.iter()
    }

    /// Counts held records of a given kind.
    #[must_use]
    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.records.iter().filter(|d| d.kind == kind).count()
    }
}

impl Default for DiagnosticBuffer {
    fn default() -> Self {
        Self::default_size()
    }
}
