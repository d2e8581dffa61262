//! Core identifiers, errors, and diagnostics for Planreel.
//!
//! This crate provides:
//! - [`NameId`] / [`Interner`] - Interned entity and action identifiers
//! - [`Error`] - Rich error types with source context
//! - [`Diagnostic`] / [`DiagnosticBuffer`] - Non-fatal diagnostic records
//!
//! Everything downstream of the parser degrades to best-effort
//! visualization: only input-kind, I/O, and serialization failures are
//! expressed as [`Error`]; every other failure mode is a [`Diagnostic`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod diagnostic;
pub mod error;
pub mod intern;

pub use diagnostic::{Diagnostic, DiagnosticBuffer, DiagnosticKind, Severity};
pub use error::{Error, ErrorKind, Result};
pub use intern::{Interner, NameId};
