//! Interactive session, snapshot serialization, and the `planreel` CLI.
//!
//! The runtime ties the pipeline together: raw text and a dialect go in,
//! a replayable session comes out. A rustyline REPL drives it
//! interactively; the `planreel` binary also supports headless replay.
//!
//! # Modules
//!
//! - [`session`] - Plan loading and replay control
//! - [`serialize`] - MessagePack save/restore of a loaded replay
//! - [`editor`] - Line editor abstraction over rustyline
//! - [`repl`] - The interactive command loop

pub mod editor;
pub mod repl;
pub mod serialize;
pub mod session;

// Re-export main types for convenience
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use serialize::SavedReplay;
pub use session::PlanSession;
