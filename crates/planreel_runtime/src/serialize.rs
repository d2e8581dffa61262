//! Replay serialization and deserialization using `MessagePack`.
//!
//! A saved replay carries the assembled timeline, the entity registry,
//! the identifier table, and the position the replay had reached. On
//! restore the scheduler is rebuilt and stepped back to that position;
//! replay transitions are deterministic, so the discrete state comes
//! back identical. The presentation clock is not persisted: a restored
//! replay resumes paused at its step boundary.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use planreel_foundation::{Error, Interner, Result};
use planreel_parser::Dialect;
use planreel_replay::{ReplayConfig, ReplayScheduler};
use planreel_timeline::{EntityRegistry, Timeline};
use serde::{Deserialize, Serialize};

use crate::session::PlanSession;

/// Everything needed to rebuild a replay where it left off.
#[derive(Serialize, Deserialize)]
pub struct SavedReplay {
    /// The dialect the plan was parsed as.
    pub dialect: Dialect,
    /// The assembled timeline.
    pub timeline: Timeline,
    /// The entity registry.
    pub registry: EntityRegistry,
    /// The identifier table the timeline was interned against.
    pub interner: Interner,
    /// Index of the next action to apply.
    pub next_index: usize,
    /// Display label of the original source.
    pub label: String,
}

impl SavedReplay {
    /// Captures the session's loaded replay.
    ///
    /// # Errors
    ///
    /// Returns an error if no plan is loaded.
    pub fn capture(session: &PlanSession) -> Result<Self> {
        let scheduler = session
            .scheduler()
            .ok_or_else(|| Error::internal("no plan loaded to save"))?;
        Ok(Self {
            dialect: scheduler.timeline().dialect(),
            timeline: scheduler.timeline().clone(),
            registry: scheduler.registry().clone(),
            interner: scheduler.interner().clone(),
            next_index: scheduler.next_index(),
            label: session.source_label().unwrap_or("<unnamed>").to_string(),
        })
    }

    /// Rebuilds the replay into the session and steps it back to the
    /// saved position.
    pub fn resume(self, session: &mut PlanSession, config: ReplayConfig) {
        let mut diagnostics = planreel_foundation::DiagnosticBuffer::default_size();
        let mut scheduler = ReplayScheduler::new(
            self.timeline,
            self.registry,
            self.interner,
            config,
            &mut diagnostics,
        );
        for _ in 0..self.next_index {
            scheduler.step(&mut diagnostics);
        }
        session.set_scheduler(scheduler, &self.label);
    }
}

/// Serializes a saved replay to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(saved: &SavedReplay) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(saved).map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes a saved replay from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<SavedReplay> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::serialization(e.to_string()))
}

/// Saves a replay to a file using `MessagePack` format.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to, or if
/// serialization fails.
pub fn save_to_file<P: AsRef<Path>>(saved: &SavedReplay, path: P) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(|e| {
        Error::io(format!(
            "failed to create file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(saved)?;

    writer.write_all(&bytes).map_err(|e| {
        Error::io(format!(
            "failed to write to file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    writer.flush().map_err(|e| {
        Error::io(format!(
            "failed to flush file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    Ok(())
}

/// Loads a saved replay from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization
/// fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<SavedReplay> {
    let file = File::open(path.as_ref()).map_err(|e| {
        Error::io(format!(
            "failed to open file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();

    reader.read_to_end(&mut bytes).map_err(|e| {
        Error::io(format!(
            "failed to read file '{}': {e}",
            path.as_ref().display()
        ))
    })?;

    from_bytes(&bytes)
}
