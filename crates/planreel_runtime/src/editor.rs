//! Line editor abstraction for the REPL.
//!
//! This module provides a trait-based abstraction over line editing
//! libraries, allowing the REPL to use rustyline while remaining
//! swappable.

use planreel_foundation::{Error, Result};
use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Completer as CompleterDerive, Config, Context, Editor, Helper as HelperDerive,
    Hinter as HinterDerive, Validator as ValidatorDerive};

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);
}

/// The REPL command vocabulary offered for completion.
const COMMANDS: &[&str] = &[
    "load", "dialect", "play", "pause", "step", "tick", "reset", "status", "entities",
    "timeline", "diag", "save", "restore", "help", "quit",
];

/// Commands whose argument is a file path.
const FILE_COMMANDS: &[&str] = &["load", "save", "restore"];

/// Helper for rustyline that provides completion and history hints.
#[derive(HelperDerive, CompleterDerive, HinterDerive, ValidatorDerive)]
struct ReplHelper {
    #[rustyline(Completer)]
    completer: CommandCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    #[rustyline(Validator)]
    validator: PassthroughValidator,
}

impl Highlighter for ReplHelper {}

/// Commands are single-line; everything validates as complete.
struct PassthroughValidator;

impl Validator for PassthroughValidator {}

/// Completer for REPL commands and file paths.
struct CommandCompleter {
    file_completer: FilenameCompleter,
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let head = line[..pos].trim_start();

        // Past the command word: complete file paths for file commands.
        if let Some(command) = head.split_whitespace().next() {
            if FILE_COMMANDS.contains(&command) && head.len() > command.len() {
                return self.file_completer.complete(line, pos, ctx);
            }
        }

        // Otherwise complete the command word itself.
        let start = line[..pos]
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + 1);
        let word = &line[start..pos];
        let candidates = COMMANDS
            .iter()
            .filter(|c| c.starts_with(word))
            .map(|c| Pair {
                display: (*c).to_string(),
                replacement: (*c).to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<ReplHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    ///
    /// # Panics
    ///
    /// Panics if the history size configuration is invalid (should not
    /// happen with hardcoded valid values).
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .expect("valid history size")
            .build();

        let helper = ReplHelper {
            completer: CommandCompleter {
                file_completer: FilenameCompleter::new(),
            },
            hinter: HistoryHinter::new(),
            validator: PassthroughValidator,
        };

        let mut editor =
            Editor::with_config(config).map_err(|e| Error::internal(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::internal(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}
