//! The interactive replay command loop.

use std::path::{Path, PathBuf};

use planreel_foundation::Result;
use planreel_parser::Dialect;
use planreel_replay::ReplayConfig;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::serialize::{self, SavedReplay};
use crate::session::PlanSession;

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (loaded plan, replay, diagnostics).
    session: PlanSession,

    /// Dialect used when `load` does not name one.
    default_dialect: Dialect,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: PlanSession::new(),
            default_dialect: Dialect::Classical,
            show_banner: true,
            prompt: "planreel> ".to_string(),
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: PlanSession) -> Self {
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the default dialect used by `load` without an argument.
    #[must_use]
    pub const fn with_default_dialect(mut self, dialect: Dialect) -> Self {
        self.default_dialect = dialect;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &PlanSession {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut PlanSession {
        &mut self.session
    }

    /// Loads a plan file into the session before the loop starts.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a plan.
    pub fn load_file(&mut self, path: &Path, dialect: Dialect) -> Result<()> {
        self.default_dialect = dialect;
        self.session.load_file(path, dialect)?;
        println!("{}", self.session.status_summary());
        Ok(())
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            print_banner();
        }

        loop {
            let input = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };

            let trimmed = input.trim();
            if trimmed.is_empty() {
                continue;
            }
            self.editor.add_history(trimmed);

            match self.dispatch(trimmed) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => println!("error: {e}"),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one command line. Returns `Ok(false)` to exit.
    fn dispatch(&mut self, line: &str) -> Result<bool> {
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or("");
        let args: Vec<&str> = words.collect();

        match command {
            "quit" | "exit" => return Ok(false),
            "help" => print_help(),
            "load" => self.cmd_load(&args)?,
            "dialect" => match args.first() {
                None => println!("dialect: {}", self.default_dialect),
                Some(name) => match name.parse::<Dialect>() {
                    Ok(dialect) => {
                        self.default_dialect = dialect;
                        println!("dialect set to {dialect}");
                    }
                    Err(e) => println!("{e}"),
                },
            },
            "play" => {
                let rate = args.first().and_then(|a| a.parse().ok()).unwrap_or(0.0);
                self.session.play(rate);
                println!("{}", self.session.status_summary());
            }
            "pause" => {
                self.session.pause();
                println!("{}", self.session.status_summary());
            }
            "step" => {
                let count: usize = args.first().and_then(|a| a.parse().ok()).unwrap_or(1);
                let mut applied = 0;
                for _ in 0..count {
                    if !self.session.step() {
                        break;
                    }
                    applied += 1;
                }
                println!("applied {applied} step(s)");
                println!("{}", self.session.status_summary());
            }
            "tick" => {
                let dt: f64 = args.first().and_then(|a| a.parse().ok()).unwrap_or(1.0);
                self.session.tick(dt);
                println!("{}", self.session.status_summary());
            }
            "reset" => {
                self.session.reset();
                println!("{}", self.session.status_summary());
            }
            "status" => println!("{}", self.session.status_summary()),
            "entities" => println!("{}", self.session.entities_summary()),
            "timeline" => println!("{}", self.session.timeline_summary()),
            "diag" => {
                let limit: usize = args.first().and_then(|a| a.parse().ok()).unwrap_or(20);
                let diagnostics = self.session.diagnostics();
                let skip = diagnostics.len().saturating_sub(limit);
                for diagnostic in diagnostics.iter().skip(skip) {
                    println!("{diagnostic}");
                }
                println!(
                    "{} shown, {} recorded",
                    diagnostics.len().min(limit),
                    diagnostics.total_recorded()
                );
            }
            "save" => {
                let Some(path) = args.first() else {
                    println!("usage: save <path>");
                    return Ok(true);
                };
                let saved = SavedReplay::capture(&self.session)?;
                serialize::save_to_file(&saved, path)?;
                println!("saved to {path}");
            }
            "restore" => {
                let Some(path) = args.first() else {
                    println!("usage: restore <path>");
                    return Ok(true);
                };
                let saved = serialize::load_from_file(path)?;
                saved.resume(&mut self.session, ReplayConfig::default());
                println!("{}", self.session.status_summary());
            }
            other => println!("unknown command: {other} (try 'help')"),
        }
        Ok(true)
    }

    fn cmd_load(&mut self, args: &[&str]) -> Result<()> {
        let Some(path) = args.first() else {
            println!("usage: load <path> [classical|temporal|numerical|hybrid]");
            return Ok(());
        };
        let dialect = match args.get(1) {
            Some(name) => match name.parse::<Dialect>() {
                Ok(d) => d,
                Err(e) => {
                    println!("{e}");
                    return Ok(());
                }
            },
            None => self.default_dialect,
        };
        self.default_dialect = dialect;
        self.session.load_file(&PathBuf::from(*path), dialect)?;
        println!("{}", self.session.status_summary());
        Ok(())
    }
}

fn print_banner() {
    println!("Planreel - plan replay for automated-planning output");
    println!("Type 'help' for commands.\n");
}

fn print_help() {
    println!(
        "\
COMMANDS:
    load <path> [dialect]  Load a plan file (classical|temporal|numerical|hybrid)
    dialect [name]         Show or set the default dialect
    play [rate]            Auto-advance at the given rate (default 1.0)
    pause                  Halt auto-advance; in-flight progress freezes
    step [n]               Apply the next n actions (default 1)
    tick <dt>              Advance the presentation clock by dt seconds
    reset                  Discard replay state, re-seed initial placements
    status                 One-line replay status
    entities               Entity registry with live state
    timeline               Action table with applied markers
    diag [n]               Show the most recent n diagnostics (default 20)
    save <path>            Save the replay position (MessagePack)
    restore <path>         Restore a saved replay
    help                   This help
    quit                   Exit
    Ctrl+D                 Exit"
    );
}
