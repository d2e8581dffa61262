//! Planreel CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use planreel_parser::Dialect;
use planreel_runtime::{PlanSession, Repl};

/// CLI configuration parsed from arguments.
struct CliConfig {
    file: Option<PathBuf>,
    dialect: Dialect,
    rate: f64,
    headless: bool,
    show_help: bool,
    show_version: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            file: None,
            dialect: Dialect::Classical,
            rate: 1.0,
            headless: false,
            show_help: false,
            show_version: false,
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.headless = true,
            "-d" | "--dialect" => {
                i += 1;
                if i >= args.len() {
                    return Err("--dialect requires a value".into());
                }
                config.dialect = args[i].parse::<Dialect>()?;
            }
            "-r" | "--rate" => {
                i += 1;
                if i >= args.len() {
                    return Err("--rate requires a value".into());
                }
                config.rate = args[i]
                    .parse()
                    .map_err(|_| format!("invalid --rate value: {}", args[i]))?;
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => {
                if config.file.is_some() {
                    return Err("only one plan file may be given".into());
                }
                config.file = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("planreel {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if config.headless {
        let Some(file) = &config.file else {
            return Err("--batch requires a plan file".into());
        };
        replay_headless(file, config.dialect)?;
        return Ok(());
    }

    let mut repl = Repl::new()?;
    if let Some(file) = &config.file {
        repl.load_file(file, config.dialect)?;
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

/// Steps through the whole plan, printing each applied action and the
/// final state.
fn replay_headless(
    file: &PathBuf,
    dialect: Dialect,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = PlanSession::new();
    session.load_file(file, dialect)?;

    println!("{}", session.status_summary());

    let mut index = 0;
    loop {
        let line = session.scheduler().and_then(|s| {
            s.timeline().get(index).map(|action| {
                format!(
                    "{:>8.1}  {:<11} {} {}",
                    action.start,
                    action.action_type.name(),
                    s.resolve(action.name),
                    action.parameters.join(" ")
                )
            })
        });
        if !session.step() {
            break;
        }
        if let Some(line) = line {
            println!("{line}");
        }
        index += 1;
    }

    println!();
    println!("{}", session.entities_summary());
    println!("{}", session.status_summary());

    let diagnostics = session.diagnostics();
    if !diagnostics.is_empty() {
        println!("\ndiagnostics:");
        for diagnostic in diagnostics.iter() {
            println!("  {diagnostic}");
        }
    }

    Ok(())
}

fn print_help() {
    println!(
        "\
Planreel - plan replay for automated-planning output

USAGE:
    planreel [OPTIONS] [FILE]

ARGUMENTS:
    [FILE]    Plan file to load before starting the REPL

OPTIONS:
    -h, --help           Print help information
    -V, --version        Print version information
    -b, --batch          Replay the file headless and exit (no REPL)
    -d, --dialect NAME   Plan dialect: classical|temporal|numerical|hybrid
    -r, --rate N         Playback rate for interactive replay

EXAMPLES:
    planreel                               Start the interactive REPL
    planreel plan.txt -d temporal          Load plan.txt, then start the REPL
    planreel -b plan.txt -d classical      Replay headless and print the result"
    );
}
