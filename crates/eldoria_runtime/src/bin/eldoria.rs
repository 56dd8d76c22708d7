//! Eldoria CLI entry point.

use std::env;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use eldoria_content::{EldoriaContent, START};
use eldoria_debug::{TraceOutput, TracerConfig};
use eldoria_engine::{Engine, EngineConfig, Outcome};
use eldoria_runtime::{Repl, ScriptedEditor};
use log::{LevelFilter, info};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    script: Option<PathBuf>,
    capacity: Option<usize>,
    show_help: bool,
    show_version: bool,
    no_banner: bool,
    verbosity: u8,
    log_file: Option<PathBuf>,
    // Debug flags
    trace: bool,
    trace_json: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(Outcome::Fault) => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-v" | "--verbose" => config.verbosity = config.verbosity.saturating_add(1),
            "--no-banner" => config.no_banner = true,
            "--trace" => config.trace = true,
            "--trace-json" => {
                config.trace = true;
                config.trace_json = true;
            }
            "--script" => {
                let path = args.next().ok_or("--script requires a file")?;
                config.script = Some(PathBuf::from(path));
            }
            "--log" => {
                let path = args.next().ok_or("--log requires a file")?;
                config.log_file = Some(PathBuf::from(path));
            }
            "--capacity" => {
                let value = args.next().ok_or("--capacity requires a value")?;
                config.capacity = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --capacity value: {value}"))?,
                );
            }
            other => return Err(format!("unknown option: {other}").into()),
        }
    }

    Ok(config)
}

fn setup_logging(config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let level = match config.verbosity {
        _ if config.trace && config.log_file.is_some() => LevelFilter::Trace,
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let log_config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .build();

    match &config.log_file {
        Some(path) => WriteLogger::init(level, log_config, File::create(path)?)?,
        None => TermLogger::init(level, log_config, TerminalMode::Stderr, ColorChoice::Auto)?,
    }
    Ok(())
}

fn run(args: Vec<String>) -> Result<Outcome, Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(Outcome::Quit);
    }

    if config.show_version {
        println!("eldoria {}", env!("CARGO_PKG_VERSION"));
        return Ok(Outcome::Quit);
    }

    setup_logging(&config)?;

    let mut tracer = TracerConfig::new();
    if config.trace {
        tracer = tracer.enabled().to_stderr();
    }
    if config.trace_json {
        tracer = tracer.json();
    }
    if config.trace && config.log_file.is_some() {
        tracer = tracer.with_output(TraceOutput::Log);
    }

    let mut engine_config = EngineConfig::new()
        .with_start(START.0, START.1)
        .with_tracer(tracer);
    if let Some(capacity) = config.capacity {
        engine_config = engine_config.with_capacity(capacity);
    }

    let engine = match Engine::new(engine_config, &EldoriaContent) {
        Ok(engine) => engine,
        Err(e) if e.is_configuration() => {
            return Err(format!("the world of Eldoria could not be built: {e}").into());
        }
        Err(e) => return Err(e.into()),
    };

    let outcome = match &config.script {
        Some(path) => {
            let editor = ScriptedEditor::from_file(path)?;
            let mut repl = Repl::new(engine, editor, io::stdout());
            if config.no_banner {
                repl = repl.without_banner();
            }
            let outcome = repl.run()?;
            report_trace(&config, repl.engine());
            outcome
        }
        None => {
            let mut repl = Repl::interactive(engine)?;
            if config.no_banner {
                repl = repl.without_banner();
            }
            let outcome = repl.run()?;
            report_trace(&config, repl.engine());
            outcome
        }
    };

    Ok(outcome)
}

/// Summarizes the session's trace where the trace itself went.
fn report_trace(config: &CliConfig, engine: &Engine) {
    if !config.trace {
        return;
    }
    let summary = engine.tracer().summary();
    if config.log_file.is_some() {
        info!("{summary}");
    } else {
        eprintln!("{summary}");
    }
}

fn print_help() {
    println!(
        "\x1b[1mEldoria: Shadows of Malakar\x1b[0m - A text adventure

\x1b[1mUSAGE:\x1b[0m
    eldoria [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    --script FILE      Read commands from FILE instead of the terminal
    --capacity N       Inventory capacity (default 10)
    --no-banner        Skip the welcome banner

\x1b[1mDEBUG OPTIONS:\x1b[0m
    -v, --verbose      Raise the log level (repeat for more)
    --log FILE         Write the log to FILE instead of stderr
    --trace            Print a trace of each turn and a closing summary to stderr,
                       or to the --log file
    --trace-json       Print the turn trace as JSON

\x1b[1mEXAMPLES:\x1b[0m
    eldoria                          Start a new game
    eldoria --script walkthrough.txt Play the commands in walkthrough.txt
    eldoria --trace-json --no-banner Play with a JSON turn trace

In the game, type 'help' for a list of commands."
    );
}
