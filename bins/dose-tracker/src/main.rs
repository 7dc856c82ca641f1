//! dose-tracker: estimate how much of the last dose is still in the blood.
//!
//! Runs an interactive shell by default; `calc` and `now` are one-shot
//! commands for scripts.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dose_core::constants::DISCLAIMER;
use dose_core::traits::Clock;
use dose_shell::{
    open_tracker, run_session, write_readout, ShellEvent, SystemClock, Tone, TrackerConfig,
};
use tracing::info;

/// Dose tracker: first-order half-life estimate for the last dose.
#[derive(Parser, Debug)]
#[command(name = "dose-tracker", version, about = "Estimate the % of a dose remaining")]
struct Cli {
    /// Directory for the preference file (default: per-user data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format ("text" or "json")
    #[arg(long, global = true, default_value = "text")]
    log_format: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive shell (the default).
    Interactive,
    /// Calculate once and exit.
    Calc(CalcArgs),
    /// Print the current time in the dose timestamp format.
    Now,
}

#[derive(Args, Debug)]
struct CalcArgs {
    /// Dose time as yyyy-MM-dd HH:mm (default: the last saved dose time).
    timestamp: Option<String>,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Convert CLI args into a TrackerConfig.
    fn config(&self) -> TrackerConfig {
        let defaults = TrackerConfig::default();
        TrackerConfig {
            data_dir: self.data_dir.clone().unwrap_or(defaults.data_dir),
            log_level: self.log_level.clone().unwrap_or(defaults.log_level),
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.config();

    init_logging(&config.log_level, &cli.log_format);
    info!("dose-tracker v{}", env!("CARGO_PKG_VERSION"));
    info!("data_dir: {:?}", config.data_dir);

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => interactive(&config),
        Commands::Calc(args) => calc(&config, args),
        Commands::Now => {
            println!("{}", SystemClock.now().truncated_to_minute());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Run the interactive shell on the terminal.
fn interactive(config: &TrackerConfig) -> Result<ExitCode> {
    let mut shell = open_tracker(config);
    let stdin = io::stdin();
    run_session(
        &mut shell,
        stdin.lock(),
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .context("Terminal I/O failed")?;
    Ok(ExitCode::SUCCESS)
}

/// Calculate once from the argument or the saved dose time.
///
/// Exits with failure when the result line is an error.
fn calc(config: &TrackerConfig, args: CalcArgs) -> Result<ExitCode> {
    let mut shell = open_tracker(config);
    let event = match args.timestamp {
        Some(ts) => ShellEvent::Submit(ts),
        None => ShellEvent::Calculate,
    };
    let readout = shell.handle(event).clone();

    let mut stdout = io::stdout();
    if args.json {
        let report = serde_json::json!({
            "half_life_hours": dose_core::constants::HALF_LIFE_HOURS,
            "input": shell.input(),
            "readout": &readout,
            "calculation": shell.last_calculation(),
        });
        let text = serde_json::to_string_pretty(&report).context("Failed to encode result")?;
        writeln!(stdout, "{text}").context("Failed to write result")?;
    } else {
        writeln!(stdout, "{}", shell.half_life_label()).context("Failed to write result")?;
        write_readout(&readout, &mut stdout, &mut io::stderr())
            .context("Failed to write result")?;
        writeln!(stdout, "{DISCLAIMER}").context("Failed to write result")?;
    }

    Ok(match readout.tone {
        Tone::Error => ExitCode::FAILURE,
        Tone::Prompt | Tone::Result => ExitCode::SUCCESS,
    })
}

/// Initialize tracing subscriber with the given log level and output format.
///
/// Logs go to stderr so they never mix with result lines. `RUST_LOG`
/// overrides `level_str`.
fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(io::stderr))
            .init();
    }
}
