//! `tolk`: tools for JSON message catalogs.
//!
//! - `tolk check` validates catalog documents
//! - `tolk coverage` compares translated keys against a source catalog
//! - `tolk eval` translates one message from loaded catalogs

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_check, run_coverage, run_eval, CheckArgs, CoverageArgs, EvalArgs};
use miette::MietteHandlerOpts;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tolk", about = "Message catalog tools", version)]
struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, global = true)]
    color: ColorChoice,

    /// Log library activity at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// `Auto` leaves the decision to owo-colors (TTY, NO_COLOR, FORCE_COLOR).
    fn apply(self) {
        match self {
            ColorChoice::Auto => {}
            ColorChoice::Always => owo_colors::set_override(true),
            ColorChoice::Never => owo_colors::set_override(false),
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check catalog documents for JSON and pattern errors
    Check(CheckArgs),
    /// Report translation coverage across locales
    Coverage(CoverageArgs),
    /// Translate a message from loaded catalogs
    Eval(EvalArgs),
}

impl Command {
    fn run(self) -> miette::Result<i32> {
        match self {
            Command::Check(args) => run_check(args),
            Command::Coverage(args) => run_coverage(args),
            Command::Eval(args) => run_eval(args),
        }
    }
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "tolk=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_target(false)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();
    init_logging(cli.verbose);
    miette::set_hook(Box::new(|_| {
        Box::new(MietteHandlerOpts::new().unicode(true).context_lines(2).build())
    }))?;

    let code = cli.command.run().unwrap_or_else(|report| {
        eprintln!("{report:?}");
        exitcode::SOFTWARE
    });
    exit(code)
}
