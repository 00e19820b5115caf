//! Implementation of the `tolk check` command.

use std::path::PathBuf;

use miette::{IntoDiagnostic, Report};
use owo_colors::OwoColorize;
use serde::Serialize;
use tolk::{Catalog, FailFast, TruncatingFallback};
use tracing::debug;

use crate::commands::load_catalog_file;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Catalog files to check (<locale>.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct CheckJson {
    file: String,
    locale: Option<String>,
    messages: usize,
    error: Option<String>,
}

/// Run the check command.
///
/// Every file is checked even after a failure; the exit code is
/// `DATAERR` if any file is invalid.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut results = Vec::new();
    let mut failed = false;

    for path in &args.files {
        // One catalog per file so a document is checked on its own.
        let mut catalog = Catalog::new(Box::new(TruncatingFallback::new("")), Box::new(FailFast));
        let outcome = load_catalog_file(&mut catalog, path);
        debug!(file = %path.display(), ok = outcome.is_ok(), "checked catalog");

        match outcome {
            Ok((locale, count)) => {
                if !args.json {
                    println!("{} {} ({locale}, {count} messages)", "ok".green(), path.display());
                }
                results.push(CheckJson {
                    file: path.display().to_string(),
                    locale: Some(locale),
                    messages: count,
                    error: None,
                });
            }
            Err(err) => {
                failed = true;
                if args.json {
                    results.push(CheckJson {
                        file: path.display().to_string(),
                        locale: None,
                        messages: 0,
                        error: Some(err.to_string()),
                    });
                } else {
                    eprintln!("{:?}", Report::new(err));
                }
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results).into_diagnostic()?);
    }

    Ok(if failed { exitcode::DATAERR } else { exitcode::OK })
}
