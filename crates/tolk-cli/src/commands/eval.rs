//! Implementation of the `tolk eval` command.

use std::fs::read_dir;
use std::io;
use std::path::{Path, PathBuf};

use miette::IntoDiagnostic;
use serde::Serialize;
use tolk::{LogAndSubstitute, MessageRequest, MissingTextStrategy, TranslationService, Value};
use tracing::debug;

use crate::commands::load_catalog_file;
use crate::output::CliError;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Message key to translate
    #[arg(long, required = true)]
    pub key: String,

    /// Catalog files or directories of <locale>.json files (repeatable)
    #[arg(long = "catalog", required = true)]
    pub catalogs: Vec<PathBuf>,

    /// Locale to translate into. Defaults to the default locale.
    #[arg(long)]
    pub locale: Option<String>,

    /// Default locale, the tail of every fallback chain
    #[arg(long, env = "TOLK_LOCALE")]
    pub default_locale: Option<String>,

    /// Arguments in name=value format, bound in order (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Substitute missing texts instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub key: String,
    pub locale: String,
    pub result: String,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid parameter format '{s}': expected name=value"))?;
    Ok((name.to_string(), value.to_string()))
}

/// Interpret a command-line value: integer, then float, else string.
fn parse_value(raw: String) -> Value {
    if let Ok(n) = raw.parse::<i128>() {
        Value::Integer(n)
    } else if let Ok(f) = raw.parse::<f64>() {
        Value::Float(f)
    } else {
        Value::String(raw)
    }
}

/// Catalog files named by `path`: the file itself, or every `.json` file in
/// a directory, sorted.
fn catalog_files(path: &Path) -> Result<Vec<PathBuf>, CliError> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }
    let read_error = |source: io::Error| CliError::Read {
        path: path.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in read_dir(path).map_err(read_error)? {
        let file = entry.map_err(read_error)?.path();
        if file.extension().is_some_and(|ext| ext == "json") {
            files.push(file);
        }
    }
    files.sort();
    Ok(files)
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let missing_text: Option<Box<dyn MissingTextStrategy>> = if args.lenient {
        Some(Box::new(LogAndSubstitute))
    } else {
        None
    };
    let mut service = TranslationService::builder()
        .maybe_default_locale(args.default_locale)
        .maybe_missing_text(missing_text)
        .build();
    let default_locale = service.default_locale().to_string();
    service.register_builtin_messages(&default_locale);

    for path in &args.catalogs {
        for file in catalog_files(path)? {
            let (locale, count) = load_catalog_file(service.catalog_mut(), &file)?;
            debug!(file = %file.display(), locale, count, "loaded catalog");
        }
    }

    let request = args
        .params
        .into_iter()
        .fold(MessageRequest::new(&args.key), |request, (name, raw)| {
            request.bind(name, parse_value(raw))
        });
    let locale = args.locale.unwrap_or(default_locale);

    match service.translate_to(&request, &locale) {
        Ok(result) => {
            if args.json {
                let output = EvalResult {
                    key: args.key,
                    locale,
                    result,
                };
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                println!("{result}");
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({ "error": e.to_string() });
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("Translation error: {e}");
            }
            Ok(exitcode::DATAERR)
        }
    }
}
