//! Coverage command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tolk::{Catalog, FailFast, TruncatingFallback};

use crate::commands::load_catalog_file;
use crate::output::table::{format_coverage_table, LocaleCoverage};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Source catalog (e.g., en.json). Its keys define the full set.
    #[arg(long)]
    pub source: PathBuf,

    /// Locales to check coverage for (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Directory containing translation catalogs. Defaults to the source
    /// file's directory.
    #[arg(long)]
    pub translations: Option<PathBuf>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    locale: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    // Exact per-locale keys only, so the fallback chain never matters here.
    let mut catalog = Catalog::new(Box::new(TruncatingFallback::new("")), Box::new(FailFast));
    let (source_locale, total) = load_catalog_file(&mut catalog, &args.source)?;
    // Frozen before translations load: a `<source>.json` in another
    // directory must not widen the reference set.
    let source_keys: Vec<String> = catalog
        .keys(&source_locale)
        .into_iter()
        .map(ToString::to_string)
        .collect();

    let base_dir = args
        .translations
        .clone()
        .or_else(|| args.source.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    let mut coverage = Vec::new();
    for locale in &args.lang {
        let file = base_dir.join(format!("{locale}.json"));
        if file.exists() {
            load_catalog_file(&mut catalog, &file)?;
        }

        let translated_keys = catalog.keys(locale);
        let missing: Vec<String> = source_keys
            .iter()
            .filter(|key| !translated_keys.contains(&key.as_str()))
            .cloned()
            .collect();

        coverage.push(LocaleCoverage {
            locale: locale.clone(),
            translated: total.saturating_sub(missing.len()),
            missing,
        });
    }

    let any_incomplete = coverage.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json: Vec<CoverageJson> = coverage
            .into_iter()
            .map(|c| CoverageJson {
                locale: c.locale,
                translated: c.translated,
                total,
                missing: c.missing,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
    } else {
        println!("{}", format_coverage_table(total, &coverage));
        for locale in &coverage {
            if !locale.missing.is_empty() {
                println!("\nMissing in {}:", locale.locale);
                for key in &locale.missing {
                    println!("  - {key}");
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
