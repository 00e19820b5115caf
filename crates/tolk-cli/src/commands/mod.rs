//! CLI command implementations.

mod check;
mod coverage;
mod eval;

use std::fs::read_to_string;
use std::path::Path;

use tolk::Catalog;

use crate::output::CliError;

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use eval::{run_eval, EvalArgs};

/// The locale a catalog file holds: its file stem (`de_CH.json` -> `de_CH`).
pub fn locale_of(path: &Path) -> Result<String, CliError> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(ToString::to_string)
        .ok_or_else(|| CliError::NoLocale {
            path: path.to_path_buf(),
        })
}

/// Load the catalog document at `path` into `catalog` under its locale.
///
/// Returns the locale and the number of messages registered.
pub fn load_catalog_file(catalog: &mut Catalog, path: &Path) -> Result<(String, usize), CliError> {
    let locale = locale_of(path)?;
    let content = read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let count = catalog
        .load_json_str(&locale, &content)
        .map_err(|err| CliError::from_load(path, &content, err))?;
    Ok((locale, count))
}
