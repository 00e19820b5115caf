//! Coverage table rendering.

use comfy_table::{presets, ContentArrangement, Table};

/// How much of the source catalog one locale translates.
pub struct LocaleCoverage {
    pub locale: String,
    pub translated: usize,
    /// Source keys without a translation, sorted.
    pub missing: Vec<String>,
}

impl LocaleCoverage {
    pub fn percent(&self, total: usize) -> f64 {
        if total == 0 {
            100.0
        } else {
            self.translated as f64 * 100.0 / total as f64
        }
    }
}

pub fn format_coverage_table(total: usize, coverage: &[LocaleCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Locale", "Coverage", "Percent", "Missing"]);

    for locale in coverage {
        table.add_row(vec![
            locale.locale.clone(),
            format!("{}/{}", locale.translated, total),
            format!("{:.1}%", locale.percent(total)),
            locale.missing.len().to_string(),
        ]);
    }

    table
}
