//! The items command

use std::path::Path;

use colored::Colorize;
use j2c_core::{ItemsExport, Settings};
use j2c_fs::{FsStore, NormalizedPath};

use crate::error::Result;

/// Print one summary line per item, then a warning tally on stderr.
pub fn run_items(json: &Path, settings: &Settings) -> Result<()> {
    let export = ItemsExport::load(&FsStore::new(), &NormalizedPath::new(json), settings)?;

    for line in export.summary_lines() {
        println!("{line}");
    }
    report_diagnostics(&export);
    Ok(())
}

pub(crate) fn report_diagnostics(export: &ItemsExport) {
    let extraction = export.extraction();
    let warnings = extraction.warning_count();
    if warnings > 0 {
        eprintln!(
            "{} {} field(s) could not be read and were left empty. Run with {} for details.",
            "warning:".yellow().bold(),
            warnings,
            "-v".cyan()
        );
    }
    if extraction.aborted {
        if let Some((key, diagnostic)) = export.diagnostics().find(|(_, d)| d.is_fatal()) {
            eprintln!(
                "{} stopped at `{}`: {}",
                "warning:".yellow().bold(),
                key,
                diagnostic
            );
        }
    }
}
