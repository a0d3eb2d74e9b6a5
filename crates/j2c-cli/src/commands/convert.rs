//! The convert command

use std::path::Path;

use colored::Colorize;
use j2c_core::{ItemsExport, Settings};
use j2c_fs::{FsStore, NormalizedPath};

use super::items::report_diagnostics;
use crate::error::Result;

/// Render items as `.items` declarations, to stdout or to `output`.
pub fn run_convert(
    json: &Path,
    output: Option<&Path>,
    dry_run: bool,
    settings: &Settings,
) -> Result<()> {
    let store = FsStore::new();
    let export = ItemsExport::load(&store, &NormalizedPath::new(json), settings)?;

    match output {
        None => {
            for line in export.config_lines() {
                println!("{line}");
            }
        }
        Some(output) => {
            let target = NormalizedPath::new(output);
            let count = export.write_items_file(&store, &target, dry_run)?;
            if dry_run {
                println!(
                    "{} Would write {} items to {}",
                    "[dry-run]".yellow(),
                    count,
                    target
                );
            } else {
                println!("{} Wrote {} items to {}", "OK".green().bold(), count, target);
            }
        }
    }
    report_diagnostics(&export);
    Ok(())
}
