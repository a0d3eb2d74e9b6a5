//! The channels command

use std::path::Path;

use colored::Colorize;
use j2c_core::{AppendOptions, ChannelAppender, Settings, load_channel_links};
use j2c_content::ChannelFormat;
use j2c_fs::io::list_files_with_extension;
use j2c_fs::{FsStore, NormalizedPath};

use crate::error::Result;

/// Append the links of `links` to every matching declaration under `dir`.
///
/// Only an unreadable links document or directory fails the command;
/// per-file failures are listed and skipped.
pub fn run_channels(links: &Path, dir: &Path, dry_run: bool, settings: &Settings) -> Result<()> {
    let store = FsStore::new();
    let links = load_channel_links(&store, &NormalizedPath::new(links))?;
    if !links.diagnostics.is_empty() {
        eprintln!(
            "{} {} malformed channel link(s) skipped.",
            "warning:".yellow().bold(),
            links.diagnostics.len()
        );
    }

    let files = list_files_with_extension(&NormalizedPath::new(dir), &settings.items_extension)?;
    tracing::info!(files = files.len(), dir = %dir.display(), "Collected items files");

    let options = AppendOptions {
        dry_run,
        format: ChannelFormat {
            include_properties: settings.include_properties,
        },
    };
    let report = ChannelAppender::new(&store, options).append_channels(&links.value, &files);

    println!("Found {} channel links.", report.links_found);
    println!("Found {} items.", report.items_found);
    println!("{} match with each other.", report.matched);

    for failure in &report.failures {
        eprintln!("{} {}: {}", "error:".red().bold(), failure.path, failure.message);
    }

    if dry_run {
        println!(
            "{} Would append {} channel links to {} file(s).",
            "[dry-run]".yellow(),
            report.appended,
            report.modified_files.len()
        );
    } else {
        println!("Successfully appended {} channel links!", report.appended);
        println!(
            "{} You might need to manually fix some converting mistakes (double channels, etc.)",
            "Warning:".yellow().bold()
        );
    }
    Ok(())
}
