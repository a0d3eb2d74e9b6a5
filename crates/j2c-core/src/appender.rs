//! Appending channel links to `.items` files
//!
//! The loop runs link-outer, file-inner: every retained link is tried
//! against every file, and each file is re-read before each attempt so
//! that earlier appends are seen by later links. When two files declare
//! the same item name, both are modified.

use std::collections::HashSet;

use j2c_content::{ChannelFormat, ChannelLink, ItemsFileLine, append_channel, item_names};
use j2c_fs::io::split_lines;
use j2c_fs::{NormalizedPath, TextStore};

/// Options for a channel append run
#[derive(Debug, Clone, Copy, Default)]
pub struct AppendOptions {
    /// Match and count without writing any file.
    pub dry_run: bool,
    pub format: ChannelFormat,
}

/// A file that could not be read or written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendFailure {
    pub path: NormalizedPath,
    pub message: String,
}

/// Outcome of [`ChannelAppender::append_channels`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppendReport {
    /// Links given to the run.
    pub links_found: usize,
    /// Item declarations found across all files, duplicates included.
    pub items_found: usize,
    /// Links whose item name is declared in at least one file.
    pub matched: usize,
    /// Successful (link, file) appends.
    pub appended: usize,
    /// Files modified at least once, in first-modified order.
    pub modified_files: Vec<NormalizedPath>,
    pub failures: Vec<AppendFailure>,
}

impl AppendReport {
    fn fail(&mut self, path: &NormalizedPath, error: impl std::fmt::Display) {
        tracing::error!(path = %path, "{error}");
        self.failures.push(AppendFailure {
            path: path.clone(),
            message: error.to_string(),
        });
    }
}

/// Stitches channel links into item declarations through a [`TextStore`].
pub struct ChannelAppender<'a> {
    store: &'a dyn TextStore,
    options: AppendOptions,
}

impl<'a> ChannelAppender<'a> {
    pub fn new(store: &'a dyn TextStore, options: AppendOptions) -> Self {
        Self { store, options }
    }

    /// Append every matching link to the files that declare its item.
    ///
    /// Files are modified in place with no backup. The operation is not
    /// idempotent: a second run appends the clauses again.
    pub fn append_channels(
        &self,
        links: &[ChannelLink],
        files: &[NormalizedPath],
    ) -> AppendReport {
        let mut report = AppendReport {
            links_found: links.len(),
            ..Default::default()
        };

        let known = self.known_item_names(files, &mut report);
        let relevant: Vec<&ChannelLink> = links
            .iter()
            .filter(|link| known.contains(link.item_name.as_str()))
            .collect();
        report.matched = relevant.len();
        tracing::info!(
            links = report.links_found,
            items = report.items_found,
            matched = report.matched,
            "Matched channel links against items files"
        );

        for link in relevant {
            for file in files {
                match self.append_to_file(link, file) {
                    Ok(true) => {
                        report.appended += 1;
                        if !report.modified_files.contains(file) {
                            report.modified_files.push(file.clone());
                        }
                    }
                    Ok(false) => {}
                    Err(e) => report.fail(file, e),
                }
            }
        }

        tracing::info!(
            appended = report.appended,
            files = report.modified_files.len(),
            failures = report.failures.len(),
            dry_run = self.options.dry_run,
            "Channel append finished"
        );
        report
    }

    /// Union of item names declared across `files`.
    fn known_item_names(
        &self,
        files: &[NormalizedPath],
        report: &mut AppendReport,
    ) -> HashSet<String> {
        let mut known = HashSet::new();
        for file in files {
            let content = match self.store.read_text(file) {
                Ok(content) => content,
                Err(e) => {
                    report.fail(file, e);
                    continue;
                }
            };
            let names = item_names(content.lines());
            tracing::debug!(path = %file, items = names.len(), "Read item names");
            report.items_found += names.len();
            known.extend(names.into_iter().map(str::to_string));
        }
        known
    }

    /// Append `link` to the first declaration of its item in `file`.
    ///
    /// Returns whether the file content changed. Unchanged files are never
    /// written.
    pub fn append_to_file(&self, link: &ChannelLink, file: &NormalizedPath) -> j2c_fs::Result<bool> {
        let content = self.store.read_text(file)?;
        let (mut lines, ending) = split_lines(&content);

        let Some(index) = lines.iter().position(|line| {
            ItemsFileLine::classify(line).item_name() == Some(link.item_name.as_str())
        }) else {
            return Ok(false);
        };

        let updated = append_channel(&lines[index], link, self.options.format);
        if updated == lines[index] {
            return Ok(false);
        }
        tracing::debug!(
            path = %file,
            line = index + 1,
            item = %link.item_name,
            "{} -> {}",
            lines[index],
            updated
        );
        lines[index] = updated;

        if self.options.dry_run {
            tracing::info!(path = %file, item = %link.item_name, "[dry-run] Would append channel");
        } else {
            self.store.write_lines(file, &lines, ending)?;
        }
        Ok(true)
    }
}
