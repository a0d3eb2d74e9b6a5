//! The tree command

use std::path::Path;

use j2c_core::{Settings, load_document, tree_text};
use j2c_fs::{FsStore, NormalizedPath};

use crate::error::Result;

/// Print `json` as an indented key tree.
pub fn run_tree(json: &Path, indent: Option<usize>, mut settings: Settings) -> Result<()> {
    if let Some(indent) = indent {
        settings.indent = indent;
        settings.validate()?;
    }

    let document = load_document(&FsStore::new(), &NormalizedPath::new(json))?;
    print!("{}", tree_text(&document, &settings));
    Ok(())
}
