//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// json2config - Turn openHAB JSON database dumps into text configuration
#[derive(Parser, Debug)]
#[command(name = "json2config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (TOML, JSON or YAML), applied over all other layers
    #[arg(long, global = true, env = "JSON2CONFIG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the user settings file
    #[arg(long, global = true, hide = true, env = "JSON2CONFIG_USER_CONFIG_DIR")]
    pub user_config_dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print a JSON document as an indented key tree
    Tree {
        /// JSON document to print
        json: PathBuf,

        /// Spaces per indentation level
        #[arg(long)]
        indent: Option<usize>,
    },

    /// Print one summary line per persisted item
    Items {
        /// Item database dump (e.g. org.eclipse.smarthome.core.items.Item.json)
        json: PathBuf,
    },

    /// Render persisted items as `.items` declarations
    ///
    /// Examples:
    ///   json2config convert Item.json                 # Print to stdout
    ///   json2config convert Item.json -o all.items    # Write a file
    Convert {
        /// Item database dump
        json: PathBuf,

        /// Write the declarations to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report what would be written without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Append exported channel links to the `.items` files of a directory
    ///
    /// Files are modified in place and the command is not idempotent:
    /// running it twice appends every channel twice.
    Channels {
        /// Channel-link database dump (e.g. org.eclipse.smarthome.core.thing.link.ItemChannelLink.json)
        links: PathBuf,

        /// Directory containing the `.items` files
        dir: PathBuf,

        /// Count matches without modifying any file
        #[arg(long)]
        dry_run: bool,

        /// Also write link properties as a profile block
        #[arg(long)]
        with_properties: bool,

        /// Extension of the files to edit
        #[arg(long)]
        extension: Option<String>,
    },

    /// Show the effective settings
    Settings {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
