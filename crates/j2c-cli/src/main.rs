//! json2config CLI
//!
//! Converts openHAB JSON database dumps into text configuration.

mod cli;
mod commands;
mod error;

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use j2c_core::{Settings, SettingsResolver};
use j2c_fs::NormalizedPath;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        println!("{} openHAB JSON database converter", "json2config".green().bold());
        println!();
        println!("Run {} for available commands.", "json2config --help".cyan());
        return Ok(());
    };

    let cwd = std::env::current_dir()?;
    let settings = SettingsSource {
        root: &cwd,
        explicit: cli.config.as_deref(),
        user_config_dir: cli.user_config_dir.as_deref(),
    };
    execute_command(command, &settings)
}

/// Logs go to stderr so stdout stays clean for rendered output.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
    tracing::debug!("Verbose mode enabled");
}

/// Where settings come from; resolved only by commands that need them.
struct SettingsSource<'a> {
    root: &'a Path,
    explicit: Option<&'a Path>,
    user_config_dir: Option<&'a Path>,
}

impl SettingsSource<'_> {
    fn resolve(&self) -> Result<Settings> {
        let mut resolver = SettingsResolver::new(NormalizedPath::new(self.root))
            .with_explicit_file(self.explicit.map(NormalizedPath::new));
        if let Some(dir) = self.user_config_dir {
            resolver = resolver.with_user_config_dir(PathBuf::from(dir));
        }
        Ok(resolver.resolve()?)
    }
}

fn execute_command(cmd: Commands, source: &SettingsSource<'_>) -> Result<()> {
    match cmd {
        Commands::Tree { json, indent } => commands::run_tree(&json, indent, source.resolve()?),
        Commands::Items { json } => commands::run_items(&json, &source.resolve()?),
        Commands::Convert {
            json,
            output,
            dry_run,
        } => commands::run_convert(&json, output.as_deref(), dry_run, &source.resolve()?),
        Commands::Channels {
            links,
            dir,
            dry_run,
            with_properties,
            extension,
        } => {
            let mut settings = source.resolve()?;
            if with_properties {
                settings.include_properties = true;
            }
            if let Some(ext) = extension {
                settings.items_extension = ext.trim_start_matches('.').to_string();
            }
            commands::run_channels(&links, &dir, dry_run, &settings)
        }
        Commands::Settings { json } => commands::run_settings(&source.resolve()?, json),
        Commands::Completions { shell } => {
            commands::run_completions(shell);
            Ok(())
        }
    }
}
