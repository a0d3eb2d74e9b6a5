//! Settings display and shell completions

use std::io;

use clap::CommandFactory;
use clap_complete::Shell;
use j2c_core::Settings;

use crate::cli::Cli;
use crate::error::Result;

/// Print the effective settings as TOML, or JSON with `json`.
pub fn run_settings(settings: &Settings, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(settings)?);
    } else {
        print!("{}", toml::to_string_pretty(settings)?);
    }
    Ok(())
}

pub fn run_completions(shell: Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
}
