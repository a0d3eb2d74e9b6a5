//! Settings resolution
//!
//! Settings are merged from these sources, later ones overriding earlier:
//!
//! 1. **Built-in defaults**
//! 2. **User settings** - `<config_dir>/json2config/config.toml`
//! 3. **Project settings** - `json2config.toml` in the working directory
//! 4. **Explicit file** - passed with `--config`, any of TOML/JSON/YAML
//!
//! Command-line flags are applied by the CLI after resolution.

mod resolver;
mod settings;

pub use resolver::{PROJECT_SETTINGS_FILE, SettingsResolver};
pub use settings::{Settings, SettingsFile};
