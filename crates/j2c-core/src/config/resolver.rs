//! Layered settings resolution

use std::path::PathBuf;

use j2c_fs::{ConfigStore, NormalizedPath};

use super::settings::{Settings, SettingsFile};
use crate::{Error, Result};

/// File name of the project settings layer.
pub const PROJECT_SETTINGS_FILE: &str = "json2config.toml";

/// Resolves [`Settings`] from user, project and explicit layers.
pub struct SettingsResolver {
    /// Directory searched for [`PROJECT_SETTINGS_FILE`]
    root: NormalizedPath,

    /// Override for the user config directory (used for testing).
    /// When `None`, `dirs::config_dir()` is used.
    user_config_dir_override: Option<PathBuf>,

    /// File given on the command line
    explicit: Option<NormalizedPath>,
}

impl SettingsResolver {
    pub fn new(root: NormalizedPath) -> Self {
        Self {
            root,
            user_config_dir_override: None,
            explicit: None,
        }
    }

    pub fn with_user_config_dir(mut self, dir: PathBuf) -> Self {
        self.user_config_dir_override = Some(dir);
        self
    }

    pub fn with_explicit_file(mut self, path: Option<NormalizedPath>) -> Self {
        self.explicit = path;
        self
    }

    fn user_settings_path(&self) -> Option<NormalizedPath> {
        let dir = match &self.user_config_dir_override {
            Some(dir) => dir.clone(),
            None => dirs::config_dir()?.join("json2config"),
        };
        Some(NormalizedPath::new(dir.join("config.toml")))
    }

    /// Merge all layers over the defaults.
    ///
    /// Missing user and project files are skipped; a missing explicit file
    /// is an error, as is any file that fails to parse.
    pub fn resolve(&self) -> Result<Settings> {
        let store = ConfigStore::new();
        let mut settings = Settings::default();

        if let Some(user_path) = self.user_settings_path() {
            if user_path.is_file() {
                tracing::debug!(path = %user_path, "Loading user settings");
                settings.merge(&store.load::<SettingsFile>(&user_path)?);
            } else {
                tracing::debug!(path = %user_path, "No user settings found, skipping");
            }
        }

        let project_path = self.root.join(PROJECT_SETTINGS_FILE);
        if project_path.is_file() {
            tracing::debug!(path = %project_path, "Loading project settings");
            settings.merge(&store.load::<SettingsFile>(&project_path)?);
        }

        if let Some(explicit) = &self.explicit {
            if !explicit.is_file() {
                return Err(Error::SettingsNotFound {
                    path: explicit.to_native(),
                });
            }
            tracing::debug!(path = %explicit, "Loading explicit settings");
            settings.merge(&store.load::<SettingsFile>(explicit)?);
        }

        settings.validate()?;
        Ok(settings)
    }
}
