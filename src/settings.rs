use crate::common::config_files::resolve_config_path;
use crate::preferences::PreferencesTab;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "settings.json";
pub const DEFAULT_COMMANDS_FILE: &str = "preferences.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file receiving a copy of the log output.
    #[serde(default)]
    pub log_file: Option<String>,
    /// Location of the key-value store holding the custom commands. Relative
    /// paths are resolved against the settings file directory.
    #[serde(default)]
    pub commands_path: Option<String>,
    /// Last known window size. If absent, a default size is used.
    #[serde(default = "default_window_size")]
    pub window_size: Option<(i32, i32)>,
    #[serde(default)]
    pub last_tab: PreferencesTab,
}

fn default_window_size() -> Option<(i32, i32)> {
    Some((800, 480))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            commands_path: None,
            window_size: default_window_size(),
            last_tab: PreferencesTab::default(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Path of the custom command store for a settings file at `settings_path`.
    pub fn commands_path(&self, settings_path: &Path) -> PathBuf {
        let relative = self
            .commands_path
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(DEFAULT_COMMANDS_FILE);
        resolve_config_path(settings_path, relative)
    }

    pub fn log_file_path(&self, settings_path: &Path) -> Option<PathBuf> {
        self.log_file
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(|p| resolve_config_path(settings_path, p))
    }
}

/// Default location of the settings file: the per-user config directory,
/// falling back to the working directory.
pub fn default_settings_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|dir| dir.join("custom_commands"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(SETTINGS_FILE)
}
