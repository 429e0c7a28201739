use crate::common::config_files::ensure_config_file;
use crate::custom_command::CustomCommand;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Key under which the ordered custom command list is persisted.
pub const CUSTOM_COMMANDS_KEY: &str = "customCommands";

/// Durable key-value storage for preference entries.
///
/// Writers replace a whole entry at a time; there is no merge between
/// concurrent writers, the last write wins.
pub trait SettingsStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<Value>>;
    fn set(&mut self, key: &str, value: Value) -> anyhow::Result<()>;
}

/// Store backed by a single JSON object file.
pub struct JsonFileStore {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl JsonFileStore {
    /// Open the store at `path`, creating an empty file if none exists.
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if ensure_config_file(&path, "{}")? {
            tracing::info!(path = %path.display(), "created settings store");
        }
        let content = std::fs::read_to_string(&path)?;
        let entries = if content.trim().is_empty() {
            Map::new()
        } else {
            serde_json::from_str(&content)?
        };
        tracing::debug!(path = %path.display(), keys = entries.len(), "opened settings store");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value);
        let json = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store, useful for previews and tests.
#[derive(Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Read the persisted custom command list. A missing entry is an empty list.
pub fn load_custom_commands(store: &dyn SettingsStore) -> anyhow::Result<Vec<CustomCommand>> {
    match store.get(CUSTOM_COMMANDS_KEY)? {
        Some(Value::Null) | None => Ok(Vec::new()),
        Some(value) => Ok(serde_json::from_value(value)?),
    }
}

/// Persist the full custom command list.
pub fn save_custom_commands(
    store: &mut dyn SettingsStore,
    commands: &[CustomCommand],
) -> anyhow::Result<()> {
    let value = serde_json::to_value(commands)?;
    store.set(CUSTOM_COMMANDS_KEY, value)
}
