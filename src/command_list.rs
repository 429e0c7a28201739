use crate::custom_command::CustomCommand;
use crate::settings_store::{load_custom_commands, save_custom_commands, SettingsStore};
use std::collections::{BTreeSet, HashSet};

/// Names of built-in editor actions. Custom commands may not reuse them.
pub const RESERVED_NAMES: [&str; 10] = [
    "Get Suggestions",
    "Accept Suggestion",
    "Reject Suggestion",
    "Next Suggestion",
    "Previous Suggestion",
    "Toggle Real-time Suggestions",
    "Real-time Suggestions",
    "Prefetch Suggestions",
    "Chat with Selection",
    "Prompt to Code",
];

/// Ordered list of custom commands, written through to a [`SettingsStore`]
/// after every mutation.
///
/// This is the only writer of the persisted list. Name uniqueness is not
/// enforced here; see [`crate::command_editor::CommandEditor`].
pub struct CommandListStore {
    store: Box<dyn SettingsStore>,
    commands: Vec<CustomCommand>,
    save_error: Option<String>,
}

impl CommandListStore {
    /// Load the current list from `store`.
    pub fn open(store: Box<dyn SettingsStore>) -> anyhow::Result<Self> {
        let commands = load_custom_commands(store.as_ref())?;
        tracing::debug!(count = commands.len(), "loaded custom commands");
        Ok(Self {
            store,
            commands,
            save_error: None,
        })
    }

    pub fn list(&self) -> &[CustomCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&CustomCommand> {
        self.commands.iter().find(|c| c.id == id)
    }

    pub fn append(&mut self, command: CustomCommand) {
        tracing::debug!(id = %command.id, name = %command.name, "append custom command");
        self.commands.push(command);
        self.persist();
    }

    /// Overwrite the command with `id` in place. Appends when no such command
    /// exists any more.
    pub fn replace(&mut self, id: &str, command: CustomCommand) {
        match self.commands.iter().position(|c| c.id == id) {
            Some(pos) => {
                tracing::debug!(%id, pos, "replace custom command");
                self.commands[pos] = command;
            }
            None => {
                tracing::debug!(%id, "custom command not found, appending instead");
                self.commands.push(command);
            }
        }
        self.persist();
    }

    /// Remove every command called `name`.
    pub fn remove(&mut self, name: &str) {
        let before = self.commands.len();
        self.commands.retain(|c| c.name != name);
        let removed = before - self.commands.len();
        tracing::debug!(%name, removed, "remove custom command");
        if removed > 0 {
            self.persist();
        }
    }

    /// Move the rows at `from` so they start at `to` in the resulting list,
    /// keeping their relative order. Out of range source indices are ignored
    /// and `to` is clamped to the end of the list.
    pub fn move_rows(&mut self, from: impl IntoIterator<Item = usize>, to: usize) {
        let len = self.commands.len();
        let indices: BTreeSet<usize> = from.into_iter().filter(|&i| i < len).collect();
        if indices.is_empty() {
            return;
        }
        let mut moved = Vec::with_capacity(indices.len());
        let mut kept = Vec::with_capacity(len - indices.len());
        for (idx, command) in std::mem::take(&mut self.commands).into_iter().enumerate() {
            if indices.contains(&idx) {
                moved.push(command);
            } else {
                kept.push(command);
            }
        }
        let at = to.min(kept.len());
        kept.splice(at..at, moved);
        self.commands = kept;
        tracing::debug!(?indices, to = at, "moved custom commands");
        self.persist();
    }

    /// Names a new or renamed command may not take: every existing command
    /// name plus [`RESERVED_NAMES`].
    pub fn illegal_names(&self) -> HashSet<String> {
        self.commands
            .iter()
            .map(|c| c.name.clone())
            .chain(RESERVED_NAMES.iter().map(|n| n.to_string()))
            .collect()
    }

    /// Message from the most recent failed write, if any.
    pub fn take_save_error(&mut self) -> Option<String> {
        self.save_error.take()
    }

    fn persist(&mut self) {
        if let Err(e) = save_custom_commands(self.store.as_mut(), &self.commands) {
            tracing::error!("failed to save custom commands: {e}");
            self.save_error = Some(format!("Failed to save commands: {e}"));
        }
    }
}
