use crate::command_editor::{CommandEditor, EditorField, ValidationError};
use crate::command_list::CommandListStore;
use crate::custom_command::CustomCommand;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferencesTab {
    #[default]
    CustomCommand,
    Advanced,
}

impl PreferencesTab {
    pub const ALL: [PreferencesTab; 2] = [PreferencesTab::CustomCommand, PreferencesTab::Advanced];

    pub fn title(self) -> &'static str {
        match self {
            PreferencesTab::CustomCommand => "Custom Command",
            PreferencesTab::Advanced => "Advanced",
        }
    }
}

/// One row of the command list as the view draws it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRow {
    pub id: String,
    pub name: String,
    pub subtitle: &'static str,
    pub selected: bool,
}

pub const EMPTY_LIST_HINT: &str = "Empty\nAdd command with \"+\" button";

/// State behind the custom command tab: the command list and the editor for
/// the current selection, if any.
pub struct CustomCommandPanel {
    list: CommandListStore,
    editor: Option<CommandEditor>,
}

impl CustomCommandPanel {
    pub fn new(list: CommandListStore) -> Self {
        Self { list, editor: None }
    }

    pub fn list(&self) -> &CommandListStore {
        &self.list
    }

    pub fn editor(&self) -> Option<&CommandEditor> {
        self.editor.as_ref()
    }

    pub fn rows(&self) -> Vec<CommandRow> {
        let selected = self.editor.as_ref().map(|e| e.id());
        self.list
            .list()
            .iter()
            .map(|c| CommandRow {
                id: c.id.clone(),
                name: c.name.clone(),
                subtitle: c.feature.command_type().label(),
                selected: selected == Some(c.id.as_str()),
            })
            .collect()
    }

    pub fn empty_hint(&self) -> Option<&'static str> {
        self.list.is_empty().then_some(EMPTY_LIST_HINT)
    }

    /// Open the editor for the command with `id`, discarding any staged edits.
    pub fn select_for_edit(&mut self, id: &str) {
        match self.list.find(id) {
            Some(command) => self.editor = Some(CommandEditor::update(command)),
            None => tracing::debug!(%id, "ignoring selection of unknown command"),
        }
    }

    pub fn select_create_new(&mut self) {
        self.editor = Some(CommandEditor::create());
    }

    pub fn move_rows(&mut self, from: impl IntoIterator<Item = usize>, to: usize) {
        self.list.move_rows(from, to);
    }

    pub fn delete_row(&mut self, name: &str) {
        self.list.remove(name);
    }

    pub fn set_field(&mut self, field: EditorField) {
        if let Some(editor) = self.editor.as_mut() {
            editor.set_field(field);
        }
    }

    /// Commit the open editor. Returns `Ok(None)` when nothing is being edited.
    pub fn commit(&mut self) -> Result<Option<CustomCommand>, ValidationError> {
        let Some(editor) = self.editor.as_mut() else {
            return Ok(None);
        };
        let command = editor.commit(&mut self.list)?;
        self.editor = None;
        Ok(Some(command))
    }

    pub fn cancel(&mut self) {
        if let Some(editor) = self.editor.take() {
            editor.cancel();
        }
    }

    /// Message to show under the editor after a rejected commit.
    pub fn error_message(&self) -> Option<String> {
        self.editor
            .as_ref()
            .and_then(|e| e.validation_error())
            .map(|e| e.to_string())
    }

    pub fn take_save_error(&mut self) -> Option<String> {
        self.list.take_save_error()
    }
}
