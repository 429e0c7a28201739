use crate::command_list::CommandListStore;
use crate::custom_command::{new_command_id, CommandFeature, CommandType, CustomCommand};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Command name is illegal.")]
    IllegalName,
    #[error("Command name cannot be empty.")]
    EmptyName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Create,
    Update,
}

/// A single staged field change.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorField {
    Name(String),
    CommandType(CommandType),
    Prompt(String),
    SystemPrompt(String),
    ContinuousMode(bool),
}

/// Staged edits for one command.
///
/// The editor keeps the union of every variant's fields so switching the
/// command type back and forth does not lose typed text; only the fields of
/// the selected type survive [`CommandEditor::candidate`].
#[derive(Debug, Clone)]
pub struct CommandEditor {
    mode: EditMode,
    id: String,
    original_name: String,
    name: String,
    command_type: CommandType,
    prompt: String,
    system_prompt: String,
    continuous_mode: bool,
    validation_error: Option<ValidationError>,
    committed: Option<CustomCommand>,
}

impl CommandEditor {
    /// Start editing a brand new command.
    pub fn create() -> Self {
        Self {
            mode: EditMode::Create,
            id: new_command_id(),
            original_name: String::new(),
            name: String::new(),
            command_type: CommandType::ChatWithSelection,
            prompt: String::new(),
            system_prompt: String::new(),
            continuous_mode: false,
            validation_error: None,
            committed: None,
        }
    }

    /// Start editing an existing command.
    pub fn update(command: &CustomCommand) -> Self {
        let (command_type, system_prompt, prompt, continuous_mode) = match &command.feature {
            CommandFeature::ChatWithSelection {
                extra_system_prompt,
                prompt,
            } => (
                CommandType::ChatWithSelection,
                extra_system_prompt.clone(),
                prompt.clone(),
                None,
            ),
            CommandFeature::CustomChat {
                system_prompt,
                prompt,
            } => (
                CommandType::CustomChat,
                system_prompt.clone(),
                prompt.clone(),
                None,
            ),
            CommandFeature::PromptToCode {
                extra_system_prompt,
                prompt,
                continuous_mode,
            } => (
                CommandType::PromptToCode,
                extra_system_prompt.clone(),
                prompt.clone(),
                *continuous_mode,
            ),
        };
        Self {
            mode: EditMode::Update,
            id: command.id.clone(),
            original_name: command.name.clone(),
            name: command.name.clone(),
            command_type,
            prompt: prompt.unwrap_or_default(),
            system_prompt: system_prompt.unwrap_or_default(),
            continuous_mode: continuous_mode.unwrap_or(false),
            validation_error: None,
            committed: None,
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn command_type(&self) -> CommandType {
        self.command_type
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn continuous_mode(&self) -> bool {
        self.continuous_mode
    }

    /// Error from the last rejected commit, cleared by the next commit attempt.
    pub fn validation_error(&self) -> Option<ValidationError> {
        self.validation_error
    }

    /// True once a commit succeeded. The session is closed from then on.
    pub fn is_finished(&self) -> bool {
        self.committed.is_some()
    }

    /// Stage a field change. Ignored once the session is finished.
    pub fn set_field(&mut self, field: EditorField) {
        if self.is_finished() {
            tracing::debug!(id = %self.id, "ignoring edit on finished session");
            return;
        }
        match field {
            EditorField::Name(name) => self.name = name,
            EditorField::CommandType(command_type) => self.command_type = command_type,
            EditorField::Prompt(prompt) => self.prompt = prompt,
            EditorField::SystemPrompt(system_prompt) => self.system_prompt = system_prompt,
            EditorField::ContinuousMode(on) => self.continuous_mode = on,
        }
    }

    /// Build the command the staged fields describe.
    pub fn candidate(&self) -> CustomCommand {
        let feature = match self.command_type {
            CommandType::ChatWithSelection => CommandFeature::ChatWithSelection {
                extra_system_prompt: Some(self.system_prompt.clone()),
                prompt: Some(self.prompt.clone()),
            },
            CommandType::PromptToCode => CommandFeature::PromptToCode {
                extra_system_prompt: Some(self.system_prompt.clone()),
                prompt: Some(self.prompt.clone()),
                continuous_mode: Some(self.continuous_mode),
            },
            CommandType::CustomChat => CommandFeature::CustomChat {
                system_prompt: Some(self.system_prompt.clone()),
                prompt: Some(self.prompt.clone()),
            },
        };
        CustomCommand::new(self.id.clone(), self.name.clone(), feature)
    }

    fn validate(&self, candidate: &CustomCommand, list: &CommandListStore) -> Result<(), ValidationError> {
        let unchanged = self.mode == EditMode::Update && candidate.name == self.original_name;
        if !unchanged && list.illegal_names().contains(&candidate.name) {
            return Err(ValidationError::IllegalName);
        }
        if candidate.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(())
    }

    /// Validate the staged command and write it to `list`.
    ///
    /// On failure the error is kept in [`Self::validation_error`] and the
    /// editor stays usable. A successful commit ends the session: later
    /// commits return the saved command without writing again.
    pub fn commit(&mut self, list: &mut CommandListStore) -> Result<CustomCommand, ValidationError> {
        if let Some(saved) = &self.committed {
            tracing::debug!(id = %saved.id, "session already committed");
            return Ok(saved.clone());
        }
        let candidate = self.candidate();
        if let Err(e) = self.validate(&candidate, list) {
            tracing::info!(name = %candidate.name, "rejected custom command: {e}");
            self.validation_error = Some(e);
            return Err(e);
        }
        self.validation_error = None;
        match self.mode {
            EditMode::Create => list.append(candidate.clone()),
            EditMode::Update => list.replace(&candidate.id, candidate.clone()),
        }
        self.committed = Some(candidate.clone());
        Ok(candidate)
    }

    /// Discard the staged edits.
    pub fn cancel(self) {
        tracing::debug!(id = %self.id, "discarded custom command edits");
    }
}
