use serde::{Deserialize, Serialize};

/// A user-defined prompt template bound to one of the built-in command
/// behaviours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomCommand {
    /// Assigned once when the command is created and never changed afterwards.
    #[serde(alias = "commandId")]
    pub id: String,
    pub name: String,
    pub feature: CommandFeature,
}

impl CustomCommand {
    pub fn new(id: impl Into<String>, name: impl Into<String>, feature: CommandFeature) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            feature,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommandFeature {
    #[serde(rename_all = "camelCase")]
    ChatWithSelection {
        #[serde(default)]
        extra_system_prompt: Option<String>,
        #[serde(default)]
        prompt: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    CustomChat {
        #[serde(default)]
        system_prompt: Option<String>,
        #[serde(default)]
        prompt: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    PromptToCode {
        #[serde(default)]
        extra_system_prompt: Option<String>,
        #[serde(default)]
        prompt: Option<String>,
        #[serde(default)]
        continuous_mode: Option<bool>,
    },
}

impl CommandFeature {
    pub fn command_type(&self) -> CommandType {
        match self {
            CommandFeature::ChatWithSelection { .. } => CommandType::ChatWithSelection,
            CommandFeature::CustomChat { .. } => CommandType::CustomChat,
            CommandFeature::PromptToCode { .. } => CommandType::PromptToCode,
        }
    }
}

/// Discriminant of [`CommandFeature`], used by the editor's type picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CommandType {
    #[default]
    ChatWithSelection,
    PromptToCode,
    CustomChat,
}

impl CommandType {
    /// All types in the order the picker shows them.
    pub const ALL: [CommandType; 3] = [
        CommandType::ChatWithSelection,
        CommandType::PromptToCode,
        CommandType::CustomChat,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CommandType::ChatWithSelection => "Chat with Selection",
            CommandType::PromptToCode => "Prompt to Code",
            CommandType::CustomChat => "Custom Chat",
        }
    }

    /// Title of the system prompt editor for this type.
    pub fn system_prompt_label(self) -> &'static str {
        match self {
            CommandType::ChatWithSelection | CommandType::PromptToCode => "Extra System Prompt",
            CommandType::CustomChat => "System Prompt",
        }
    }

    pub fn supports_continuous_mode(self) -> bool {
        matches!(self, CommandType::PromptToCode)
    }
}

impl std::fmt::Display for CommandType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Generate a fresh identifier for a new command.
pub fn new_command_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
