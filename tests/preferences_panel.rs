use custom_commands::command_editor::{EditorField, ValidationError};
use custom_commands::command_list::CommandListStore;
use custom_commands::custom_command::{CommandFeature, CommandType, CustomCommand};
use custom_commands::preferences::{CustomCommandPanel, PreferencesTab};
use custom_commands::settings::Settings;
use custom_commands::settings_store::{load_custom_commands, JsonFileStore, MemoryStore};
use tempfile::tempdir;

fn panel_with(commands: Vec<CustomCommand>) -> CustomCommandPanel {
    let mut list = CommandListStore::open(Box::new(MemoryStore::new())).unwrap();
    for c in commands {
        list.append(c);
    }
    CustomCommandPanel::new(list)
}

fn foo() -> CustomCommand {
    CustomCommand::new(
        "1",
        "Foo",
        CommandFeature::ChatWithSelection {
            extra_system_prompt: None,
            prompt: Some("Hello".into()),
        },
    )
}

#[test]
fn failed_update_keeps_editor_open_and_list_unchanged() {
    let mut panel = panel_with(vec![foo()]);
    panel.select_for_edit("1");
    panel.set_field(EditorField::Name(String::new()));

    assert_eq!(panel.commit(), Err(ValidationError::EmptyName));
    assert_eq!(
        panel.error_message().as_deref(),
        Some("Command name cannot be empty.")
    );
    assert!(panel.editor().is_some());
    assert_eq!(panel.list().list(), &[foo()]);

    panel.set_field(EditorField::Name("Foo".into()));
    assert!(panel.commit().unwrap().is_some());
    assert!(panel.editor().is_none());
    assert_eq!(panel.error_message(), None);
}

#[test]
fn new_selection_discards_staged_edits() {
    let mut panel = panel_with(vec![foo()]);
    panel.select_for_edit("1");
    panel.set_field(EditorField::Prompt("unsaved".into()));
    panel.select_create_new();
    panel.select_for_edit("1");
    assert_eq!(panel.editor().map(|e| e.prompt()), Some("Hello"));
}

#[test]
fn rows_carry_type_subtitles_and_reorder() {
    let mut panel = panel_with(vec![
        foo(),
        CustomCommand::new(
            "2",
            "Refactor Code",
            CommandFeature::PromptToCode {
                extra_system_prompt: None,
                prompt: Some("Refactor".into()),
                continuous_mode: Some(false),
            },
        ),
    ]);
    panel.move_rows([1], 0);
    let rows = panel.rows();
    assert_eq!(rows[0].name, "Refactor Code");
    assert_eq!(rows[0].subtitle, CommandType::PromptToCode.label());
    assert_eq!(rows[1].subtitle, "Chat with Selection");
    assert!(panel.empty_hint().is_none());

    panel.delete_row("Refactor Code");
    panel.delete_row("Foo");
    assert!(panel.empty_hint().is_some());
}

#[test]
fn panel_session_persists_to_disk() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("settings.json");
    let settings = Settings::default();
    let commands_path = settings.commands_path(&settings_path);

    let store = JsonFileStore::open(&commands_path).unwrap();
    let mut panel = CustomCommandPanel::new(CommandListStore::open(Box::new(store)).unwrap());
    panel.select_create_new();
    panel.set_field(EditorField::Name("Explain".into()));
    panel.set_field(EditorField::CommandType(CommandType::CustomChat));
    panel.set_field(EditorField::SystemPrompt("You explain code.".into()));
    let created = panel.commit().unwrap().unwrap();

    let reopened = JsonFileStore::open(&commands_path).unwrap();
    let persisted = load_custom_commands(&reopened).unwrap();
    assert_eq!(persisted, vec![created]);
}

#[test]
fn settings_roundtrip_remembers_tab() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let path = path.to_str().unwrap();

    assert_eq!(Settings::load(path).unwrap(), Settings::default());

    let settings = Settings {
        debug_logging: true,
        last_tab: PreferencesTab::Advanced,
        ..Settings::default()
    };
    settings.save(path).unwrap();
    assert_eq!(Settings::load(path).unwrap(), settings);
}
