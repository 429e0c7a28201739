use custom_commands::command_editor::{CommandEditor, EditorField, ValidationError};
use custom_commands::command_list::{CommandListStore, RESERVED_NAMES};
use custom_commands::custom_command::{CommandFeature, CommandType, CustomCommand};
use custom_commands::settings_store::MemoryStore;

fn list_with(commands: Vec<CustomCommand>) -> CommandListStore {
    let mut list = CommandListStore::open(Box::new(MemoryStore::new())).unwrap();
    for c in commands {
        list.append(c);
    }
    list
}

fn foo() -> CustomCommand {
    CustomCommand::new(
        "1",
        "Foo",
        CommandFeature::ChatWithSelection {
            extra_system_prompt: Some("extra".into()),
            prompt: Some("Hello".into()),
        },
    )
}

#[test]
fn reserved_names_are_rejected_on_create() {
    let mut list = list_with(Vec::new());
    for name in RESERVED_NAMES {
        let mut editor = CommandEditor::create();
        editor.set_field(EditorField::Name(name.to_string()));
        assert_eq!(
            editor.commit(&mut list),
            Err(ValidationError::IllegalName),
            "{name} should be reserved"
        );
    }
    assert!(list.list().is_empty());
}

#[test]
fn unchanged_name_may_be_updated() {
    let mut list = list_with(vec![foo()]);
    assert!(list.illegal_names().contains("Foo"));

    let mut editor = CommandEditor::update(&list.list()[0]);
    editor.set_field(EditorField::Prompt("Goodbye".into()));
    let saved = editor.commit(&mut list).unwrap();

    assert_eq!(list.list(), &[saved]);
    assert_eq!(
        list.list()[0].feature,
        CommandFeature::ChatWithSelection {
            extra_system_prompt: Some("extra".into()),
            prompt: Some("Goodbye".into()),
        }
    );
}

#[test]
fn rename_to_existing_or_reserved_name_fails() {
    let bar = CustomCommand::new(
        "2",
        "Bar",
        CommandFeature::CustomChat {
            system_prompt: None,
            prompt: None,
        },
    );
    let mut list = list_with(vec![foo(), bar]);

    let mut editor = CommandEditor::update(&list.list()[0]);
    editor.set_field(EditorField::Name("Bar".into()));
    assert_eq!(editor.commit(&mut list), Err(ValidationError::IllegalName));

    editor.set_field(EditorField::Name("Prompt to Code".into()));
    assert_eq!(editor.commit(&mut list), Err(ValidationError::IllegalName));
    assert_eq!(list.list()[0], foo());
}

#[test]
fn empty_name_fails_in_both_modes() {
    let mut list = list_with(vec![foo()]);

    let mut create = CommandEditor::create();
    assert_eq!(create.commit(&mut list), Err(ValidationError::EmptyName));

    let mut update = CommandEditor::update(&list.list()[0]);
    update.set_field(EditorField::Name(String::new()));
    assert_eq!(update.commit(&mut list), Err(ValidationError::EmptyName));

    assert_eq!(list.list(), &[foo()]);
}

#[test]
fn whitespace_name_is_not_trimmed() {
    let mut list = list_with(Vec::new());
    let mut editor = CommandEditor::create();
    editor.set_field(EditorField::Name(" ".into()));
    let saved = editor.commit(&mut list).unwrap();
    assert_eq!(saved.name, " ");
}

#[test]
fn create_then_rename_scenario() {
    let mut list = list_with(vec![foo()]);

    let mut editor = CommandEditor::create();
    editor.set_field(EditorField::Name("Foo".into()));
    assert_eq!(editor.commit(&mut list), Err(ValidationError::IllegalName));

    editor.set_field(EditorField::Name("Bar".into()));
    let created = editor.commit(&mut list).unwrap();

    let names: Vec<_> = list.list().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Foo", "Bar"]);
    assert_eq!(list.list()[0].id, "1");
    assert_ne!(created.id, "1");
}

#[test]
fn update_of_deleted_command_appends() {
    let mut list = list_with(vec![foo()]);
    let mut editor = CommandEditor::update(&list.list()[0]);
    list.remove("Foo");

    editor.set_field(EditorField::Name("Foo again".into()));
    editor.commit(&mut list).unwrap();
    assert_eq!(list.list().len(), 1);
    assert_eq!(list.list()[0].id, "1");
    assert_eq!(list.list()[0].name, "Foo again");
}

#[test]
fn switching_type_recomposes_feature() {
    let mut list = list_with(vec![foo()]);
    let mut editor = CommandEditor::update(&list.list()[0]);
    editor.set_field(EditorField::CommandType(CommandType::PromptToCode));
    editor.set_field(EditorField::ContinuousMode(true));
    editor.commit(&mut list).unwrap();

    assert_eq!(
        list.list()[0].feature,
        CommandFeature::PromptToCode {
            extra_system_prompt: Some("extra".into()),
            prompt: Some("Hello".into()),
            continuous_mode: Some(true),
        }
    );
}

#[test]
fn cancel_leaves_list_untouched() {
    let list = list_with(vec![foo()]);
    let mut editor = CommandEditor::update(&list.list()[0]);
    editor.set_field(EditorField::Name("Changed".into()));
    editor.cancel();
    assert_eq!(list.list(), &[foo()]);
}

#[test]
fn second_commit_after_success_does_not_duplicate_id() {
    let mut list = list_with(vec![foo()]);
    let mut editor = CommandEditor::create();
    editor.set_field(EditorField::Name("Bar".into()));
    let created = editor.commit(&mut list).unwrap();

    editor.set_field(EditorField::Name("Baz".into()));
    assert_eq!(editor.commit(&mut list), Ok(created.clone()));

    let with_id: Vec<_> = list.list().iter().filter(|c| c.id == created.id).collect();
    assert_eq!(with_id, vec![&created]);
    let names: Vec<_> = list.list().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Foo", "Bar"]);
}
