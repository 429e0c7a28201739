use crate::command_editor::{CommandEditor, EditMode, EditorField};
use crate::custom_command::CommandType;
use crate::preferences::CustomCommandPanel;
use eframe::egui;

const RESTART_NOTICE: &str =
    "After renaming or adding a custom command, restart the editor to refresh its menu.";

enum ListIntent {
    Select(String),
    CreateNew,
    Remove(String),
    Move { from: usize, to: usize },
}

/// Draw the custom command tab: the command list on the left and the editor
/// for the current selection on the right.
pub fn show(ui: &mut egui::Ui, panel: &mut CustomCommandPanel) {
    ui.columns(2, |cols| {
        list_ui(&mut cols[0], panel);
        editor_ui(&mut cols[1], panel);
    });
}

fn list_ui(ui: &mut egui::Ui, panel: &mut CustomCommandPanel) {
    let mut intent: Option<ListIntent> = None;
    let rows = panel.rows();
    ui.horizontal(|ui| {
        ui.strong("Commands");
        if ui.button("+").clicked() {
            intent = Some(ListIntent::CreateNew);
        }
    });
    ui.separator();
    if let Some(hint) = panel.empty_hint() {
        ui.vertical_centered(|ui| {
            ui.weak(hint);
        });
    }
    egui::ScrollArea::vertical()
        .id_source("custom_command_list")
        .show(ui, |ui| {
            let last = rows.len().saturating_sub(1);
            for (idx, row) in rows.iter().enumerate() {
                ui.horizontal(|ui| {
                    if ui.add_enabled(idx > 0, egui::Button::new("Up")).clicked() {
                        intent = Some(ListIntent::Move { from: idx, to: idx - 1 });
                    }
                    if ui.add_enabled(idx < last, egui::Button::new("Down")).clicked() {
                        intent = Some(ListIntent::Move { from: idx, to: idx + 1 });
                    }
                    let resp = ui.selectable_label(
                        row.selected,
                        format!("{}\n{}", row.name, row.subtitle),
                    );
                    if resp.clicked() {
                        intent = Some(ListIntent::Select(row.id.clone()));
                    }
                    resp.context_menu(|ui| {
                        if ui.button("Remove").clicked() {
                            intent = Some(ListIntent::Remove(row.name.clone()));
                            ui.close_menu();
                        }
                    });
                });
            }
        });

    match intent {
        Some(ListIntent::Select(id)) => panel.select_for_edit(&id),
        Some(ListIntent::CreateNew) => panel.select_create_new(),
        Some(ListIntent::Remove(name)) => panel.delete_row(&name),
        Some(ListIntent::Move { from, to }) => panel.move_rows([from], to),
        None => {}
    }
}

fn editor_ui(ui: &mut egui::Ui, panel: &mut CustomCommandPanel) {
    let Some(editor) = panel.editor() else {
        return;
    };
    let mut changes = form_ui(ui, editor);
    let is_new = editor.mode() == EditMode::Create;

    ui.separator();
    ui.weak(RESTART_NOTICE);
    if let Some(msg) = panel.error_message() {
        ui.colored_label(egui::Color32::RED, msg);
    }

    let mut commit = false;
    let mut cancel = false;
    ui.horizontal(|ui| {
        if ui.button("Cancel").clicked() {
            cancel = true;
        }
        if ui.button(if is_new { "Add" } else { "Update" }).clicked() {
            commit = true;
        }
    });

    for change in changes.drain(..) {
        panel.set_field(change);
    }
    if cancel {
        panel.cancel();
    } else if commit {
        if let Err(e) = panel.commit() {
            tracing::debug!("commit rejected: {e}");
        }
    }
}

fn form_ui(ui: &mut egui::Ui, editor: &CommandEditor) -> Vec<EditorField> {
    let mut changes = Vec::new();

    let mut name = editor.name().to_string();
    ui.horizontal(|ui| {
        ui.label("Name");
        if ui.text_edit_singleline(&mut name).changed() {
            changes.push(EditorField::Name(name.clone()));
        }
    });

    let mut command_type = editor.command_type();
    egui::ComboBox::from_label("Command Type")
        .selected_text(command_type.label())
        .show_ui(ui, |ui| {
            for t in CommandType::ALL {
                ui.selectable_value(&mut command_type, t, t.label());
            }
        });
    if command_type != editor.command_type() {
        changes.push(EditorField::CommandType(command_type));
    }

    let mut system_prompt = editor.system_prompt().to_string();
    ui.label(command_type.system_prompt_label());
    if prompt_editor(ui, &mut system_prompt).changed() {
        changes.push(EditorField::SystemPrompt(system_prompt));
    }

    let mut prompt = editor.prompt().to_string();
    ui.label("Prompt");
    if prompt_editor(ui, &mut prompt).changed() {
        changes.push(EditorField::Prompt(prompt));
    }

    if command_type.supports_continuous_mode() {
        let mut continuous = editor.continuous_mode();
        if ui.checkbox(&mut continuous, "Continuous Mode").changed() {
            changes.push(EditorField::ContinuousMode(continuous));
        }
    }
    changes
}

fn prompt_editor(ui: &mut egui::Ui, text: &mut String) -> egui::Response {
    ui.add(
        egui::TextEdit::multiline(text)
            .code_editor()
            .desired_rows(6)
            .desired_width(f32::INFINITY),
    )
}
