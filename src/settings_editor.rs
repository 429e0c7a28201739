use crate::settings::Settings;
use eframe::egui;

/// Form behind the "Advanced" tab. Edits a copy of the settings and writes
/// them back when saved.
#[derive(Default)]
pub struct SettingsEditor {
    debug_logging: bool,
    log_file: String,
    commands_path: String,
}

impl SettingsEditor {
    pub fn new(settings: &Settings) -> Self {
        Self {
            debug_logging: settings.debug_logging,
            log_file: settings.log_file.clone().unwrap_or_default(),
            commands_path: settings.commands_path.clone().unwrap_or_default(),
        }
    }

    pub fn to_settings(&self, current: &Settings) -> Settings {
        Settings {
            debug_logging: self.debug_logging,
            log_file: if self.log_file.trim().is_empty() {
                None
            } else {
                Some(self.log_file.trim().to_string())
            },
            commands_path: if self.commands_path.trim().is_empty() {
                None
            } else {
                Some(self.commands_path.trim().to_string())
            },
            window_size: current.window_size,
            last_tab: current.last_tab,
        }
    }

    /// Draw the form. Returns the new settings when "Save" was clicked.
    pub fn ui(&mut self, ui: &mut egui::Ui, current: &Settings) -> Option<Settings> {
        ui.horizontal(|ui| {
            egui::ComboBox::from_label("Debug logging")
                .selected_text(if self.debug_logging {
                    "Enabled"
                } else {
                    "Disabled"
                })
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.debug_logging, false, "Disabled");
                    ui.selectable_value(&mut self.debug_logging, true, "Enabled");
                });
        });
        ui.horizontal(|ui| {
            ui.label("Log file");
            ui.text_edit_singleline(&mut self.log_file);
        });
        ui.horizontal(|ui| {
            ui.label("Commands file");
            ui.text_edit_singleline(&mut self.commands_path);
        });
        ui.weak("Logging and file changes apply on next launch.");

        if ui.button("Save").clicked() {
            return Some(self.to_settings(current));
        }
        None
    }
}
