pub mod custom_command_dialog;

use crate::preferences::{CustomCommandPanel, PreferencesTab};
use crate::settings::Settings;
use crate::settings_editor::SettingsEditor;
use eframe::egui;

/// The preferences window: a tab bar over one settings page at a time.
pub struct PreferencesApp {
    settings: Settings,
    settings_path: String,
    tab: PreferencesTab,
    panel: CustomCommandPanel,
    settings_editor: SettingsEditor,
    error: Option<String>,
}

impl PreferencesApp {
    pub fn new(settings: Settings, settings_path: String, panel: CustomCommandPanel) -> Self {
        Self {
            tab: settings.last_tab,
            settings_editor: SettingsEditor::new(&settings),
            settings,
            settings_path,
            panel,
            error: None,
        }
    }

    pub fn set_error(&mut self, msg: String) {
        tracing::warn!("{msg}");
        self.error = Some(msg);
    }

    fn select_tab(&mut self, tab: PreferencesTab) {
        if self.tab == tab {
            return;
        }
        self.tab = tab;
        self.settings.last_tab = tab;
        if let Err(e) = self.settings.save(&self.settings_path) {
            self.set_error(format!("Failed to save settings: {e}"));
        }
    }

    fn tab_bar(&mut self, ui: &mut egui::Ui) {
        let mut selected = self.tab;
        ui.horizontal(|ui| {
            for tab in PreferencesTab::ALL {
                ui.selectable_value(&mut selected, tab, tab.title());
            }
        });
        self.select_tab(selected);
    }
}

impl eframe::App for PreferencesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(msg) = self.panel.take_save_error() {
            self.set_error(msg);
        }

        egui::TopBottomPanel::top("preferences_tabs").show(ctx, |ui| {
            self.tab_bar(ui);
        });

        if let Some(msg) = self.error.clone() {
            egui::TopBottomPanel::bottom("preferences_error").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::RED, msg);
                    if ui.button("Dismiss").clicked() {
                        self.error = None;
                    }
                });
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            PreferencesTab::CustomCommand => custom_command_dialog::show(ui, &mut self.panel),
            PreferencesTab::Advanced => {
                if let Some(updated) = self.settings_editor.ui(ui, &self.settings) {
                    match updated.save(&self.settings_path) {
                        Ok(()) => self.settings = updated,
                        Err(e) => self.set_error(format!("Failed to save settings: {e}")),
                    }
                }
            }
        });
    }
}
