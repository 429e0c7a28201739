use custom_commands::command_list::CommandListStore;
use custom_commands::gui::PreferencesApp;
use custom_commands::logging;
use custom_commands::preferences::CustomCommandPanel;
use custom_commands::settings::{default_settings_path, Settings};
use custom_commands::settings_store::JsonFileStore;

use eframe::egui;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_settings_path);
    if let Some(parent) = settings_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let settings_path_str = settings_path.to_string_lossy().to_string();
    let settings = Settings::load(&settings_path_str)?;
    logging::init(settings.debug_logging, settings.log_file_path(&settings_path));
    tracing::info!(path = %settings_path.display(), "starting preferences");

    let store = JsonFileStore::open(settings.commands_path(&settings_path))?;
    let list = CommandListStore::open(Box::new(store))?;
    let panel = CustomCommandPanel::new(list);

    let (w, h) = settings.window_size.unwrap_or((800, 480));
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([w as f32, h as f32])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    let app = PreferencesApp::new(settings, settings_path_str, panel);
    eframe::run_native(
        "Preferences",
        native_options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("failed to run preferences window: {e}"))
}
