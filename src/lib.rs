pub mod command_editor;
pub mod command_list;
pub mod common;
pub mod custom_command;
pub mod gui;
pub mod logging;
pub mod preferences;
pub mod settings;
pub mod settings_editor;
pub mod settings_store;
