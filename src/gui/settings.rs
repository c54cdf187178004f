use eframe::egui;
use log::info;
use std::path::PathBuf;

use crate::labeler::LabelerConfig;

/// Editable copy of the config shown in the settings panel.
///
/// Edits only take effect once applied.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SettingsDraft {
    pub folder: String,
    pub extension: String,
    pub output: String,
}

impl SettingsDraft {
    pub fn from_config(config: &LabelerConfig) -> Self {
        SettingsDraft {
            folder: config.folder.display().to_string(),
            extension: config.extension.clone(),
            output: config.output.display().to_string(),
        }
    }

    /// Returns the config with the draft's values, or `None` when a field is
    /// left empty.
    pub fn to_config(&self, base: &LabelerConfig) -> Option<LabelerConfig> {
        let folder = self.folder.trim();
        let extension = self.extension.trim().trim_start_matches('.');
        let output = self.output.trim();
        if folder.is_empty() || extension.is_empty() || output.is_empty() {
            return None;
        }

        Some(LabelerConfig {
            folder: PathBuf::from(folder),
            extension: extension.to_string(),
            output: PathBuf::from(output),
            display_size: base.display_size,
        })
    }

    /// Draws the editable fields. Returns true when "Reload" was clicked.
    pub fn show(&mut self, ui: &mut egui::Ui) -> bool {
        egui::Grid::new("settings_grid")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Folder");
                ui.text_edit_singleline(&mut self.folder);
                ui.end_row();

                ui.label("Extension");
                ui.text_edit_singleline(&mut self.extension);
                ui.end_row();

                ui.label("Results file");
                ui.text_edit_singleline(&mut self.output);
                ui.end_row();
            });

        let clicked = ui.button("Reload").clicked();
        if clicked {
            info!("User requested reload with {:?}", self);
        }
        clicked
    }
}
