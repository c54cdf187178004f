use eframe::egui::{self, Event};
use log::{info, warn};

use crate::labeler::{self, Label, LabelerConfig, LabelingSession, Progress};
use crate::util;
use crate::Args;

use crate::gui::frame_view::FrameView;
use crate::gui::settings::SettingsDraft;

const CONFIG_KEY: &str = "labeler_config";
const DONE_MESSAGE: &str = "🎉 All GIFs Labeled! 🎉";

pub struct LabelingPanel {
    config: LabelerConfig,
    session: Option<LabelingSession>,
    frame_view: FrameView,
    draft: SettingsDraft,
    is_settings_open: bool,
    last_error: Option<String>,
}

impl LabelingPanel {
    pub fn new(cc: &eframe::CreationContext<'_>, args: &Args) -> Self {
        let stored = match cc.storage.and_then(|s| s.get_string(CONFIG_KEY)) {
            Some(json) => serde_json::from_str::<LabelerConfig>(&json).unwrap_or_else(|e| {
                warn!("Ignoring unreadable stored config: {}", e);
                LabelerConfig::default()
            }),
            None => {
                info!("Labeler config not found in storage");
                LabelerConfig::default()
            }
        };

        let mut panel = LabelingPanel::with_config(args.apply(stored));
        panel.reload();
        panel
    }

    fn with_config(config: LabelerConfig) -> Self {
        Self {
            draft: SettingsDraft::from_config(&config),
            config,
            session: None,
            frame_view: FrameView::new(),
            is_settings_open: false,
            last_error: None,
        }
    }

    fn reload(&mut self) {
        info!("Opening labeling session with {:?}", self.config);
        self.frame_view.clear();
        match util::log_on_err(LabelingSession::open(&self.config)) {
            Ok(session) => {
                self.session = Some(session);
                self.last_error = None;
            }
            Err(e) => {
                self.session = None;
                self.last_error = Some(e.to_string());
            }
        }
    }

    fn apply_draft(&mut self) {
        match self.draft.to_config(&self.config) {
            Some(config) => {
                self.config = config;
                self.reload();
            }
            None => self.last_error = Some("Folder, extension and results file are required".to_string()),
        }
    }

    fn record(&mut self, label: Label) {
        let Some(session) = &mut self.session else {
            return;
        };

        match util::log_on_err(session.record(label)) {
            Ok(_) => self.last_error = None,
            Err(labeler::Error::NothingToLabel) => {}
            Err(e) => self.last_error = Some(e.to_string()),
        }
    }

    fn skip(&mut self) {
        let Some(session) = &mut self.session else {
            return;
        };

        match util::log_on_err(session.skip()) {
            Ok(_) => self.last_error = None,
            Err(labeler::Error::NothingToLabel) => {}
            Err(e) => self.last_error = Some(e.to_string()),
        }
    }

    fn show_header(&self, ui: &mut egui::Ui) {
        let text = match &self.session {
            Some(session) => match session.current() {
                Some(name) => format!("Labeling: {}", util::truncate_string(name, 60)),
                None => DONE_MESSAGE.to_string(),
            },
            None => "Loading...".to_string(),
        };
        ui.label(egui::RichText::new(text).size(14.0));
    }

    fn show_buttons(&mut self, ui: &mut egui::Ui) {
        let enabled = self
            .session
            .as_ref()
            .is_some_and(|session| !session.is_complete());

        let mut picked = None;
        let mut skipped = false;
        ui.add_enabled_ui(enabled, |ui| {
            ui.horizontal(|ui| {
                for label in Label::ALL {
                    let button = ui
                        .button(label.as_str())
                        .on_hover_text(format!("Key {}", label.shortcut()));
                    if button.clicked() {
                        picked = Some(label);
                    }
                }

                ui.separator();
                skipped = ui.button("Skip").clicked();
            });
        });

        if let Some(label) = picked {
            self.record(label);
        } else if skipped {
            self.skip();
        }
    }

    fn show_status(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if let Some(session) = &self.session {
                let Progress { labeled, total } = session.progress();
                ui.label(format!("{}/{}", labeled, total));
                ui.label(format!(
                    "({} labeled before, writing to {})",
                    session.previously_labeled(),
                    session.results().path().display()
                ));
            }
        });

        if let Some(error) = &self.last_error {
            ui.colored_label(ui.visuals().error_fg_color, error);
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let mut pressed_label = None;
        ctx.input(|i| {
            for event in &i.events {
                if let Event::Key {
                    key,
                    physical_key: _,
                    pressed,
                    repeat,
                    modifiers: _,
                } = event
                {
                    if *pressed && !*repeat {
                        pressed_label = key_to_label(*key).or(pressed_label);
                    }
                }
            }
        });

        if let Some(label) = pressed_label {
            self.record(label);
        }
    }
}

fn key_to_label(key: egui::Key) -> Option<Label> {
    let digit = match key {
        egui::Key::Num1 => 1,
        egui::Key::Num2 => 2,
        egui::Key::Num3 => 3,
        egui::Key::Num4 => 4,
        egui::Key::Num5 => 5,
        egui::Key::Num6 => 6,
        _ => return None,
    };
    Label::from_shortcut(digit)
}

impl eframe::App for LabelingPanel {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match serde_json::to_string(&self.config) {
            Ok(json) => storage.set_string(CONFIG_KEY, json),
            Err(e) => warn!("Failed to store labeler config: {}", e),
        }
    }

    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        if !ctx.wants_keyboard_input() {
            self.handle_keys(ctx);
        }

        // Keep the preview in step with the session before drawing.
        match &self.session {
            Some(session) => match (session.current(), session.current_path()) {
                (Some(name), Some(path)) => self.frame_view.update(
                    ctx,
                    session.position(),
                    name,
                    &path,
                    self.config.display_size,
                ),
                _ => self.frame_view.clear(),
            },
            None => self.frame_view.clear(),
        }

        egui::TopBottomPanel::top("Menu Bar")
            .frame(egui::Frame::none().inner_margin(4.0))
            .show(ctx, |ui| {
                if ui.button("Settings").clicked() {
                    self.is_settings_open = !self.is_settings_open;
                }
            });

        egui::SidePanel::left("Settings")
            .resizable(false)
            .show_animated(ctx, self.is_settings_open, |ui| {
                if self.draft.show(ui) {
                    self.apply_draft();
                }
            });

        egui::TopBottomPanel::bottom("Status").show(ctx, |ui| {
            self.show_status(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                self.show_header(ui);
                ui.add_space(10.0);
                self.frame_view.show(ui, self.config.display_size);
                ui.add_space(20.0);
                self.show_buttons(ui);
            });
        });
    }
}
