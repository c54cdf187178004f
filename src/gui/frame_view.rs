use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use log::error;
use std::path::Path;

use crate::labeler::{self, frame};

/// The preview of the file being labeled.
///
/// Decodes and uploads a file once, when the session moves onto it.
pub struct FrameView {
    shown: Option<(usize, String)>,
    texture: Option<TextureHandle>,
    error: Option<String>,
}

fn load_thumbnail(path: &Path, size: u32) -> Result<ColorImage, labeler::Error> {
    let frame = frame::decode_representative_frame(path)?;
    let thumbnail = frame::render_thumbnail(frame, size);
    let dims = [thumbnail.width() as usize, thumbnail.height() as usize];
    Ok(ColorImage::from_rgb(dims, thumbnail.as_raw()))
}

impl FrameView {
    pub fn new() -> FrameView {
        FrameView {
            shown: None,
            texture: None,
            error: None,
        }
    }

    /// Loads `name` unless it is already on screen.
    pub fn update(&mut self, ctx: &egui::Context, position: usize, name: &str, path: &Path, size: u32) {
        if let Some((shown_position, shown_name)) = &self.shown {
            if *shown_position == position && shown_name == name {
                return;
            }
        }

        self.shown = Some((position, name.to_string()));
        match load_thumbnail(path, size) {
            Ok(image) => {
                self.texture = Some(ctx.load_texture(name, image, TextureOptions::LINEAR));
                self.error = None;
            }
            Err(e) => {
                error!("{}", e);
                self.texture = None;
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn clear(&mut self) {
        self.shown = None;
        self.texture = None;
        self.error = None;
    }

    pub fn show(&self, ui: &mut egui::Ui, size: u32) {
        let size = egui::vec2(size as f32, size as f32);
        if let Some(texture) = &self.texture {
            ui.add(egui::Image::new(texture).fit_to_exact_size(size));
        } else if let Some(error) = &self.error {
            let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
            ui.painter()
                .rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);
            ui.put(
                rect.shrink(8.0),
                egui::Label::new(egui::RichText::new(error).color(ui.visuals().error_fg_color))
                    .wrap(),
            );
        }
    }
}
