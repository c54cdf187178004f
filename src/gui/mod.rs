mod frame_view;
mod labeling_panel;
mod settings;

use eframe::egui;
use labeling_panel::LabelingPanel;

use crate::Args;

pub fn run(args: Args) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([600.0, 600.0])
            .with_title("GIF Labeling App"),
        ..Default::default()
    };
    eframe::run_native(
        "gif-labeler",
        options,
        Box::new(move |cc| Ok(Box::new(LabelingPanel::new(cc, &args)))),
    )
}
