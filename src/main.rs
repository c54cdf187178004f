mod gui;
mod labeler;
mod util;

use clap::Parser;
use std::path::PathBuf;

use labeler::LabelerConfig;

/// Shows animated images one at a time and records an emotion label for each.
#[derive(Parser, Debug, Default, Clone)]
#[command(version, about)]
pub struct Args {
    /// Folder containing the files to label
    #[arg(short, long)]
    folder: Option<PathBuf>,

    /// File extension to pick up, without the dot
    #[arg(short, long)]
    extension: Option<String>,

    /// CSV file the labels are appended to
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Edge length of the square preview, in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(16..=2048))]
    display_size: Option<u32>,
}

impl Args {
    /// Overrides whatever `config` holds with the flags that were given.
    pub fn apply(&self, mut config: LabelerConfig) -> LabelerConfig {
        if let Some(folder) = &self.folder {
            config.folder = folder.clone();
        }
        if let Some(extension) = &self.extension {
            config.extension = extension.trim_start_matches('.').to_string();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(display_size) = self.display_size {
            config.display_size = display_size;
        }
        config
    }
}

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    gui::run(args)
}
